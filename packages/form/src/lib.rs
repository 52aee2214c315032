//! # Form crate — validation and state for the sign-up form
//!
//! Everything the sign-up screen decides lives here; the `ui` crate only
//! renders a [`FormView`] and forwards [`FieldEvent`]s.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`rules`] | Pure username, password and confirmation predicates |
//! | [`field`] | Static descriptor table: labels, ids, help text, hint gates |
//! | [`state`] | [`FormState`]: values, focus, validity, error message, lifecycle |
//! | [`view`] | [`FormView`]: the per-render snapshot handed to the renderer |
//! | [`config`] | [`FormConfig`], loaded from `signup.toml` |
//! | [`account`] | [`AccountCreator`]: where submitted credentials are sent |
//!
//! ## Flow
//!
//! An input event goes through [`FormState::handle`], which stores the value and
//! recomputes the dependent validity flags in the same call. The renderer then
//! asks for [`FormState::view`] and looks up presentation details in
//! [`FIELDS`]. [`FormState::submit`] is the only way into the submitted state.

pub mod account;
pub mod config;
pub mod error;
pub mod field;
pub mod rules;
pub mod state;
pub mod view;

pub use account::{AccountCreator, NoopAccountCreator};
pub use config::FormConfig;
pub use error::{AccountError, SubmitError};
pub use field::{descriptor, FieldDescriptor, FieldId, HintGate, InputKind, FIELDS};
pub use rules::{valid_match, valid_password, valid_username, Rules, UsernameCharset};
pub use state::{Credentials, FieldEvent, FormState, Phase, Validity};
pub use view::{FieldView, FormView};
