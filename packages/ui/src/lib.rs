//! This crate contains the sign-up form components shared by the platform crates.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const REGISTER_CSS: Asset = asset!("/assets/register.css");

mod register_form;
pub use register_form::{use_register_form, RegisterForm};

mod field_row;
pub use field_row::FieldRow;

mod success_panel;
pub use success_panel::SuccessPanel;

mod sign_in_prompt;
pub use sign_in_prompt::SignInPrompt;
