//! # Form state engine
//!
//! [`FormState`] owns the three input values and everything derived from them.
//! Each event is applied by [`FormState::handle`] in one step: the value is
//! stored, the validity flags that depend on it are recomputed and the error
//! message is cleared before the method returns, so a reader never sees a new
//! value paired with a stale flag.
//!
//! The lifecycle is a two-state machine. [`Phase::Editing`] accepts events;
//! [`FormState::submit`] moves to [`Phase::Submitted`] when every field is
//! valid, and from there nothing changes any more.

use crate::config::FormConfig;
use crate::error::SubmitError;
use crate::field::{descriptor, FieldId, HintGate};
use crate::rules::Rules;

/// Lifecycle of the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitted,
}

/// An input event from the presentation layer.
#[derive(Clone, PartialEq, Eq)]
pub enum FieldEvent {
    Input(FieldId, String),
    Focus(FieldId),
    Blur(FieldId),
}

impl FieldEvent {
    pub fn field(&self) -> FieldId {
        match self {
            FieldEvent::Input(id, _) | FieldEvent::Focus(id) | FieldEvent::Blur(id) => *id,
        }
    }
}

// Values are left out so password keystrokes never reach a log line.
impl std::fmt::Debug for FieldEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldEvent::Input(id, value) => f
                .debug_struct("Input")
                .field("field", id)
                .field("len", &value.chars().count())
                .finish(),
            FieldEvent::Focus(id) => f.debug_tuple("Focus").field(id).finish(),
            FieldEvent::Blur(id) => f.debug_tuple("Blur").field(id).finish(),
        }
    }
}

/// The three validity flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Validity {
    pub name: bool,
    pub password: bool,
    pub matches: bool,
}

impl Validity {
    /// Evaluate every rule from scratch.
    pub fn compute(username: &str, password: &str, confirm: &str, rules: &Rules) -> Self {
        Self {
            name: rules.username(username),
            password: rules.password(password),
            matches: rules.matches(password, confirm),
        }
    }

    /// Whether the form may be submitted.
    pub fn all(&self) -> bool {
        self.name && self.password && self.matches
    }

    pub fn get(&self, id: FieldId) -> bool {
        match id {
            FieldId::Username => self.name,
            FieldId::Password => self.password,
            FieldId::ConfirmPassword => self.matches,
        }
    }

    /// Fields whose flag is currently false, in render order.
    pub fn failing(&self) -> Vec<FieldId> {
        FieldId::ALL
            .into_iter()
            .filter(|id| !self.get(*id))
            .collect()
    }
}

/// The username/password pair handed over on a successful submit.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// State of the sign-up form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    values: [String; 3],
    focus: [bool; 3],
    validity: Validity,
    error_message: String,
    phase: Phase,
    rules: Rules,
    password_gate: HintGate,
}

impl Default for FormState {
    fn default() -> Self {
        Self::with_config(&FormConfig::default())
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &FormConfig) -> Self {
        let rules = config.rules();
        let password_gate = config
            .password_hint_gate()
            .unwrap_or(descriptor(FieldId::Password).hint_gate);
        Self {
            values: Default::default(),
            focus: [false; 3],
            validity: Validity::compute("", "", "", &rules),
            error_message: String::new(),
            phase: Phase::Editing,
            rules,
            password_gate,
        }
    }

    /// Apply one event. Returns `false` when the event was ignored because the
    /// form has already been submitted.
    pub fn handle(&mut self, event: FieldEvent) -> bool {
        if self.phase == Phase::Submitted {
            tracing::trace!(?event, "form submitted, ignoring event");
            return false;
        }
        match event {
            FieldEvent::Input(id, value) => self.set_value(id, value),
            FieldEvent::Focus(id) => self.focus[id.index()] = true,
            FieldEvent::Blur(id) => self.focus[id.index()] = false,
        }
        true
    }

    fn set_value(&mut self, id: FieldId, value: String) {
        self.values[id.index()] = value;
        let before = self.validity;
        match id {
            FieldId::Username => {
                self.validity.name = self.rules.username(&self.values[id.index()]);
            }
            // Both flags read the password, so they are refreshed together.
            FieldId::Password | FieldId::ConfirmPassword => {
                let password = &self.values[FieldId::Password.index()];
                let confirm = &self.values[FieldId::ConfirmPassword.index()];
                self.validity.password = self.rules.password(password);
                self.validity.matches = self.rules.matches(password, confirm);
            }
        }
        if before != self.validity {
            tracing::debug!(field = %id, validity = ?self.validity, "validity changed");
        }
        self.error_message.clear();
    }

    /// Enter [`Phase::Submitted`] and return the credentials, provided every field is valid.
    pub fn submit(&mut self) -> Result<Credentials, SubmitError> {
        if self.phase == Phase::Submitted {
            return Err(SubmitError::AlreadySubmitted);
        }
        if !self.validity.all() {
            let failing = self.validity.failing();
            tracing::warn!(?failing, "submit refused");
            return Err(SubmitError::Ineligible { failing });
        }
        self.phase = Phase::Submitted;
        self.error_message.clear();
        let credentials = Credentials {
            username: self.value(FieldId::Username).to_string(),
            password: self.value(FieldId::Password).to_string(),
        };
        tracing::info!(username = %credentials.username, "registration submitted");
        Ok(credentials)
    }

    /// Show `message` until the next input. Ignored once submitted.
    pub fn set_error(&mut self, message: impl Into<String>) {
        if self.phase == Phase::Submitted {
            return;
        }
        self.error_message = message.into();
    }

    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Editing && self.validity.all()
    }

    pub fn value(&self, id: FieldId) -> &str {
        &self.values[id.index()]
    }

    pub fn is_focused(&self, id: FieldId) -> bool {
        self.focus[id.index()]
    }

    pub fn is_valid(&self, id: FieldId) -> bool {
        self.validity.get(id)
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Gate for the help text of `id`, after configuration overrides.
    pub fn hint_gate(&self, id: FieldId) -> HintGate {
        match id {
            FieldId::Password => self.password_gate,
            _ => descriptor(id).hint_gate,
        }
    }
}
