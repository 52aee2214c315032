//! # Form configuration — `signup.toml`
//!
//! Tunes the two behaviours of the sign-up form that have more than one
//! defensible answer.
//!
//! ```toml
//! [username]
//! legacy_charset = false   # true: accept the historical `A-z` range
//!
//! [hints]
//! password_requires_value = false   # true: hide password help until typing starts
//! ```
//!
//! Every section is `#[serde(default)]`, so a missing or empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};

use crate::field::HintGate;
use crate::rules::{Rules, UsernameCharset};

/// Top-level configuration stored in `signup.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub username: UsernameConfig,
    #[serde(default)]
    pub hints: HintConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsernameConfig {
    /// Accept `[ \ ] ^ _` and the backtick wherever a letter is accepted.
    #[serde(default)]
    pub legacy_charset: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HintConfig {
    /// Show the password help only once the field is non-empty.
    #[serde(default)]
    pub password_requires_value: bool,
}

impl FormConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "signup.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to select the legacy username character set.
    pub fn with_legacy_charset(mut self, legacy: bool) -> Self {
        self.username.legacy_charset = legacy;
        self
    }

    /// Builder method to gate the password help on a non-empty value.
    pub fn with_password_hint_requires_value(mut self, requires: bool) -> Self {
        self.hints.password_requires_value = requires;
        self
    }

    /// The validation rules this configuration selects.
    pub fn rules(&self) -> Rules {
        let charset = if self.username.legacy_charset {
            UsernameCharset::Legacy
        } else {
            UsernameCharset::Strict
        };
        Rules::new(charset)
    }

    /// Gate for the password help text, overriding the descriptor default when configured.
    pub fn password_hint_gate(&self) -> Option<HintGate> {
        self.hints
            .password_requires_value
            .then_some(HintGate::WhenInvalidAndFilled)
    }
}
