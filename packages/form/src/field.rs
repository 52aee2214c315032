//! # Field descriptor table
//!
//! Static metadata for the three inputs of the sign-up form. The table is built
//! at compile time and never depends on the current state: renderers iterate
//! [`FIELDS`] (or look a field up with [`descriptor`]) and pair each entry with
//! the matching [`FieldView`](crate::FieldView) from the engine.

/// Identifies one input of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    Username,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// All fields in render order.
    pub const ALL: [FieldId; 3] = [
        FieldId::Username,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            FieldId::Username => 0,
            FieldId::Password => 1,
            FieldId::ConfirmPassword => 2,
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(descriptor(*self).name)
    }
}

/// HTML input type of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Password => "password",
        }
    }
}

/// When the help text of a focused field is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintGate {
    /// As soon as the field is focused and invalid, even while empty.
    WhenInvalid,
    /// Only once something invalid has been typed.
    WhenInvalidAndFilled,
}

impl HintGate {
    pub fn allows(self, focused: bool, filled: bool, valid: bool) -> bool {
        match self {
            HintGate::WhenInvalid => focused && !valid,
            HintGate::WhenInvalidAndFilled => focused && filled && !valid,
        }
    }
}

/// Static description of one form input.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub label: &'static str,
    pub input: InputKind,
    /// `id` attribute of the `<input>`, also the `for` of its label.
    pub dom_id: &'static str,
    /// `name` attribute of the `<input>`.
    pub name: &'static str,
    /// `id` of the help paragraph, referenced by `aria-describedby`.
    pub note_id: &'static str,
    /// Help text, one line per entry.
    pub help: &'static [&'static str],
    pub hint_gate: HintGate,
    /// The positive indicator additionally requires a non-empty value.
    pub tick_requires_value: bool,
}

/// The descriptor table, in render order.
pub static FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor {
        id: FieldId::Username,
        label: "Username:",
        input: InputKind::Text,
        dom_id: "username",
        name: "userName",
        note_id: "uidnote",
        help: &[
            "4 to 24 characters.",
            "Must begin with a letter.",
            "Letters, numbers, underscores, hyphens allowed.",
        ],
        hint_gate: HintGate::WhenInvalidAndFilled,
        tick_requires_value: false,
    },
    FieldDescriptor {
        id: FieldId::Password,
        label: "Password:",
        input: InputKind::Password,
        dom_id: "password",
        name: "password",
        note_id: "pwdnote",
        help: &[
            "8 to 24 characters.",
            "Must include uppercase and lowercase letters, a number and a special character.",
            "Allowed special characters: ! @ # $ %",
        ],
        hint_gate: HintGate::WhenInvalid,
        tick_requires_value: false,
    },
    FieldDescriptor {
        id: FieldId::ConfirmPassword,
        label: "Confirm password:",
        input: InputKind::Password,
        dom_id: "confirm",
        name: "passwordConfirm",
        note_id: "matchnote",
        help: &["Must match the first password input field."],
        hint_gate: HintGate::WhenInvalid,
        tick_requires_value: true,
    },
];

/// Look up the descriptor of `id`.
pub fn descriptor(id: FieldId) -> &'static FieldDescriptor {
    &FIELDS[id.index()]
}
