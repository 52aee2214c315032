//! Render snapshot derived from a [`FormState`].
//!
//! A [`FormView`] is everything a renderer needs and nothing it could use to
//! mutate the form: per-field visibility flags plus the form-level submit and
//! error state.

use crate::field::{descriptor, FieldId};
use crate::state::FormState;

/// What the presentation layer shows for one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView {
    pub id: FieldId,
    pub value: String,
    pub show_instructions: bool,
    pub show_tick: bool,
    pub show_cross: bool,
    /// Drives `aria-invalid`.
    pub invalid: bool,
}

/// What the presentation layer shows for the whole form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormView {
    pub fields: [FieldView; 3],
    pub submit_enabled: bool,
    pub submitted: bool,
    pub error_message: String,
}

impl FieldView {
    fn derive(state: &FormState, id: FieldId) -> Self {
        let value = state.value(id);
        let filled = !value.is_empty();
        let valid = state.is_valid(id);
        let tick_requires_value = descriptor(id).tick_requires_value;
        Self {
            id,
            value: value.to_string(),
            show_instructions: state
                .hint_gate(id)
                .allows(state.is_focused(id), filled, valid),
            show_tick: valid && (filled || !tick_requires_value),
            // No cross before the user has typed anything.
            show_cross: !valid && filled,
            invalid: !valid,
        }
    }
}

impl FormView {
    pub fn field(&self, id: FieldId) -> &FieldView {
        &self.fields[id.index()]
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}

impl FormState {
    /// Snapshot of the current render state.
    pub fn view(&self) -> FormView {
        let submitted = self.is_submitted();
        FormView {
            fields: FieldId::ALL.map(|id| FieldView::derive(self, id)),
            submit_enabled: self.can_submit(),
            submitted,
            error_message: if submitted {
                String::new()
            } else {
                self.error_message().to_string()
            },
        }
    }
}

impl From<&FormState> for FormView {
    fn from(state: &FormState) -> Self {
        state.view()
    }
}
