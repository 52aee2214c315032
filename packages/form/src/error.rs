use thiserror::Error;

use crate::FieldId;

/// Why a submit attempt did not enter the submitted state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form is not ready to submit: invalid {}", join(.failing))]
    Ineligible { failing: Vec<FieldId> },
    #[error("form has already been submitted")]
    AlreadySubmitted,
}

/// Failure reported by an [`AccountCreator`](crate::AccountCreator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// The collaborator refused the credentials.
    #[error("{0}")]
    Rejected(String),
}

fn join(fields: &[FieldId]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ineligible_lists_fields() {
        let err = SubmitError::Ineligible {
            failing: vec![FieldId::Username, FieldId::ConfirmPassword],
        };
        assert_eq!(
            err.to_string(),
            "form is not ready to submit: invalid userName, passwordConfirm"
        );
    }

    #[test]
    fn test_rejected_displays_message() {
        let err = AccountError::Rejected("Username taken".into());
        assert_eq!(err.to_string(), "Username taken");
    }
}
