use crate::error::AccountError;
use crate::state::Credentials;

/// Async hand-off point for the credentials of a submitted form.
pub trait AccountCreator {
    fn create_account(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<(), AccountError>>;
}

/// Accepts every submission without contacting anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopAccountCreator;

impl AccountCreator for NoopAccountCreator {
    async fn create_account(&self, credentials: &Credentials) -> Result<(), AccountError> {
        tracing::info!(username = %credentials.username, "account creation is not wired up, accepting");
        Ok(())
    }
}
