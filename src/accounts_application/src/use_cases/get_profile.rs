use accounts_core::{Account, AccountId, AccountStore, AccountStoreError};

/// Error types for get profile use case
#[derive(Debug, thiserror::Error)]
pub enum GetProfileError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
}

/// Get profile use case - loads the account behind a validated session
pub struct GetProfileUseCase<'a, S>
where
    S: AccountStore,
{
    account_store: &'a S,
}

impl<'a, S> GetProfileUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(account_store: &'a S) -> Self {
        Self { account_store }
    }

    #[tracing::instrument(name = "GetProfileUseCase::execute", skip(self))]
    pub async fn execute(&self, account_id: AccountId) -> Result<Account, GetProfileError> {
        Ok(self.account_store.get_account(account_id).await?)
    }
}
