use accounts_core::{Account, AccountId, AccountStore, AccountStoreError, AccountUpdate};

/// Error types for update profile use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
}

/// Update profile use case - changes name, email and/or password
pub struct UpdateProfileUseCase<'a, S>
where
    S: AccountStore,
{
    account_store: &'a S,
}

impl<'a, S> UpdateProfileUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(account_store: &'a S) -> Self {
        Self { account_store }
    }

    /// Execute the update profile use case
    ///
    /// An empty update is answered with the current account without touching
    /// the store's write path.
    #[tracing::instrument(name = "UpdateProfileUseCase::execute", skip(self, update))]
    pub async fn execute(
        &self,
        account_id: AccountId,
        update: AccountUpdate,
    ) -> Result<Account, UpdateProfileError> {
        if update.is_empty() {
            return Ok(self.account_store.get_account(account_id).await?);
        }

        let password_changed = update.password.is_some();
        let account = self.account_store.update_account(account_id, update).await?;
        tracing::info!(%account_id, password_changed, "profile updated");

        Ok(account)
    }
}
