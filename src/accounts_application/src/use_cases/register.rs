use accounts_core::{Account, AccountStore, AccountStoreError, NewAccount};

/// Register use case - creates a new account
pub struct RegisterUseCase<'a, S>
where
    S: AccountStore,
{
    account_store: &'a S,
}

impl<'a, S> RegisterUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(account_store: &'a S) -> Self {
        Self { account_store }
    }

    /// Execute the register use case
    ///
    /// # Arguments
    /// * `account` - Validated name, email and plaintext password
    ///
    /// # Returns
    /// The stored account, or AccountStoreError if the email is taken or the
    /// store fails
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        let account = self.account_store.add_account(account).await?;
        tracing::info!(account_id = %account.id(), "account registered");
        Ok(account)
    }
}
