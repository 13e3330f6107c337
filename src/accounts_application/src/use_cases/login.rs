use accounts_core::{
    Account, AccountStore, AccountStoreError, Email, Password, SessionError, SessionToken,
    SessionTokens,
};

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Unknown email or wrong password. The two are deliberately merged.
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Account store error: {0}")]
    AccountStoreError(AccountStoreError),
    #[error("Session error: {0}")]
    SessionError(#[from] SessionError),
}

impl From<AccountStoreError> for LoginError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::AccountNotFound | AccountStoreError::IncorrectPassword => {
                LoginError::InvalidCredentials
            }
            other => LoginError::AccountStoreError(other),
        }
    }
}

/// Login use case - verifies credentials and mints a session token
pub struct LoginUseCase<'a, S, T>
where
    S: AccountStore,
    T: SessionTokens,
{
    account_store: &'a S,
    session_tokens: &'a T,
}

impl<'a, S, T> LoginUseCase<'a, S, T>
where
    S: AccountStore,
    T: SessionTokens,
{
    pub fn new(account_store: &'a S, session_tokens: &'a T) -> Self {
        Self {
            account_store,
            session_tokens,
        }
    }

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `email` - Account email address
    /// * `password` - Candidate password
    ///
    /// # Returns
    /// The authenticated account and a freshly issued session token
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
    ) -> Result<(Account, SessionToken), LoginError> {
        let account = match self.account_store.authenticate(&email, &password).await {
            Ok(account) => account,
            Err(e) => {
                tracing::warn!(reason = %e, "login rejected");
                return Err(e.into());
            }
        };

        let token = self.session_tokens.issue(account.id())?;
        Ok((account, token))
    }
}
