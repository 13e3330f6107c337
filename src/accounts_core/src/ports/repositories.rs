use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, AccountUpdate, NewAccount},
    account_id::AccountId,
    email::Email,
    password::Password,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("User already exists")]
    AccountAlreadyExists,
    #[error("User not found")]
    AccountNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AccountAlreadyExists, Self::AccountAlreadyExists)
                | (Self::AccountNotFound, Self::AccountNotFound)
                | (Self::IncorrectPassword, Self::IncorrectPassword)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence for accounts. Implementations hash passwords before they
/// store them and enforce email uniqueness.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn add_account(&self, account: NewAccount) -> Result<Account, AccountStoreError>;
    async fn authenticate(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<Account, AccountStoreError>;
    async fn get_account(&self, id: AccountId) -> Result<Account, AccountStoreError>;
    async fn update_account(
        &self,
        id: AccountId,
        update: AccountUpdate,
    ) -> Result<Account, AccountStoreError>;
}
