use std::collections::HashMap;
use std::sync::Arc;

use accounts_core::{
    Account, AccountId, AccountStore, AccountStoreError, AccountUpdate, Email, HashedPassword,
    NewAccount, Password,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

// Stand-in for a real hasher; only needs to be different from the plaintext.
pub fn fake_hash(password: &Password) -> HashedPassword {
    HashedPassword::new(Secret::from(format!(
        "mock${}",
        password.as_ref().expose_secret()
    )))
}

#[derive(Clone, Default)]
pub struct MockAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl MockAccountStore {
    pub async fn stored(&self, id: AccountId) -> Option<Account> {
        self.accounts.read().await.get(&id).cloned()
    }
}

#[async_trait::async_trait]
impl AccountStore for MockAccountStore {
    async fn add_account(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.values().any(|a| a.email() == &account.email) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }
        let stored = Account::new(account.name, account.email, fake_hash(&account.password));
        accounts.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn authenticate(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        let account = accounts
            .values()
            .find(|a| a.email() == email)
            .ok_or(AccountStoreError::AccountNotFound)?;
        if account.password_hash() != &fake_hash(password) {
            return Err(AccountStoreError::IncorrectPassword);
        }
        Ok(account.clone())
    }

    async fn get_account(&self, id: AccountId) -> Result<Account, AccountStoreError> {
        self.stored(id).await.ok_or(AccountStoreError::AccountNotFound)
    }

    async fn update_account(
        &self,
        id: AccountId,
        update: AccountUpdate,
    ) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if let Some(email) = &update.email {
            if accounts.values().any(|a| a.email() == email && a.id() != id) {
                return Err(AccountStoreError::AccountAlreadyExists);
            }
        }
        let account = accounts
            .get_mut(&id)
            .ok_or(AccountStoreError::AccountNotFound)?;
        let new_hash = update.password.as_ref().map(fake_hash);
        account.apply(&update, new_hash);
        Ok(account.clone())
    }
}

pub fn new_account(name: &str, email: &str, password: &str) -> NewAccount {
    NewAccount {
        name: accounts_core::UserName::parse(name).unwrap(),
        email: Email::parse(email).unwrap(),
        password: Password::try_from(Secret::from(password.to_string())).unwrap(),
    }
}
