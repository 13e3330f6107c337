use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use accounts_core::{
    Account, AccountId, AccountStore, AccountStoreError, AccountUpdate, Email, NewAccount,
    Password,
};

use crate::credentials::{compute_password_hash, verify_against_dummy, verify_password_hash};

#[derive(Default)]
struct Accounts {
    by_id: HashMap<AccountId, Account>,
    by_email: HashMap<Email, AccountId>,
}

/// In-memory account store. Passwords go through the same argon2 hashing as
/// the PostgreSQL store.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<Accounts>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn unexpected(e: impl ToString) -> AccountStoreError {
    AccountStoreError::UnexpectedError(e.to_string())
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    #[tracing::instrument(name = "Adding account to memory", skip_all)]
    async fn add_account(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        if self.accounts.read().await.by_email.contains_key(&account.email) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }

        // Hash outside the lock; uniqueness is re-checked before inserting.
        let password_hash = compute_password_hash(account.password)
            .await
            .map_err(unexpected)?;
        let account = Account::new(account.name, account.email, password_hash);

        let mut accounts = self.accounts.write().await;
        if accounts.by_email.contains_key(account.email()) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }
        accounts
            .by_email
            .insert(account.email().clone(), account.id());
        accounts.by_id.insert(account.id(), account.clone());

        Ok(account)
    }

    #[tracing::instrument(name = "Validating account credentials in memory", skip_all)]
    async fn authenticate(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<Account, AccountStoreError> {
        let account = {
            let accounts = self.accounts.read().await;
            accounts
                .by_email
                .get(email)
                .and_then(|id| accounts.by_id.get(id))
                .cloned()
        };

        let Some(account) = account else {
            verify_against_dummy(password.clone()).await;
            return Err(AccountStoreError::AccountNotFound);
        };

        let matches = verify_password_hash(account.password_hash().clone(), password.clone())
            .await
            .map_err(unexpected)?;
        if !matches {
            return Err(AccountStoreError::IncorrectPassword);
        }

        Ok(account)
    }

    async fn get_account(&self, id: AccountId) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .by_id
            .get(&id)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    #[tracing::instrument(name = "Updating account in memory", skip_all)]
    async fn update_account(
        &self,
        id: AccountId,
        update: AccountUpdate,
    ) -> Result<Account, AccountStoreError> {
        // Only a password present in the update is hashed; otherwise the stored
        // hash is carried over untouched.
        let new_hash = match &update.password {
            Some(password) => Some(
                compute_password_hash(password.clone())
                    .await
                    .map_err(unexpected)?,
            ),
            None => None,
        };

        let mut guard = self.accounts.write().await;
        let accounts = &mut *guard;

        if let Some(email) = &update.email {
            if accounts.by_email.get(email).is_some_and(|owner| *owner != id) {
                return Err(AccountStoreError::AccountAlreadyExists);
            }
        }

        let account = accounts
            .by_id
            .get_mut(&id)
            .ok_or(AccountStoreError::AccountNotFound)?;
        let previous_email = account.email().clone();
        account.apply(&update, new_hash);

        if account.email() != &previous_email {
            accounts.by_email.remove(&previous_email);
            accounts.by_email.insert(account.email().clone(), id);
        }

        Ok(account.clone())
    }
}
