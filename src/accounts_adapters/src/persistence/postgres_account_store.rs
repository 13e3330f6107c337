use accounts_core::{
    Account, AccountId, AccountStore, AccountStoreError, AccountUpdate, Email, HashedPassword,
    NewAccount, Password, UserName,
};
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, migrate::Migrator};
use uuid::Uuid;

use crate::credentials::{compute_password_hash, verify_against_dummy, verify_password_hash};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresAccountStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountStoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account::parse(
            AccountId::from(row.id),
            UserName::parse(&row.name).map_err(unexpected)?,
            Email::parse(&row.email).map_err(unexpected)?,
            HashedPassword::new(Secret::from(row.password_hash)),
            row.created_at,
            row.updated_at,
        ))
    }
}

fn unexpected(e: impl ToString) -> AccountStoreError {
    AccountStoreError::UnexpectedError(e.to_string())
}

fn map_write_error(e: sqlx::Error) -> AccountStoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AccountStoreError::AccountAlreadyExists;
        }
    }
    unexpected(e)
}

const ACCOUNT_COLUMNS: &str = "id, name, email, password_hash, created_at, updated_at";

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn add_account(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        let password_hash = compute_password_hash(account.password)
            .await
            .map_err(unexpected)?;

        let query = format!(
            "INSERT INTO accounts (id, name, email, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING {ACCOUNT_COLUMNS}"
        );

        let row: AccountRow = sqlx::query_as(&query)
            .bind(*AccountId::new().as_uuid())
            .bind(account.name.as_ref())
            .bind(account.email.as_ref().expose_secret())
            .bind(password_hash.as_ref().expose_secret())
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)?;

        row.try_into()
    }

    #[tracing::instrument(name = "Validating account credentials in PostgreSQL", skip_all)]
    async fn authenticate(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<Account, AccountStoreError> {
        // Matches the expression in the unique index so the lookup uses it.
        let query = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE lower(email) = $1");

        let row: Option<AccountRow> = sqlx::query_as(&query)
            .bind(email.as_ref().expose_secret())
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?;

        let Some(row) = row else {
            verify_against_dummy(password.clone()).await;
            return Err(AccountStoreError::AccountNotFound);
        };

        let account = Account::try_from(row)?;
        let matches = verify_password_hash(account.password_hash().clone(), password.clone())
            .await
            .map_err(unexpected)?;
        if !matches {
            return Err(AccountStoreError::IncorrectPassword);
        }

        Ok(account)
    }

    #[tracing::instrument(name = "Retrieving account from PostgreSQL", skip(self))]
    async fn get_account(&self, id: AccountId) -> Result<Account, AccountStoreError> {
        let query = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1");

        let row: Option<AccountRow> = sqlx::query_as(&query)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?;

        row.ok_or(AccountStoreError::AccountNotFound)?.try_into()
    }

    #[tracing::instrument(name = "Updating account in PostgreSQL", skip(self, update))]
    async fn update_account(
        &self,
        id: AccountId,
        update: AccountUpdate,
    ) -> Result<Account, AccountStoreError> {
        // NULL parameters keep the current column value, so the hash column is
        // only written when the update carries a new password.
        let new_hash = match update.password {
            Some(password) => Some(compute_password_hash(password).await.map_err(unexpected)?),
            None => None,
        };

        let query = format!(
            "UPDATE accounts
             SET name = COALESCE($2, name),
                 email = COALESCE($3, email),
                 password_hash = COALESCE($4, password_hash),
                 updated_at = now()
             WHERE id = $1
             RETURNING {ACCOUNT_COLUMNS}"
        );

        let row: Option<AccountRow> = sqlx::query_as(&query)
            .bind(id.as_uuid())
            .bind(update.name.as_ref().map(|name| name.as_ref().to_string()))
            .bind(
                update
                    .email
                    .as_ref()
                    .map(|email| email.as_ref().expose_secret().clone()),
            )
            .bind(new_hash.as_ref().map(|hash| hash.as_ref().expose_secret().clone()))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error)?;

        row.ok_or(AccountStoreError::AccountNotFound)?.try_into()
    }
}
