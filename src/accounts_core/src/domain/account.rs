use chrono::{DateTime, Utc};

use super::{
    account_id::AccountId, email::Email, hashed_password::HashedPassword, password::Password,
    user_name::UserName,
};

/// A persisted account. The password is only ever held in hashed form.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    name: UserName,
    email: Email,
    password_hash: HashedPassword,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Account {
    /// Build a brand new account from an already hashed password.
    pub fn new(name: UserName, email: Email, password_hash: HashedPassword) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild an account from storage.
    pub fn parse(
        id: AccountId,
        name: UserName,
        email: Email,
        password_hash: HashedPassword,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Apply the non-secret parts of an update. A re-hashed password, when the
    /// update carried one, is passed in separately by the store.
    pub fn apply(&mut self, update: &AccountUpdate, new_hash: Option<HashedPassword>) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(hash) = new_hash {
            self.password_hash = hash;
        }
        self.updated_at = Utc::now();
    }
}

/// Registration input, validated but not yet hashed.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: UserName,
    pub email: Email,
    pub password: Password,
}

/// Partial profile update. Absent fields are left untouched; the password is
/// only re-hashed when `password` is present.
#[derive(Debug, Clone, Default)]
pub struct AccountUpdate {
    pub name: Option<UserName>,
    pub email: Option<Email>,
    pub password: Option<Password>,
}

impl AccountUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}
