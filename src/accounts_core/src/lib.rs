pub mod domain;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountUpdate, NewAccount},
    account_id::AccountId,
    email::Email,
    error::ValidationError,
    hashed_password::HashedPassword,
    password::Password,
    user_name::UserName,
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::{Clock, SystemClock},
};

pub use strategies::{
    auth_validator::AuthValidator,
    session_tokens::{SessionError, SessionToken, SessionTokens},
};
