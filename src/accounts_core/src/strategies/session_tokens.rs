use thiserror::Error;

use crate::domain::account_id::AccountId;

/// Signed, self-contained bearer credential proving a prior login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for SessionToken {
    fn from(s: String) -> Self {
        SessionToken(s)
    }
}

/// Why a session token was rejected. Kept apart for diagnostics only; clients
/// always see the same unauthorized response.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Missing token")]
    Missing,
    #[error("Malformed token")]
    Malformed,
    #[error("Token has expired")]
    Expired,
    #[error("Token signature does not match")]
    BadSignature,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl SessionError {
    pub fn kind(&self) -> &'static str {
        match self {
            SessionError::Missing => "missing",
            SessionError::Malformed => "malformed",
            SessionError::Expired => "expired",
            SessionError::BadSignature => "bad-signature",
            SessionError::Unexpected(_) => "unexpected",
        }
    }
}

/// Mints and checks session tokens.
pub trait SessionTokens: Send + Sync {
    /// Sign a token for `account_id` that expires a fixed duration from now.
    fn issue(&self, account_id: AccountId) -> Result<SessionToken, SessionError>;

    /// Check signature and expiry and resolve the token to its account.
    fn validate(&self, token: &str) -> Result<AccountId, SessionError>;
}
