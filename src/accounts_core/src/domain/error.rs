use thiserror::Error;

/// Reasons a value submitted by a client cannot become a domain value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,
    #[error("Email is required")]
    MissingEmail,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password is required")]
    MissingPassword,
    #[error("Invalid account id")]
    InvalidAccountId,
}
