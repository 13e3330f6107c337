use secrecy::{ExposeSecret, Secret};

use super::error::ValidationError;

/// Plaintext password as submitted by a client. Never persisted.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = ValidationError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
