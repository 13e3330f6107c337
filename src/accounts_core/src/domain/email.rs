use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};

use super::error::ValidationError;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid email regex"));

/// Normalised email address: trimmed and lower-cased.
///
/// Two addresses that differ only in case or surrounding whitespace parse to
/// equal values, which is what makes the uniqueness constraint
/// case-insensitive.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let normalised = raw.trim().to_lowercase();
        if normalised.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !EMAIL_SHAPE.is_match(&normalised) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self(Secret::new(normalised)))
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = ValidationError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value.expose_secret())
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
