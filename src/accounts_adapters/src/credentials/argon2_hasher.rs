use std::sync::LazyLock;

use accounts_core::{HashedPassword, Password};
use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashingError {
    #[error("Invalid hashing parameters: {0}")]
    Params(String),
    #[error("Failed to hash password: {0}")]
    Hash(String),
    #[error("Stored password hash is unreadable: {0}")]
    CorruptHash(String),
    #[error("Hashing task failed: {0}")]
    Task(String),
}

// Verified against when the email is unknown, so a miss costs as much as a
// wrong password.
static DUMMY_HASH: LazyLock<Option<HashedPassword>> = LazyLock::new(|| {
    let password = Password::try_from(Secret::from("dummy-password".to_string())).ok()?;
    hash_password(&password).ok()
});

fn hasher() -> Result<Argon2<'static>, HashingError> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| HashingError::Params(e.to_string()))?,
    ))
}

/// Hash `password` with a fresh random salt. The result is a PHC string that
/// embeds algorithm, parameters and salt.
pub fn hash_password(password: &Password) -> Result<HashedPassword, HashingError> {
    hash_with(&hasher()?, password)
}

/// Re-hash `candidate` with the salt embedded in `stored` and compare in
/// constant time.
pub fn password_matches(
    stored: &HashedPassword,
    candidate: &Password,
) -> Result<bool, HashingError> {
    matches_with(&hasher()?, stored, candidate)
}

fn hash_with(argon2: &Argon2<'_>, password: &Password) -> Result<HashedPassword, HashingError> {
    let salt = SaltString::generate(&mut rand_core::OsRng);
    argon2
        .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
        .map(|h| HashedPassword::new(Secret::from(h.to_string())))
        .map_err(|e| HashingError::Hash(e.to_string()))
}

// Cost parameters are read back from the PHC string, not from `argon2`.
fn matches_with(
    argon2: &Argon2<'_>,
    stored: &HashedPassword,
    candidate: &Password,
) -> Result<bool, HashingError> {
    let expected = PasswordHash::new(stored.as_ref().expose_secret())
        .map_err(|e| HashingError::CorruptHash(e.to_string()))?;

    match argon2.verify_password(candidate.as_ref().expose_secret().as_bytes(), &expected) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(HashingError::CorruptHash(e.to_string())),
    }
}

/// Build the dummy hash now rather than on the first unknown-email login.
/// Returns `false` if it could not be built.
pub fn warm_up_dummy_hash() -> bool {
    LazyLock::force(&DUMMY_HASH).is_some()
}

#[tracing::instrument(name = "Computing password hash", skip_all)]
pub async fn compute_password_hash(password: Password) -> Result<HashedPassword, HashingError> {
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || current_span.in_scope(|| hash_password(&password)))
        .await
        .map_err(|e| HashingError::Task(e.to_string()))?
}

#[tracing::instrument(name = "Verify password hash", skip_all)]
pub async fn verify_password_hash(
    expected_password_hash: HashedPassword,
    password_candidate: Password,
) -> Result<bool, HashingError> {
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| password_matches(&expected_password_hash, &password_candidate))
    })
    .await
    .map_err(|e| HashingError::Task(e.to_string()))?
}

/// Burn the same work as a real verification. The outcome is discarded.
#[tracing::instrument(name = "Verify against dummy hash", skip_all)]
pub async fn verify_against_dummy(password_candidate: Password) {
    let current_span: tracing::Span = tracing::Span::current();

    let _ = tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            if let Some(dummy) = DUMMY_HASH.as_ref() {
                let _ = password_matches(dummy, &password_candidate);
            }
        })
    })
    .await;
}
