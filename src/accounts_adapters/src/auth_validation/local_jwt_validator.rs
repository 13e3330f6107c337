use std::sync::Arc;

use accounts_core::{
    AccountId, AuthValidator, Clock, SessionError, SessionToken, SessionTokens, SystemClock,
};
use async_trait::async_trait;
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct JwtAuthConfig {
    pub jwt_cookie_name: String,
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
    pub secure_cookie: bool,
}

impl JwtAuthConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

/// Issues and checks HS256 session tokens signed with a server-held secret.
///
/// Expiry is checked against the injected [`Clock`] rather than inside
/// `jsonwebtoken`, so it can be exercised deterministically.
#[derive(Clone)]
pub struct LocalJwtValidator {
    config: JwtAuthConfig,
    clock: Arc<dyn Clock>,
}

impl LocalJwtValidator {
    pub fn new(config: JwtAuthConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: JwtAuthConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &JwtAuthConfig {
        &self.config
    }

    pub fn cookie_name(&self) -> &str {
        &self.config.jwt_cookie_name
    }

    /// Cookie carrying a freshly issued token.
    pub fn session_cookie(&self, token: SessionToken) -> Cookie<'static> {
        create_auth_cookie(token, &self.config)
    }

    /// Logout has no server-side state to drop; it only tells the client to
    /// forget the cookie.
    pub fn revoke(&self) -> Cookie<'static> {
        create_removal_cookie(&self.config)
    }
}

impl SessionTokens for LocalJwtValidator {
    fn issue(&self, account_id: AccountId) -> Result<SessionToken, SessionError> {
        generate_auth_token(account_id, self.clock.now().timestamp(), &self.config)
    }

    fn validate(&self, token: &str) -> Result<AccountId, SessionError> {
        let claims = decode_auth_token(token, self.config.as_bytes())?;

        if self.clock.now().timestamp() >= claims.exp {
            return Err(SessionError::Expired);
        }

        claims
            .sub
            .parse::<AccountId>()
            .map_err(|_| SessionError::Malformed)
    }
}

#[async_trait]
impl AuthValidator for LocalJwtValidator {
    type Claims = AccountId;
    type RequestParts = http::request::Parts;
    type Error = SessionError;

    async fn validate_request(
        &self,
        parts: &Self::RequestParts,
    ) -> Result<Self::Claims, Self::Error> {
        // Extract cookie jar from request headers
        let cookie_jar = CookieJar::from_headers(&parts.headers);

        let token = extract_token(&cookie_jar, &self.config.jwt_cookie_name)?;

        SessionTokens::validate(self, token)
    }
}

pub fn extract_token<'a>(jar: &'a CookieJar, cookie_name: &str) -> Result<&'a str, SessionError> {
    match jar.get(cookie_name) {
        Some(cookie) if !cookie.value().is_empty() => Ok(cookie.value()),
        _ => Err(SessionError::Missing),
    }
}

// Create cookie and set the value to the passed-in token string
pub fn create_auth_cookie(token: SessionToken, config: &JwtAuthConfig) -> Cookie<'static> {
    Cookie::build((config.jwt_cookie_name.clone(), token.into_string()))
        .path("/") // apply cookie to all URLs on the server
        .http_only(true) // prevent JavaScript from accessing the cookie
        .secure(config.secure_cookie)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::seconds(config.token_ttl_in_seconds))
        .build()
}

pub fn create_removal_cookie(config: &JwtAuthConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build((config.jwt_cookie_name.clone(), ""))
        .path("/")
        .http_only(true)
        .secure(config.secure_cookie)
        .same_site(SameSite::Strict)
        .build();
    cookie.make_removal();
    cookie
}

// Create JWT auth token
pub fn generate_auth_token(
    account_id: AccountId,
    issued_at: i64,
    config: &JwtAuthConfig,
) -> Result<SessionToken, SessionError> {
    let exp = issued_at
        .checked_add(config.token_ttl_in_seconds)
        .ok_or(SessionError::Unexpected("Duration out of range".to_string()))?;

    let claims = Claims {
        sub: account_id.to_string(),
        iat: issued_at,
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.as_bytes()),
    )
    .map(SessionToken::from)
    .map_err(|e| SessionError::Unexpected(e.to_string()))
}

// Check signature and shape only; expiry is the caller's job.
fn decode_auth_token(token: &str, secret: &[u8]) -> Result<Claims, SessionError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.set_required_spec_claims(&["exp", "sub"]);

    decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => SessionError::BadSignature,
            ErrorKind::ExpiredSignature => SessionError::Expired,
            _ => SessionError::Malformed,
        })
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}
