use accounts_application::LoginUseCase;
use accounts_core::{AccountStore, Email, Password, ValidationError};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;

use super::{AccountResponse, error::ApiError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
}

impl LoginRequest {
    /// Input that cannot name an account or match a password is just another
    /// failed login.
    pub fn into_credentials(self) -> Result<(Email, Password), ApiError> {
        let email = self
            .email
            .ok_or(ValidationError::MissingEmail)
            .and_then(Email::try_from);
        let password = self
            .password
            .ok_or(ValidationError::MissingPassword)
            .and_then(Password::try_from);

        match (email, password) {
            (Ok(email), Ok(password)) => Ok((email, password)),
            _ => Err(ApiError::InvalidCredentials),
        }
    }
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S>(
    State(state): State<AppState<S>>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<AccountResponse>), ApiError>
where
    S: AccountStore + Clone + 'static,
{
    let Json(request) = payload?;
    let (email, password) = request.into_credentials()?;

    let (account, token) = LoginUseCase::new(&state.account_store, &state.sessions)
        .execute(email, password)
        .await?;

    let jar = jar.add(state.sessions.session_cookie(token));

    Ok((jar, Json(AccountResponse::from(&account))))
}
