use accounts_application::RegisterUseCase;
use accounts_core::{AccountStore, Email, NewAccount, Password, UserName, ValidationError};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use secrecy::Secret;
use serde::Deserialize;

use super::{AccountResponse, error::ApiError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
}

impl RegisterRequest {
    /// Fields are checked in order name, email, password; the first failure
    /// wins.
    pub fn into_new_account(self) -> Result<NewAccount, ValidationError> {
        let name = UserName::parse(self.name.as_deref().unwrap_or_default())?;
        let email = self
            .email
            .ok_or(ValidationError::MissingEmail)
            .and_then(Email::try_from)?;
        let password = self
            .password
            .ok_or(ValidationError::MissingPassword)
            .and_then(Password::try_from)?;

        Ok(NewAccount {
            name,
            email,
            password,
        })
    }
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError>
where
    S: AccountStore + Clone + 'static,
{
    let Json(request) = payload?;
    let new_account = request.into_new_account()?;

    let account = RegisterUseCase::new(&state.account_store)
        .execute(new_account)
        .await?;

    Ok((StatusCode::CREATED, Json(AccountResponse::from(&account))))
}
