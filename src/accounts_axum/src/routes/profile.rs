use accounts_application::{GetProfileUseCase, UpdateProfileUseCase};
use accounts_core::{
    AccountId, AccountStore, AccountUpdate, Email, Password, UserName, ValidationError,
};
use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::{AccountResponse, error::ApiError};
use crate::state::AppState;

#[tracing::instrument(name = "Get profile", skip(state))]
pub async fn get_profile<S>(
    State(state): State<AppState<S>>,
    Extension(account_id): Extension<AccountId>,
) -> Result<Json<AccountResponse>, ApiError>
where
    S: AccountStore + Clone + 'static,
{
    let account = GetProfileUseCase::new(&state.account_store)
        .execute(account_id)
        .await?;

    Ok(Json(AccountResponse::from(&account)))
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
}

impl UpdateProfileRequest {
    /// Blank fields count as absent, so clients can send back a whole form.
    pub fn into_update(self) -> Result<AccountUpdate, ValidationError> {
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .map(|name| UserName::parse(&name))
            .transpose()?;
        let email = self
            .email
            .filter(|email| !email.expose_secret().trim().is_empty())
            .map(Email::try_from)
            .transpose()?;
        let password = self
            .password
            .filter(|password| !password.expose_secret().is_empty())
            .map(Password::try_from)
            .transpose()?;

        Ok(AccountUpdate {
            name,
            email,
            password,
        })
    }
}

#[tracing::instrument(name = "Update profile", skip(state, payload))]
pub async fn update_profile<S>(
    State(state): State<AppState<S>>,
    Extension(account_id): Extension<AccountId>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<Json<AccountResponse>, ApiError>
where
    S: AccountStore + Clone + 'static,
{
    let Json(request) = payload?;
    let update = request.into_update()?;

    let account = UpdateProfileUseCase::new(&state.account_store)
        .execute(account_id, update)
        .await?;

    Ok(Json(AccountResponse::from(&account)))
}
