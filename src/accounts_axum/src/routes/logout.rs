use accounts_core::AccountStore;
use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: &'static str,
}

/// Clears the session cookie. Works with or without a session.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<S>(
    State(state): State<AppState<S>>,
    jar: CookieJar,
) -> (CookieJar, Json<LogoutResponse>)
where
    S: AccountStore + Clone + 'static,
{
    let jar = jar.add(state.sessions.revoke());

    (
        jar,
        Json(LogoutResponse {
            message: "Logged out successfully",
        }),
    )
}
