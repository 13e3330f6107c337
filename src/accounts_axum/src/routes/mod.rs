//! Account routes, mounted by the service under `/api/users`.

pub mod error;
pub mod login;
pub mod logout;
pub mod profile;
pub mod register;

pub use error::{ApiError, ErrorResponse, not_found};
pub use login::login;
pub use logout::logout;
pub use profile::{get_profile, update_profile};
pub use register::register;

use accounts_core::{Account, AccountId, AccountStore};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::{middleware::require_session, state::AppState};

/// Public view of an account. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: AccountId,
    pub name: String,
    pub email: String,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id(),
            name: account.name().as_ref().to_string(),
            email: account.email().as_ref().expose_secret().clone(),
        }
    }
}

/// Build the account router. `/profile` is the only protected resource.
pub fn router<S>(state: AppState<S>) -> Router
where
    S: AccountStore + Clone + 'static,
{
    Router::new()
        .route("/register", post(register::<S>))
        .route("/login", post(login::<S>))
        .route("/logout", post(logout::<S>))
        .route(
            "/profile",
            get(get_profile::<S>)
                .put(update_profile::<S>)
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    require_session::<S>,
                )),
        )
        .fallback(not_found)
        .with_state(state)
}
