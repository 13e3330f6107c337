//! Axum surface of the accounts backend.
//!
//! Route handlers parse request bodies into domain values, run the matching
//! use case and translate the outcome into JSON. Protected routes sit behind
//! [`middleware::require_session`], which resolves the session cookie into
//! an [`accounts_core::AccountId`] request extension.
//!
//! # Usage
//!
//! ```ignore
//! use accounts_axum::{AppState, router};
//!
//! let state = AppState::new(HashMapAccountStore::default(), sessions);
//! let app = Router::new().nest("/api/users", router(state));
//! ```

pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::{ApiError, router};
pub use state::AppState;
