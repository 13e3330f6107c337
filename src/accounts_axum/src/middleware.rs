use accounts_core::{AccountStore, AuthValidator, SessionError};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{routes::ApiError, state::AppState};

/// Resolve the session cookie into an [`accounts_core::AccountId`] extension.
///
/// Every rejection kind is logged, then answered with the same
/// "Not authorized" response.
pub async fn require_session<S>(
    State(state): State<AppState<S>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    S: AccountStore + Clone + 'static,
{
    let (mut parts, body) = request.into_parts();

    let account_id = state
        .sessions
        .validate_request(&parts)
        .await
        .inspect_err(|e: &SessionError| {
            tracing::warn!(kind = e.kind(), path = %parts.uri.path(), "session rejected")
        })?;

    parts.extensions.insert(account_id);

    Ok(next.run(Request::from_parts(parts, body)).await)
}
