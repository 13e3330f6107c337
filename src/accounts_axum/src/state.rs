use accounts_adapters::auth_validation::LocalJwtValidator;
use accounts_core::AccountStore;

/// Shared router state: the account store handle and the session signer.
///
/// Stores are cheap to clone (they wrap a pool or an `Arc`), so the whole
/// state is cloned into every handler.
#[derive(Clone)]
pub struct AppState<S>
where
    S: AccountStore + Clone,
{
    pub account_store: S,
    pub sessions: LocalJwtValidator,
}

impl<S> AppState<S>
where
    S: AccountStore + Clone,
{
    pub fn new(account_store: S, sessions: LocalJwtValidator) -> Self {
        Self {
            account_store,
            sessions,
        }
    }
}
