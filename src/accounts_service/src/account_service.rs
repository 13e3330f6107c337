use accounts_adapters::{
    auth_validation::LocalJwtValidator,
    config::{API_PREFIX, AllowedOrigins, ApplicationSettings},
    credentials::warm_up_dummy_hash,
};
use accounts_axum::{AppState, routes::not_found};
use accounts_core::AccountStore;
use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The accounts backend: API routes under `/api/users`, plus either the
/// client's built assets or a plain liveness message at `/`.
pub struct AccountService {
    router: Router,
}

impl AccountService {
    /// Create a new AccountService around an account store
    ///
    /// # Arguments
    /// * `account_store` - Store for accounts (must be Clone)
    /// * `sessions` - Issues and checks session cookies
    /// * `settings` - Application settings; `assets_dir` switches on static
    ///   file hosting with an `index.html` fallback
    pub fn new<S>(
        account_store: S,
        sessions: LocalJwtValidator,
        settings: &ApplicationSettings,
    ) -> Self
    where
        S: AccountStore + Clone + 'static,
    {
        // The first unknown-email login must not pay for building the dummy hash.
        if !warm_up_dummy_hash() {
            tracing::warn!("dummy password hash unavailable, unknown-email logins are faster");
        }

        let api = accounts_axum::router(AppState::new(account_store, sessions));
        let router = Router::new().nest(API_PREFIX, api);

        let router = match &settings.assets_dir {
            Some(assets_dir) => {
                let assets_service = ServeDir::new(assets_dir)
                    .fallback(ServeFile::new(format!("{assets_dir}/index.html")));
                router.fallback_service(assets_service)
            }
            None => router
                .route("/", get(|| async { "API is running...." }))
                .fallback(not_found),
        };

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AccountService into a router that can be mounted on
    /// another router
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Serve until the process receives Ctrl-C.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Account service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
