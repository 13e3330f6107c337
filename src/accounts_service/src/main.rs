use accounts_adapters::{
    auth_validation::LocalJwtValidator,
    config::AccountServiceSettings,
    persistence::{HashMapAccountStore, PostgresAccountStore},
};
use accounts_service::{AccountService, helpers::configure_postgresql, tracing::init_tracing};
use color_eyre::eyre::Result;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = AccountServiceSettings::load()?;
    let sessions = LocalJwtValidator::new((&settings.session).into());
    let allowed_origins = settings.application.allowed_origins();

    let listener = TcpListener::bind(settings.application.address()).await?;

    match &settings.postgres {
        Some(postgres) => {
            let pool = configure_postgresql(postgres).await?;
            let account_store = PostgresAccountStore::new(pool.clone());

            AccountService::new(account_store, sessions, &settings.application)
                .run_standalone(listener, Some(allowed_origins))
                .await?;

            pool.close().await;
        }
        None => {
            tracing::warn!("no database configured, accounts are kept in memory");

            AccountService::new(
                HashMapAccountStore::default(),
                sessions,
                &settings.application,
            )
            .run_standalone(listener, Some(allowed_origins))
            .await?;
        }
    }

    Ok(())
}
