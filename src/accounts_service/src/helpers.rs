use accounts_adapters::{config::PostgresSettings, persistence::MIGRATOR};
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

pub async fn get_postgres_pool(settings: &PostgresSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(settings.url.expose_secret())
        .await
}

/// Connect and bring the schema up to date.
pub async fn configure_postgresql(settings: &PostgresSettings) -> Result<PgPool, sqlx::Error> {
    let pool = get_postgres_pool(settings).await?;

    MIGRATOR.run(&pool).await?;
    tracing::info!("database migrations applied");

    Ok(pool)
}
