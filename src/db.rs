//! Storage handle: pool construction and connectivity check.

use crate::config::Settings;
use crate::error::StartupError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Open the pool and verify the database answers before returning it.
pub async fn connect(settings: &Settings) -> Result<PgPool, StartupError> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(&settings.database_url)
        .await
        .map_err(StartupError::Connect)?;
    ping(&pool).await.map_err(StartupError::Ping)?;
    tracing::info!("database is reachable");
    Ok(pool)
}

pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
