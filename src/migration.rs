//! Versioned schema migrations from `migrations/`, embedded at build time.

use crate::error::StartupError;
use sqlx::migrate::Migrator;
use sqlx::PgPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply pending migrations. Already-applied versions are skipped.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), StartupError> {
    MIGRATOR.run(pool).await?;
    tracing::info!(migrations = MIGRATOR.iter().count(), "database migrations applied");
    Ok(())
}
