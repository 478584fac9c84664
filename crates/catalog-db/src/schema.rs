//! Schema sync
//!
//! Reconciles the tables the repositories expect with the database at
//! startup: missing tables and indexes are created, existing ones are left
//! untouched. There are no versioned migrations.

use sqlx::SqlitePool;
use tracing::{info, instrument};

const SCHEMA: &str = include_str!("schema.sql");

/// Create any missing tables and indexes
#[instrument(skip(pool))]
pub async fn sync_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    info!("Database schema synchronized");
    Ok(())
}
