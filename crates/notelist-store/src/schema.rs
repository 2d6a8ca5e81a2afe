//! Schema definitions and migration utilities.
//!
//! The schema is embedded at compile time and applied at connect
//! time. Both migrations are idempotent, so running them repeatedly
//! is safe.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded migration SQL for the base notes table (001_notes.sql).
pub const NOTES_MIGRATION: &str = include_str!("../../../migrations/001_notes.sql");

/// Embedded migration SQL adding the completion flag (002_complete.sql).
pub const COMPLETE_MIGRATION: &str = include_str!("../../../migrations/002_complete.sql");

/// Run all migrations against the database.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    tracing::debug!("Running notes migration (001_notes.sql)...");
    sqlx::raw_sql(NOTES_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::Migration(format!("Notes migration failed: {}", e)))?;

    tracing::debug!("Running complete-flag migration (002_complete.sql)...");
    sqlx::raw_sql(COMPLETE_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::Migration(format!("Complete-flag migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if the `notes` table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = 'notes'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}
