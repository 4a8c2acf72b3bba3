//! SQLite pool setup and students table DDL.

use crate::error::AppError;
use crate::sql::CREATE_STUDENTS_TABLE;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;

/// Open a pool on the database file at `path`, creating the file (and its parent directory) if missing.
pub async fn connect(path: &Path, max_connections: u32) -> Result<SqlitePool, AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::Store(sqlx::Error::Io(e).into()))?;
    }
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    tracing::info!(path = %path.display(), "opened sqlite database");
    Ok(pool)
}

/// Private in-memory database. Each connection would see its own database, so the pool holds exactly one and never recycles it.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create the students table if it does not exist.
pub async fn ensure_students_table(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(CREATE_STUDENTS_TABLE).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_students_table_is_idempotent() {
        let pool = connect_in_memory().await.unwrap();
        ensure_students_table(&pool).await.unwrap();
        ensure_students_table(&pool).await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM students")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
