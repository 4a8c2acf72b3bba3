//! Storage adapter: student CRUD against SQLite.

use crate::error::StoreError;
use crate::model::{Confirmation, Student, UpdateStudent, DELETED_MESSAGE, UPDATED_MESSAGE};
use crate::sql::{self, bind_all, QueryBuf};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};

/// Operations handlers need from storage. One instance is shared by every request.
#[async_trait]
pub trait StudentStorage: Send + Sync {
    /// Insert a row and return the generated id.
    async fn create(&self, name: &str, email: &str, age: i64) -> Result<i64, StoreError>;

    /// Fetch one row; `StoreError::NotFound` when no row matches.
    async fn get_by_id(&self, id: i64) -> Result<Student, StoreError>;

    /// All rows in database order. Empty table yields an empty vec.
    async fn list(&self) -> Result<Vec<Student>, StoreError>;

    /// Apply the present fields. Does not check that the id exists: a missing
    /// row yields `rows_affected == 0`, not an error.
    async fn update(&self, req: &UpdateStudent) -> Result<Confirmation, StoreError>;

    /// Delete by id in one statement. Missing row yields `rows_affected == 0`.
    async fn delete_by_id(&self, id: i64) -> Result<Confirmation, StoreError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteStorage { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn execute(&self, q: &QueryBuf) -> Result<sqlx::sqlite::SqliteQueryResult, StoreError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let result = bind_all(sqlx::query(&q.sql), &q.params)
            .execute(&self.pool)
            .await?;
        Ok(result)
    }

    async fn fetch_students(&self, q: &QueryBuf) -> Result<Vec<Student>, StoreError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_all(sqlx::query(&q.sql), &q.params)
            .try_map(|row: SqliteRow| Student::from_row(&row))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl StudentStorage for SqliteStorage {
    async fn create(&self, name: &str, email: &str, age: i64) -> Result<i64, StoreError> {
        let q = sql::insert(name, email, age);
        let result = self.execute(&q).await?;
        Ok(result.last_insert_rowid())
    }

    async fn get_by_id(&self, id: i64) -> Result<Student, StoreError> {
        let q = sql::select_by_id(id);
        self.fetch_students(&q)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Student>, StoreError> {
        self.fetch_students(&sql::select_list()).await
    }

    async fn update(&self, req: &UpdateStudent) -> Result<Confirmation, StoreError> {
        let q = sql::update(req).ok_or(StoreError::NoFieldsToUpdate)?;
        let result = self.execute(&q).await?;
        Ok(Confirmation {
            message: UPDATED_MESSAGE,
            rows_affected: result.rows_affected(),
        })
    }

    async fn delete_by_id(&self, id: i64) -> Result<Confirmation, StoreError> {
        let q = sql::delete(id);
        let result = self.execute(&q).await?;
        Ok(Confirmation {
            message: DELETED_MESSAGE,
            rows_affected: result.rows_affected(),
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{connect_in_memory, ensure_students_table};

    async fn storage() -> SqliteStorage {
        let pool = connect_in_memory().await.unwrap();
        ensure_students_table(&pool).await.unwrap();
        SqliteStorage::new(pool)
    }

    fn change(id: i64) -> UpdateStudent {
        UpdateStudent {
            id,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_then_fetch_round_trips_fields() {
        let s = storage().await;
        let id = s.create("Ada", "ada@x.com", 30).await.unwrap();
        assert!(id > 0);
        let other = s.create("Grace", "grace@x.com", 45).await.unwrap();
        assert_ne!(id, other);

        let student = s.get_by_id(id).await.unwrap();
        assert_eq!(
            student,
            Student {
                id,
                name: "Ada".into(),
                email: "ada@x.com".into(),
                age: 30,
            }
        );
        assert_eq!(s.get_by_id(other).await.unwrap().name, "Grace");
    }

    #[tokio::test]
    async fn fetch_missing_id_is_not_found() {
        let s = storage().await;
        assert!(matches!(s.get_by_id(42).await, Err(StoreError::NotFound(42))));
    }

    #[tokio::test]
    async fn list_on_empty_table_is_empty() {
        let s = storage().await;
        assert!(s.list().await.unwrap().is_empty());
        s.create("Ada", "ada@x.com", 30).await.unwrap();
        s.create("Grace", "grace@x.com", 45).await.unwrap();
        assert_eq!(s.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_changes_only_present_fields() {
        let s = storage().await;
        let id = s.create("Ada", "ada@x.com", 30).await.unwrap();
        let confirmation = s
            .update(&UpdateStudent {
                age: Some(31),
                ..change(id)
            })
            .await
            .unwrap();
        assert_eq!(confirmation.message, UPDATED_MESSAGE);
        assert_eq!(confirmation.rows_affected, 1);

        let student = s.get_by_id(id).await.unwrap();
        assert_eq!(student.age, 31);
        assert_eq!(student.name, "Ada");
        assert_eq!(student.email, "ada@x.com");
    }

    #[tokio::test]
    async fn update_without_fields_fails_and_mutates_nothing() {
        let s = storage().await;
        let id = s.create("Ada", "ada@x.com", 30).await.unwrap();
        assert!(matches!(s.update(&change(id)).await, Err(StoreError::NoFieldsToUpdate)));
        assert_eq!(s.get_by_id(id).await.unwrap().age, 30);
    }

    #[tokio::test]
    async fn update_of_missing_id_is_silent() {
        let s = storage().await;
        let confirmation = s
            .update(&UpdateStudent {
                name: Some("Nobody".into()),
                ..change(99)
            })
            .await
            .unwrap();
        assert_eq!(confirmation.rows_affected, 0);
    }

    #[tokio::test]
    async fn delete_removes_row_and_tolerates_missing_id() {
        let s = storage().await;
        let id = s.create("Ada", "ada@x.com", 30).await.unwrap();
        assert_eq!(s.delete_by_id(id).await.unwrap().rows_affected, 1);
        assert!(matches!(s.get_by_id(id).await, Err(StoreError::NotFound(_))));

        let again = s.delete_by_id(id).await.unwrap();
        assert_eq!(again.message, DELETED_MESSAGE);
        assert_eq!(again.rows_affected, 0);
    }

    #[tokio::test]
    async fn full_lifecycle() {
        let s = storage().await;
        let id = s.create("Ada", "ada@x.com", 30).await.unwrap();
        assert_eq!(id, 1);
        s.update(&UpdateStudent {
            email: Some("ada@new.com".into()),
            ..change(id)
        })
        .await
        .unwrap();
        let student = s.get_by_id(id).await.unwrap();
        assert_eq!(student.email, "ada@new.com");
        assert_eq!(student.age, 30);
        s.delete_by_id(id).await.unwrap();
        assert!(matches!(s.get_by_id(id).await, Err(StoreError::NotFound(1))));
    }

    #[tokio::test]
    async fn ping_succeeds_on_open_pool() {
        let s = storage().await;
        s.ping().await.unwrap();
        s.pool().close().await;
        assert!(s.ping().await.is_err());
    }
}
