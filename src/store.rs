use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;

use crate::config::DatabaseConfig;
use crate::students::{
    repo,
    repo_types::{StudentRecord, StudentRow},
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("student already exists: {0}")]
    Duplicate(String),
    #[error("student store unavailable: {0}")]
    Unavailable(String),
    #[error("student lookup timed out after {0:?}")]
    Timeout(Duration),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            // 23505 = unique_violation
            if db.code().as_deref() == Some("23505") {
                return StoreError::Duplicate(db.message().to_string());
            }
        }
        StoreError::Unavailable(e.to_string())
    }
}

/// Read/write primitives the access workflow depends on.
#[async_trait]
pub trait StudentStore: Send + Sync {
    async fn find_by_student_id(&self, student_id: &str)
        -> Result<Option<StudentRecord>, StoreError>;
    /// Insert every record or none; ids must be unique across the store.
    async fn insert(&self, records: &[StudentRecord]) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct PgStudentStore {
    db: PgPool,
}

impl PgStudentStore {
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(&config.url)
            .await
            .context("connect to database")?;
        Ok(Self::from_pool(db))
    }

    pub fn from_pool(db: PgPool) -> Self {
        Self { db }
    }

    /// Apply pending schema migrations; any failure is fatal to the caller.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.db)
            .await
            .context("run migrations")?;
        Ok(())
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn find_by_student_id(
        &self,
        student_id: &str,
    ) -> Result<Option<StudentRecord>, StoreError> {
        let row = StudentRow::find_by_student_id(&self.db, student_id).await?;
        Ok(row.map(StudentRecord::from))
    }

    async fn insert(&self, records: &[StudentRecord]) -> Result<(), StoreError> {
        repo::insert_many(&self.db, records).await?;
        Ok(())
    }
}
