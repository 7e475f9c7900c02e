//! Repository implementations for database persistence.
//!
//! This module provides the PostgreSQL-backed scenario repository and the
//! connection wrapper that creates it.

mod scenario_repository;

pub use scenario_repository::{ScenarioRecord, ScenarioRepository};

use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

/// Database connection wrapper for repositories.
#[derive(Clone)]
pub struct Database {
    pool: Arc<PgPool>,
}

/// Result of a connectivity probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseStatus {
    /// Whether the `scenarios` table exists.
    pub scenarios_table: bool,
    /// Number of stored scenarios, when the table exists.
    pub scenario_count: Option<i64>,
}

impl Database {
    /// Creates a new Database wrapper from a connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Creates a new database connection from a connection string.
    ///
    /// # Arguments
    /// * `database_url` - PostgreSQL connection string
    ///
    /// # Errors
    /// Returns an error if the connection fails.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self::new(pool))
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates a ScenarioRepository instance.
    #[must_use]
    pub fn scenarios(&self) -> ScenarioRepository {
        ScenarioRepository::new(self.pool.clone())
    }

    /// Runs database migrations. Safe to run repeatedly.
    ///
    /// # Errors
    /// Returns an error if migrations fail.
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(include_str!("../../migrations/001_initial_schema.sql"))
            .execute(self.pool.as_ref())
            .await?;
        info!("database schema is up to date");
        Ok(())
    }

    /// Checks connectivity and reports whether the schema is in place.
    ///
    /// # Errors
    /// Returns an error if any probe query fails.
    pub async fn check(&self) -> Result<DatabaseStatus, sqlx::Error> {
        let _: i32 = sqlx::query_scalar("SELECT 1 + 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        let scenarios_table: bool =
            sqlx::query_scalar("SELECT to_regclass('public.scenarios') IS NOT NULL")
                .fetch_one(self.pool.as_ref())
                .await?;

        let scenario_count = if scenarios_table {
            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM scenarios")
                .fetch_one(self.pool.as_ref())
                .await?;
            Some(count)
        } else {
            None
        };

        Ok(DatabaseStatus {
            scenarios_table,
            scenario_count,
        })
    }
}
