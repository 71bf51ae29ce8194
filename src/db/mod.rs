//! Database module providing connection management, schema setup, and queries.

pub mod schools;

use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::sync::OnceCell;
use tracing::info;

use crate::config::DatabaseSettings;
use crate::error::{AppError, AppResult};
use crate::migration::{Migrator, MigratorTrait};

/// Database connection pool wrapper around a SeaORM connection.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
    schema: Arc<OnceCell<()>>,
}

impl DbPool {
    /// Connect to PostgreSQL with the pool timeouts this service relies on:
    /// 2 s to acquire a connection, 30 s idle eviction.
    pub async fn connect(settings: &DatabaseSettings) -> AppResult<Self> {
        let mut options = ConnectOptions::new(settings.url());
        options
            .max_connections(10)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(2))
            .idle_timeout(Duration::from_secs(30))
            .sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to database: {}", e)))?;

        Ok(DbPool {
            conn,
            schema: Arc::new(OnceCell::new()),
        })
    }

    /// Get the underlying connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    #[cfg(test)]
    pub(crate) fn from_connection(conn: DatabaseConnection) -> Self {
        DbPool {
            conn,
            schema: Arc::new(OnceCell::new()),
        }
    }

    /// Run pending migrations, exactly once per process.
    ///
    /// Idempotent and single-flight: concurrent callers wait on the first
    /// invocation instead of racing the schema setup.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        self.schema
            .get_or_try_init(|| async {
                Migrator::up(&self.conn, None)
                    .await
                    .map_err(|e| AppError::Database(format!("Failed to run migrations: {}", e)))?;
                info!("Database schema is up to date");
                Ok::<(), AppError>(())
            })
            .await?;
        Ok(())
    }

    /// True once `ensure_schema` has completed successfully.
    pub fn is_initialized(&self) -> bool {
        self.schema.initialized()
    }

    /// Check database connectivity.
    pub async fn ping(&self) -> Result<(), sea_orm::DbErr> {
        self.conn.ping().await
    }
}
