//! Data Source handle shared by every component of the core.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::error::StatementError;

/// Options used to open the connection pool.
#[derive(Debug, Clone)]
pub struct DataSourceOptions {
    pub database_url: String,
    pub max_connections: u32,
    pub statement_timeout: Duration,
}

impl DataSourceOptions {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 10,
            statement_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_statement_timeout(mut self, statement_timeout: Duration) -> Self {
        self.statement_timeout = statement_timeout;
        self
    }
}

/// Owned handle to the pooled database connection plus the per-statement
/// timeout applied to every round trip.
///
/// Cloning is cheap; clones share the same pool.
#[derive(Clone)]
pub struct DataSource {
    conn: Arc<DatabaseConnection>,
    statement_timeout: Duration,
}

impl DataSource {
    /// Opens the pool lazily: an unreachable database is only reported when
    /// the first statement runs.
    pub async fn connect(options: &DataSourceOptions) -> Result<Self, DbErr> {
        tracing::info!(
            max_connections = options.max_connections,
            "connecting to database"
        );

        let mut connect = ConnectOptions::new(options.database_url.clone());
        connect
            .max_connections(options.max_connections)
            .connect_lazy(true)
            .sqlx_logging(false);

        let conn = Database::connect(connect).await?;

        Ok(Self::from_connection(conn, options.statement_timeout))
    }

    pub fn from_connection(conn: DatabaseConnection, statement_timeout: Duration) -> Self {
        Self {
            conn: Arc::new(conn),
            statement_timeout,
        }
    }

    /// Same pool, different per-statement timeout.
    pub fn with_statement_timeout(mut self, statement_timeout: Duration) -> Self {
        self.statement_timeout = statement_timeout;
        self
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    pub fn statement_timeout(&self) -> Duration {
        self.statement_timeout
    }

    /// Runs one statement, failing with [`StatementError::TimedOut`] when it
    /// does not finish within the configured timeout.
    pub(crate) async fn bounded<T, F>(&self, statement: F) -> Result<T, StatementError>
    where
        F: Future<Output = Result<T, DbErr>>,
    {
        bounded(self.statement_timeout, statement).await
    }
}

pub(crate) async fn bounded<T, F>(limit: Duration, statement: F) -> Result<T, StatementError>
where
    F: Future<Output = Result<T, DbErr>>,
{
    match tokio::time::timeout(limit, statement).await {
        Ok(result) => result.map_err(StatementError::from),
        Err(_) => Err(StatementError::TimedOut(limit)),
    }
}
