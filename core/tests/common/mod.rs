//! Shared fixtures for the core integration tests.

#![allow(dead_code)]

use std::sync::Once;
use std::time::Duration;

use roster_core::{DataSource, SchemaInitializer};
use sea_orm::{ConnectOptions, Database, DatabaseBackend, DbErr, MockDatabase};

static INIT: Once = Once::new();

/// Install a test tracing subscriber once per test binary.
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Fresh in-memory SQLite database, no table yet.
///
/// A single pooled connection keeps every statement on the same in-memory
/// database.
pub async fn empty_source() -> DataSource {
    init_test_env();

    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let conn = Database::connect(options)
        .await
        .expect("in-memory sqlite should open");

    DataSource::from_connection(conn, Duration::from_secs(5))
}

/// In-memory database with the `employees` table already created.
pub async fn source_with_schema() -> DataSource {
    let source = empty_source().await;

    SchemaInitializer::new(source.clone())
        .ensure_schema()
        .await
        .expect("schema should be created");

    source
}

/// Data Source whose every statement fails, as if the server were gone.
pub fn unreachable_source() -> DataSource {
    init_test_env();

    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_errors([DbErr::Custom("connection refused".to_owned())])
        .append_query_errors([DbErr::Custom("connection refused".to_owned())])
        .into_connection();

    DataSource::from_connection(conn, Duration::from_secs(1))
}
