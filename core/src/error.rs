//! Error taxonomy for the persistence core.
//!
//! Every statement sent to the Data Source fails with a [`StatementError`];
//! the phase that issued it wraps that cause in its own type so callers can
//! tell schema, seed and runtime access failures apart.

use std::time::Duration;

use sea_orm::DbErr;
use thiserror::Error;

/// Why a single statement against the Data Source did not complete.
#[derive(Debug, Error)]
pub enum StatementError {
    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("statement timed out after {0:?}")]
    TimedOut(Duration),
}

/// The `employees` table could not be created.
#[derive(Debug, Error)]
#[error("failed to ensure `employees` table: {source}")]
pub struct SchemaError {
    #[source]
    pub source: StatementError,
}

/// The seed phase stopped before completing.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to count existing employees: {0}")]
    Count(#[source] StatementError),

    /// Rows inserted before `index` are left in place unless the seeder runs
    /// in transactional mode.
    #[error("failed to insert seed entry #{index} ({name}) after {inserted} row(s): {source}")]
    Insert {
        index: usize,
        name: String,
        inserted: usize,
        #[source]
        source: StatementError,
    },

    #[error("seed transaction failed: {0}")]
    Transaction(#[source] StatementError),
}

/// A runtime read or write against `employees` failed.
#[derive(Debug, Error)]
#[error("employee access failed: {0}")]
pub struct AccessError(#[from] pub StatementError);

/// Request input rejected before it reaches the repository.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("`{field}` is required")]
    Missing { field: &'static str },

    #[error("`{field}` must be at most {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}
