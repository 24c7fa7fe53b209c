//! Error types for the persistence core.
//!
//! This module provides the data layer's error hierarchy. The `DataError` enum
//! is the single type returned across every repository boundary: store and
//! driver faults are classified into distinguishable kinds (constraint
//! violations, connectivity loss, absence) instead of being collapsed into a
//! generic failure message, so callers and logs retain cause information.

pub mod config;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level data layer error type.
///
/// Every repository operation returns this type on failure; no `DbErr` or
/// panic crosses a repository boundary. Single-row reads surface absence as
/// `Ok(None)` rather than an error, while update and delete against zero
/// matching rows report `NotFound` and `false` respectively.
#[derive(Error, Debug)]
pub enum DataError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No row matched the requested identity and scope.
    ///
    /// Returned by update when the `WHERE` clause affected zero rows. A row
    /// that exists under a different trip scope is reported the same way, so
    /// existence never leaks across scopes.
    #[error("record not found")]
    NotFound,

    /// A unique constraint rejected the statement.
    #[error("unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint rejected the statement, e.g. a flight or
    /// activity referencing a trip that does not exist.
    #[error("foreign key constraint violation: {0}")]
    ForeignKeyViolation(String),

    /// The connection to the store was lost or could not be acquired.
    #[error("database connection failed: {0}")]
    Connection(#[source] DbErr),

    /// Any other fault raised by the store or driver.
    #[error(transparent)]
    Database(DbErr),
}

/// Classifies a SeaORM error into a `DataError` kind.
///
/// Constraint violations are recognized through the driver-reported SQL error
/// before falling back on the coarser `DbErr` variants. The original error is
/// logged here so every persistence fault reaches the diagnostic stream
/// exactly once, at the boundary where it is converted.
impl From<DbErr> for DataError {
    fn from(err: DbErr) -> Self {
        tracing::error!("database operation failed: {}", err);

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::UniqueViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::ForeignKeyViolation(msg),
            _ => match err {
                DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::Connection(err),
                DbErr::RecordNotFound(_) => Self::NotFound,
                err => Self::Database(err),
            },
        }
    }
}
