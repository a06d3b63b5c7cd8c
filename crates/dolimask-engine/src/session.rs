use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by the database session for a single statement.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct SessionError(pub String);

impl SessionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A positional statement parameter.
///
/// Substitute values are always bound as text; the integer variant carries
/// the primary key of the row being updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Int(i64),
}

/// The database operations the anonymization engine needs.
///
/// One session maps to one open connection with autocommit off. Rollback on
/// abandon happens when the connection is dropped uncommitted; there is no
/// explicit close.
#[async_trait]
pub trait Session: Send {
    /// Runs a `SELECT COUNT(*)` style query and returns the scalar.
    async fn fetch_count(&mut self, sql: &str) -> Result<u64, SessionError>;

    /// Runs a single-column query returning primary key values.
    async fn fetch_ids(&mut self, sql: &str) -> Result<Vec<i64>, SessionError>;

    /// Runs one parameterized statement and returns the affected row count.
    async fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<u64, SessionError>;

    /// Commits everything executed since the previous commit.
    async fn commit(&mut self) -> Result<(), SessionError>;
}
