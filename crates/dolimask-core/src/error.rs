use thiserror::Error;

/// Core error type shared across Dolimask crates.
///
/// Only configuration, connection, and tunnel failures are fatal to a
/// run; table- and row-level failures are isolated inside the engine and
/// never surface through this type.
#[derive(Debug, Error)]
pub enum Error {
    /// The resolved configuration is incomplete or invalid.
    #[error("configuration error: {0}")]
    Config(String),
    /// Could not establish or keep the database session.
    #[error("connection error: {0}")]
    Connection(String),
    /// The SSH tunnel could not be started or supervised.
    #[error("tunnel error: {0}")]
    Tunnel(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by Dolimask crates.
pub type Result<T> = std::result::Result<T, Error>;
