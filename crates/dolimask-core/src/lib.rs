//! Core contracts shared across Dolimask crates.
//!
//! This crate defines the resolved configuration types, the shared error
//! type, and secret-redaction helpers used by the connection provider and
//! the CLI.

pub mod config;
pub mod error;
pub mod redaction;

pub use config::{
    Config, MysqlConfig, SshAuth, SshConfig, DEFAULT_MYSQL_PORT, DEFAULT_SSH_PORT,
};
pub use error::{Error, Result};
pub use redaction::{mask_argument, redact_mysql_target};
