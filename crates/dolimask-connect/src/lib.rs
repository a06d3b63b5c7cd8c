//! Database and SSH connectivity.
//!
//! [`MysqlSession`] implements the engine's session contract over a real
//! MySQL connection. [`SshTunnel`] supervises an `ssh -N -L` child process
//! when the database is only reachable through a bastion host.

pub mod mysql;
pub mod tunnel;

pub use mysql::MysqlSession;
pub use tunnel::SshTunnel;
