use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default MySQL port when none is given.
pub const DEFAULT_MYSQL_PORT: u16 = 3306;
/// Default SSH port when none is given.
pub const DEFAULT_SSH_PORT: u16 = 22;

/// MySQL connection parameters, fully resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MysqlConfig {
    pub host: String,
    #[serde(default = "default_mysql_port")]
    pub port: u16,
    pub user: String,
    #[serde(default)]
    pub password: String,
    pub database: String,
}

fn default_mysql_port() -> u16 {
    DEFAULT_MYSQL_PORT
}

fn default_ssh_port() -> u16 {
    DEFAULT_SSH_PORT
}

/// SSH authentication method: a private key path or a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SshAuth {
    Key(String),
    Password(String),
}

/// SSH tunnel parameters, present only when the SSH mode is requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SshConfig {
    pub host: String,
    #[serde(default = "default_ssh_port")]
    pub port: u16,
    pub user: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl SshConfig {
    /// Resolve the authentication method, preferring a key over a password.
    pub fn auth(&self) -> Result<SshAuth> {
        if let Some(key) = self.key.as_ref().filter(|k| !k.is_empty()) {
            return Ok(SshAuth::Key(key.clone()));
        }
        if let Some(password) = self.password.as_ref().filter(|p| !p.is_empty()) {
            return Ok(SshAuth::Password(password.clone()));
        }
        Err(Error::Config(
            "ssh configuration needs either a key or a password".to_string(),
        ))
    }
}

/// Fully resolved run configuration, produced by the CLI shell from
/// flags, a config file, or interactive prompts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub mysql: MysqlConfig,
    #[serde(default)]
    pub ssh: Option<SshConfig>,
    /// Optional subset of catalog tables to anonymize; all when absent.
    #[serde(default)]
    pub tables: Option<Vec<String>>,
}

impl Config {
    /// Check that every field required to open a session is present.
    pub fn validate(&self) -> Result<()> {
        if self.mysql.host.is_empty() {
            return Err(Error::Config("mysql host is required".to_string()));
        }
        if self.mysql.user.is_empty() {
            return Err(Error::Config("mysql user is required".to_string()));
        }
        if self.mysql.database.is_empty() {
            return Err(Error::Config("mysql database is required".to_string()));
        }
        if let Some(ssh) = &self.ssh {
            if ssh.host.is_empty() || ssh.user.is_empty() {
                return Err(Error::Config(
                    "ssh host and user are required when the tunnel is enabled".to_string(),
                ));
            }
            ssh.auth()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mysql() -> MysqlConfig {
        MysqlConfig {
            host: "db.example.com".to_string(),
            port: DEFAULT_MYSQL_PORT,
            user: "dolibarr".to_string(),
            password: "secret".to_string(),
            database: "dolibarr".to_string(),
        }
    }

    #[test]
    fn validates_complete_config() {
        let config = Config {
            mysql: mysql(),
            ssh: None,
            tables: None,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_missing_database() {
        let mut config = Config {
            mysql: mysql(),
            ssh: None,
            tables: None,
        };
        config.mysql.database.clear();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn ssh_auth_prefers_key() {
        let ssh = SshConfig {
            host: "bastion".to_string(),
            port: DEFAULT_SSH_PORT,
            user: "ops".to_string(),
            key: Some("~/.ssh/id_rsa".to_string()),
            password: Some("hunter2".to_string()),
        };
        assert_eq!(ssh.auth().unwrap(), SshAuth::Key("~/.ssh/id_rsa".to_string()));
    }

    #[test]
    fn ssh_without_credentials_is_rejected() {
        let ssh = SshConfig {
            host: "bastion".to_string(),
            port: DEFAULT_SSH_PORT,
            user: "ops".to_string(),
            key: None,
            password: None,
        };
        assert!(ssh.auth().is_err());
    }

    #[test]
    fn deserializes_with_defaulted_ports() {
        let raw = r#"{"mysql": {"host": "h", "user": "u", "database": "d"}}"#;
        let config: Config = serde_json::from_str(raw).unwrap();
        assert_eq!(config.mysql.port, DEFAULT_MYSQL_PORT);
        assert!(config.ssh.is_none());
        assert!(config.tables.is_none());
    }
}
