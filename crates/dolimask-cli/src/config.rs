//! Configuration resolution.
//!
//! Three sources, in order of precedence: the config file, command line
//! flags, then interactive prompts for whatever is still missing.

use std::path::Path;

use serde::Deserialize;

use dolimask_core::{
    Config, Error, MysqlConfig, Result, SshConfig, DEFAULT_MYSQL_PORT, DEFAULT_SSH_PORT,
};

use crate::prompt;
use crate::Cli;

/// File-backed configuration. Every field is optional so a file can
/// complement flags instead of replacing them.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub mysql: FileMysql,
    #[serde(default)]
    pub ssh: Option<FileSsh>,
    #[serde(default)]
    pub tables: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileMysql {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSsh {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub key: Option<String>,
    pub password: Option<String>,
}

/// Parse a config file, picking the format from the extension.
pub fn load_file(path: &Path) -> Result<FileConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| Error::Config(format!("cannot read {}: {err}", path.display())))?;
    match path.extension().and_then(|ext| ext.to_str()).unwrap_or("") {
        "json" => serde_json::from_str(&raw)
            .map_err(|err| Error::Config(format!("invalid JSON in {}: {err}", path.display()))),
        "yaml" | "yml" => serde_yaml::from_str(&raw)
            .map_err(|err| Error::Config(format!("invalid YAML in {}: {err}", path.display()))),
        other => Err(Error::Config(format!(
            "unsupported config format '{other}', expected .json, .yaml or .yml"
        ))),
    }
}

/// Working copy of the configuration while the sources are merged.
#[derive(Debug, Default)]
pub struct Draft {
    mysql_host: Option<String>,
    mysql_port: Option<u16>,
    mysql_user: Option<String>,
    mysql_password: Option<String>,
    mysql_database: Option<String>,
    use_ssh: bool,
    ssh_host: Option<String>,
    ssh_port: Option<u16>,
    ssh_user: Option<String>,
    ssh_key: Option<String>,
    ssh_password: Option<String>,
    tables: Option<Vec<String>>,
}

impl Draft {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            mysql_host: cli.mysql_host.clone(),
            mysql_port: cli.mysql_port,
            mysql_user: cli.mysql_user.clone(),
            mysql_password: cli.mysql_password.clone(),
            mysql_database: cli.mysql_database.clone(),
            use_ssh: cli.use_ssh,
            ssh_host: cli.ssh_host.clone(),
            ssh_port: cli.ssh_port,
            ssh_user: cli.ssh_user.clone(),
            ssh_key: cli.ssh_key.clone(),
            ssh_password: cli.ssh_password.clone(),
            tables: (!cli.tables.is_empty()).then(|| cli.tables.clone()),
        }
    }

    /// Overlay file values on top of the flag values.
    pub fn apply_file(&mut self, file: FileConfig) {
        let FileConfig { mysql, ssh, tables } = file;
        overlay(&mut self.mysql_host, mysql.host);
        overlay(&mut self.mysql_port, mysql.port);
        overlay(&mut self.mysql_user, mysql.user);
        overlay(&mut self.mysql_password, mysql.password);
        overlay(&mut self.mysql_database, mysql.database);
        if let Some(ssh) = ssh {
            self.use_ssh = true;
            overlay(&mut self.ssh_host, ssh.host);
            overlay(&mut self.ssh_port, ssh.port);
            overlay(&mut self.ssh_user, ssh.user);
            overlay(&mut self.ssh_key, ssh.key);
            overlay(&mut self.ssh_password, ssh.password);
        }
        overlay(&mut self.tables, tables);
    }

    /// Prompt for everything still missing.
    pub fn fill_interactive(&mut self) -> Result<()> {
        if !self.use_ssh && self.ssh_host.is_none() {
            println!("How should the database be reached?");
            println!("  1) direct connection");
            println!("  2) through an SSH tunnel");
            let choice = prompt::ask_or_default("Connection method", "1")?;
            self.use_ssh = choice.trim() == "2";
        }

        if self.use_ssh {
            if self.ssh_host.is_none() {
                self.ssh_host = Some(prompt::ask("SSH host")?);
            }
            if self.ssh_port.is_none() {
                let port = prompt::ask_or_default("SSH port", &DEFAULT_SSH_PORT.to_string())?;
                self.ssh_port = Some(parse_port(&port)?);
            }
            if self.ssh_user.is_none() {
                self.ssh_user = Some(prompt::ask("SSH user")?);
            }
            if self.ssh_key.is_none() && self.ssh_password.is_none() {
                self.ssh_key = prompt::ask_optional("SSH private key path")?;
                if self.ssh_key.is_none() {
                    self.ssh_password = Some(prompt::ask_password("SSH password")?);
                }
            }
        }

        if self.mysql_host.is_none() {
            self.mysql_host = Some(prompt::ask("MySQL host")?);
        }
        if self.mysql_port.is_none() {
            let port = prompt::ask_or_default("MySQL port", &DEFAULT_MYSQL_PORT.to_string())?;
            self.mysql_port = Some(parse_port(&port)?);
        }
        if self.mysql_user.is_none() {
            self.mysql_user = Some(prompt::ask("MySQL user")?);
        }
        if self.mysql_password.is_none() {
            self.mysql_password = Some(prompt::ask_password("MySQL password")?);
        }
        if self.mysql_database.is_none() {
            self.mysql_database = Some(prompt::ask("Database name")?);
        }
        Ok(())
    }

    pub fn into_config(self) -> Result<Config> {
        let mysql = MysqlConfig {
            host: required(self.mysql_host, "mysql host")?,
            port: self.mysql_port.unwrap_or(DEFAULT_MYSQL_PORT),
            user: required(self.mysql_user, "mysql user")?,
            password: self.mysql_password.unwrap_or_default(),
            database: required(self.mysql_database, "mysql database")?,
        };
        let ssh = if self.use_ssh {
            Some(SshConfig {
                host: required(self.ssh_host, "ssh host")?,
                port: self.ssh_port.unwrap_or(DEFAULT_SSH_PORT),
                user: required(self.ssh_user, "ssh user")?,
                key: self.ssh_key,
                password: self.ssh_password,
            })
        } else {
            None
        };
        Ok(Config {
            mysql,
            ssh,
            tables: self.tables,
        })
    }
}

fn overlay<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

fn required(value: Option<String>, name: &str) -> Result<String> {
    value.filter(|v| !v.is_empty()).ok_or_else(|| {
        Error::Config(format!(
            "{name} is missing; pass it as a flag or in the config file"
        ))
    })
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse()
        .map_err(|_| Error::Config(format!("'{raw}' is not a valid port")))
}

/// Merge all sources into a complete configuration.
pub fn resolve(cli: &Cli, interactive: bool) -> Result<Config> {
    let mut draft = Draft::from_cli(cli);
    if let Some(path) = &cli.config {
        draft.apply_file(load_file(path)?);
    }
    if interactive {
        draft.fill_interactive()?;
    }
    draft.into_config()
}
