mod config;
mod hooks;
mod prompt;
mod update;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use dolimask_catalog::{Catalog, Plan};
use dolimask_connect::{MysqlSession, SshTunnel};
use dolimask_core::{redact_mysql_target, Error, MysqlConfig};
use dolimask_engine::{AnonymizeEngine, EngineOptions, RunReport, TableOutcome};

use crate::hooks::CliHooks;

const LOGO: &str = r"
     _       _ _                     _
  __| | ___ | (_)_ __ ___   __ _ ___| | __
 / _` |/ _ \| | | '_ ` _ \ / _` / __| |/ /
| (_| | (_) | | | | | | | | (_| \__ \   <
 \__,_|\___/|_|_|_| |_| |_|\__,_|___/_|\_\
";

#[derive(Parser, Debug)]
#[command(
    name = "dolimask",
    version,
    about = "Anonymize sensitive data in a Dolibarr MySQL database"
)]
pub struct Cli {
    /// Path to a JSON or YAML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Never prompt; requires a complete configuration and confirms every table.
    #[arg(long, default_value_t = false)]
    pub non_interactive: bool,
    /// MySQL server host.
    #[arg(long, value_name = "HOST")]
    pub mysql_host: Option<String>,
    /// MySQL server port.
    #[arg(long, value_name = "PORT")]
    pub mysql_port: Option<u16>,
    /// MySQL user.
    #[arg(long, value_name = "USER")]
    pub mysql_user: Option<String>,
    /// MySQL password; prompted for when omitted.
    #[arg(long, value_name = "PASSWORD")]
    pub mysql_password: Option<String>,
    /// Database to anonymize.
    #[arg(long, value_name = "NAME")]
    pub mysql_database: Option<String>,
    /// Reach the database through an SSH tunnel.
    #[arg(long, default_value_t = false)]
    pub use_ssh: bool,
    /// SSH bastion host.
    #[arg(long, value_name = "HOST")]
    pub ssh_host: Option<String>,
    /// SSH port.
    #[arg(long, value_name = "PORT")]
    pub ssh_port: Option<u16>,
    /// SSH user.
    #[arg(long, value_name = "USER")]
    pub ssh_user: Option<String>,
    /// Path to an SSH private key.
    #[arg(long, value_name = "PATH")]
    pub ssh_key: Option<String>,
    /// SSH password, used when no key is given.
    #[arg(long, value_name = "PASSWORD")]
    pub ssh_password: Option<String>,
    /// Restrict the run to these tables (repeatable or comma-separated).
    #[arg(long, value_name = "TABLE", value_delimiter = ',')]
    pub tables: Vec<String>,
    /// Fixed seed for reproducible substitute values.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
    /// Skip the crates.io release check.
    #[arg(long, default_value_t = false)]
    pub no_update_check: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            error!(%err, "run aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Banner and release-notice chatter belong to attended runs only.
fn wants_banner(cli: &Cli) -> bool {
    !cli.non_interactive
}

fn wants_update_check(cli: &Cli) -> bool {
    !cli.non_interactive && !cli.no_update_check
}

async fn run(cli: Cli) -> Result<ExitCode, Error> {
    if wants_banner(&cli) {
        println!("{LOGO}");
    }

    if wants_update_check(&cli) {
        if let Some(latest) = update::newer_release(env!("CARGO_PKG_VERSION")).await {
            println!(
                "A newer dolimask release is available: {latest} (this is {}).",
                env!("CARGO_PKG_VERSION")
            );
        }
    }

    let interactive = !cli.non_interactive;
    let config = config::resolve(&cli, interactive)?;
    config.validate()?;

    println!("Target database: {}", redact_mysql_target(&config.mysql));
    println!("Anonymization rewrites data in place and cannot be undone.");
    if interactive && !prompt::confirm("Start anonymizing this database?", false)? {
        println!("Aborted, nothing was changed.");
        return Ok(ExitCode::SUCCESS);
    }

    let catalog = Catalog::builtin();
    let plan = catalog.plan(config.tables.as_deref());
    if plan.is_empty() {
        println!("No known table selected, nothing to do.");
        return Ok(ExitCode::SUCCESS);
    }

    let mut mysql = config.mysql.clone();
    let tunnel = match &config.ssh {
        Some(ssh) => {
            let tunnel = SshTunnel::open(ssh, &config.mysql).await?;
            mysql.host = "127.0.0.1".to_string();
            mysql.port = tunnel.local_port();
            Some(tunnel)
        }
        None => None,
    };

    // The tunnel must come down whether the run finished or failed.
    let outcome = run_plan(&mysql, &plan, &cli).await;
    if let Some(tunnel) = tunnel {
        tunnel.close().await;
    }

    match outcome? {
        Some(report) => {
            print_summary(&report);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("Interrupted; uncommitted changes were rolled back.");
            Ok(ExitCode::from(130))
        }
    }
}

/// Runs the engine over a fresh session. Returns `None` when interrupted;
/// dropping the session then rolls back anything uncommitted.
async fn run_plan(
    mysql: &MysqlConfig,
    plan: &Plan,
    cli: &Cli,
) -> Result<Option<RunReport>, Error> {
    let mut session = MysqlSession::connect(mysql).await?;
    let engine = AnonymizeEngine::new(EngineOptions {
        seed: cli.seed,
        ..EngineOptions::default()
    });
    let mut hooks = CliHooks::new(cli.non_interactive);

    tokio::select! {
        report = engine.run(&mut session, plan, &mut hooks) => Ok(Some(report)),
        _ = tokio::signal::ctrl_c() => Ok(None),
    }
}

fn print_summary(report: &RunReport) {
    println!("\nSummary:");
    for table in &report.tables {
        let status = match &table.outcome {
            TableOutcome::Completed { updated, failed } => {
                format!("{updated} updated, {failed} failed")
            }
            TableOutcome::Empty => "empty".to_string(),
            TableOutcome::Declined => "declined".to_string(),
            TableOutcome::CountFailed | TableOutcome::SnapshotFailed => {
                "skipped (query failed)".to_string()
            }
            TableOutcome::CommitFailed { .. } => "rolled back (commit failed)".to_string(),
        };
        println!("  {:<26} {status}", table.table);
    }
    println!(
        "{} tables committed, {} rows updated, {} rows failed.",
        report.completed_tables(),
        report.total_updated(),
        report.total_failed_rows()
    );
}
