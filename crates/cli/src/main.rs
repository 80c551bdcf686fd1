//! # goalgate
//!
//! Blocks distracting applications and websites until the daily workout
//! goal has been reached.

mod bootstrap;
mod commands;
mod di;

use bootstrap::config::log_settings;
use bootstrap::{init_logging, load_settings};
use clap::{Parser, Subcommand};
use commands::config::ConfigCommand;
use goalgate_domain::CliOverrides;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "goalgate")]
#[command(version)]
#[command(about = "Blocks distracting apps and sites until today's workout goal is reached")]
struct Cli {
    /// Path to the settings file (default: ./goalgate.toml if present)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the block config, snapshots, heartbeat and log
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    /// Hosts file to manage
    #[arg(long = "hosts-path", global = true)]
    hosts_path: Option<PathBuf>,

    /// Seconds between goal status polls
    #[arg(long, global = true)]
    poll_interval: Option<u64>,

    /// Goal status endpoint
    #[arg(long, global = true)]
    goal_url: Option<String>,

    /// Log level (debug, info, warning, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the enforcement daemon (default)
    Run,
    /// Fetch the goal status once and print it
    Status,
    /// Inspect or edit the blocked apps and sites
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Remove every hosts redirect
    UnblockAll {
        /// Skip the running-daemon check
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            base_dir: self.base_dir.clone(),
            hosts_file: self.hosts_path.clone(),
            poll_interval_secs: self.poll_interval,
            goal_url: self.goal_url.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let overrides = cli.overrides();
    let command = cli.command.unwrap_or(Command::Run);

    let mut settings = load_settings(cli.config.as_deref(), overrides)?;

    // One-shot commands print to stdout; keep their logs in the file only.
    if !matches!(command, Command::Run) {
        settings.logging.stdout = false;
    }
    init_logging(&settings)?;
    log_settings(cli.config.as_deref(), &settings);

    match command {
        Command::Run => commands::run::run(&settings).await,
        Command::Status => commands::status::status(&settings).await,
        Command::Config(cmd) => {
            commands::config::config(&settings, cmd).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::UnblockAll { force } => {
            commands::unblock::unblock_all(&settings, force).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
