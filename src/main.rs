//! `modesink` command line: inspect and switch the deployment mode, and write
//! log records through the standard logger layout.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use modesink::{
    config::{Config, expand_path},
    deploy::{DeploymentMode, ModeSwitcher},
    diagnostics::{DEFAULT_FILTER, init_diagnostics},
    log::{LogLevel, Logger},
};

#[derive(Parser, Debug)]
#[command(name = "modesink", version, about = "Mode-gated debug logging")]
struct Cli {
    /// Environment file holding the deployment settings.
    #[arg(long, default_value = "app/etc/env.conf")]
    env: PathBuf,

    /// Log directory. Defaults to `[log] dir` in the environment file, then `var/log`.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show or change the deployment mode.
    Mode {
        #[command(subcommand)]
        action: ModeAction,
    },
    /// Turn the "log to file" setting on or off.
    LogToFile { state: Toggle },
    /// Write one record through the standard logger.
    Log {
        #[arg(long, default_value = "debug")]
        level: String,
        #[arg(long, default_value = "main")]
        channel: String,
        message: String,
    },
}

#[derive(Subcommand, Debug)]
enum ModeAction {
    Show,
    Set { mode: String },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Toggle {
    On,
    Off,
}

fn main() -> Result<()> {
    init_diagnostics(DEFAULT_FILTER);
    let cli = Cli::parse();
    let switcher = ModeSwitcher::new(&cli.env);

    match cli.command {
        Command::Mode {
            action: ModeAction::Show,
        } => {
            let s = switcher
                .settings()
                .with_context(|| format!("reading {}", cli.env.display()))?;
            println!("mode: {}", s.mode);
            println!("log to file: {}", if s.log_to_file { "on" } else { "off" });
        }
        Command::Mode {
            action: ModeAction::Set { mode },
        } => {
            let mode: DeploymentMode = mode.parse()?;
            let s = switcher
                .set_mode(mode)
                .with_context(|| format!("writing {}", cli.env.display()))?;
            println!("Enabled {} mode.", s.mode);
        }
        Command::LogToFile { state } => {
            let s = switcher.set_log_to_file(matches!(state, Toggle::On))?;
            println!("log to file: {}", if s.log_to_file { "on" } else { "off" });
        }
        Command::Log {
            level,
            channel,
            message,
        } => {
            let level: LogLevel = level.parse()?;
            let log_dir = match cli.log_dir {
                Some(dir) => dir,
                None => resolve_log_dir(&switcher)?,
            };
            let logger = Logger::standard(channel, &log_dir, Arc::new(switcher));
            let written = logger
                .log(level, message)
                .with_context(|| format!("logging into {}", log_dir.display()))?;
            println!("{level} record written to {written} sink(s)");
        }
    }
    Ok(())
}

fn resolve_log_dir(switcher: &ModeSwitcher) -> Result<PathBuf> {
    let env = switcher.env_path();
    let cfg = if env.exists() {
        Config::load(&env)?
    } else {
        Config::empty()
    };
    Ok(expand_path(cfg.get_non_empty_or_default(
        "log", "dir", "var/log",
    )))
}
