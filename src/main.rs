use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};

use skillshelf::{commands, DisplayConfig, Ui};

#[derive(Parser)]
#[command(name = "skillshelf", version, about = "Browse and pick agent skills in the terminal")]
struct Cli {
    /// Config file (default: ~/.skillshelf/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print static output and never wait for keys
    #[arg(long, global = true)]
    no_interactive: bool,

    /// Write debug logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse search results from a JSON file
    Search {
        results: PathBuf,
        /// Query the results were produced for
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Show one skill from a JSON file
    Show { skill: PathBuf },
    /// List installed skills from a JSON file
    Installed { file: PathBuf },
    /// Choose agents from a JSON file
    Agents {
        file: PathBuf,
        /// Agent id to preselect (repeatable; default: all)
        #[arg(long = "select")]
        select: Vec<String>,
    },
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).context(format!("Failed to create {}", path.display()))?;
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(LevelFilter::Debug, log_config, file)
        .context("Failed to initialise logging")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DisplayConfig::load(path)?,
        None => DisplayConfig::load_default()?,
    };
    if cli.no_interactive {
        config.interactive = false;
    }
    if let Some(path) = cli.log_file {
        config.log_file = Some(path);
    }
    if let Some(path) = &config.log_file {
        init_logging(path)?;
    }
    log::info!("skillshelf starting, interactive: {}", config.interactive);

    let interactive = config.interactive;
    let mut ui = Ui::terminal(config);

    match cli.command {
        Commands::Search { results, query } => {
            commands::search(&mut ui, &results, &query, interactive)?;
        }
        Commands::Show { skill } => {
            commands::show(&mut ui, &skill, interactive)?;
        }
        Commands::Installed { file } => {
            commands::installed(&mut ui, &file)?;
        }
        Commands::Agents { file, select } => {
            commands::agents(&mut ui, &file, &select, interactive)?;
        }
    }

    Ok(())
}
