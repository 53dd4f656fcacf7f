use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use taskquery::cli::args::{Cli, Commands};
use taskquery::cli::commands;
use taskquery::config::{Config, Paths};
use taskquery::error::QueryError;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        let code = e.downcast_ref::<QueryError>().map_or(1, QueryError::exit_code);
        std::process::exit(code);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TASKQUERY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.config {
        Some(path) => Paths::for_config_file(path),
        None => Paths::new()?,
    };

    // `config init --force` must work even when the existing file is broken
    let output = if let Commands::Config { command } = &cli.command {
        commands::config(command, &paths, cli.output.unwrap_or_default())?
    } else {
        let config = Config::load_from_path(&paths.config_file)
            .with_context(|| format!("loading {}", paths.config_file.display()))?;
        config.color.apply();
        let format = cli.output.unwrap_or(config.output);

        match &cli.command {
            Commands::Parse(args) => commands::parse(args, &config, format)?,
            Commands::Locales => commands::locales(format)?,
            Commands::Completions { shell, install } => commands::completions(shell, *install)?,
            Commands::Config { .. } => String::new(),
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
