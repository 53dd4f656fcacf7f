use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::QueryError;
use crate::output::format_config;

/// Execute config subcommands against `paths.config_file`.
///
/// # Errors
///
/// Returns `QueryError::Config` if the file cannot be read or written, or if
/// `init` would overwrite an existing file without `--force`.
pub fn config(cmd: &ConfigCommands, paths: &Paths, format: OutputFormat) -> Result<String, QueryError> {
    let path = &paths.config_file;
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_from_path(path)?;
            format_config(&config, format)
        },
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                return Err(QueryError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            paths.ensure_dirs()?;
            Config::default().save_to_path(path)?;
            Ok(format!("Wrote default configuration to {}", path.display()))
        },
    }
}
