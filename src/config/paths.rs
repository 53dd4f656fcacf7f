//! Path resolution for taskquery configuration.
//!
//! All taskquery files live in `~/.taskquery/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::QueryError;

/// Paths to taskquery configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.taskquery/`
    pub root: PathBuf,
    /// Config file: `~/.taskquery/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, QueryError> {
        let home = std::env::var("HOME")
            .map_err(|_| QueryError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".taskquery")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Paths for an explicit config file, rooted at its directory.
    #[must_use]
    pub fn for_config_file(config_file: PathBuf) -> Self {
        let root = match config_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self { root, config_file }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), QueryError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                QueryError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}
