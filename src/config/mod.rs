//! Configuration management for taskquery.
//!
//! This module handles loading and saving configuration from `~/.taskquery/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config};
