//! Command-line interface for taskquery.

pub mod args;
pub mod commands;
