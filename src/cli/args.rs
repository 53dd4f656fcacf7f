use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "taskquery")]
#[command(about = "Parse free-form task queries into structured task payloads")]
#[command(long_about = "taskquery - free-form task query parser

Turns a one-line task query into the payload a task-tracking API expects.
Plain words become the title; markers and date phrases fill the rest.

QUICK START:
  taskquery parse buy milk tomorrow at 5pm @errand #Home p1
  taskquery parse -l de arzt anrufen nächsten montag um 10 uhr
  taskquery parse --candidates call mom tomorrow

MARKERS:
  @label           Add a label (repeatable)
  #Project         Set the project (#\"Two Words\" for spaces)
  p1..p4 / !!1..4  Priority, p1 is the most urgent
  /Section         Set the section

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  taskquery <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the `output` setting in the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the config file
    #[arg(long, global = true, env = "TASKQUERY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a query into a task payload
    ///
    /// Words may be given as separate arguments or as one quoted string;
    /// they are joined with single spaces.
    ///
    /// # Examples
    ///
    ///   taskquery parse "buy milk @home @errand"
    ///   taskquery parse review PR next friday at 3pm p2
    ///   taskquery parse -l fr appeler lundi prochain
    ///   taskquery parse -o json "standup every weekday at 9:30 #Team"
    ///
    /// # Supported Patterns
    ///
    ///   Dates:       today, tomorrow, friday, next week, dec 15, 12/25, in 3 days
    ///   Times:       5pm, 17:30, at 9, tomorrow morning
    ///   Recurrence:  daily, every monday, every 2 weeks, every other week
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// List supported locales
    ///
    /// Each locale brings its own date vocabulary; markers work the same
    /// in every locale.
    Locales,

    /// Generate shell completions
    ///
    /// Outputs completion script for the specified shell.
    /// Redirect to a file or source directly.
    ///
    /// Example: taskquery completions bash > ~/.bash_completion.d/taskquery
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },

    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Arguments for the parse command.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// The query text
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Locale of the date vocabulary (da, de, en, es, fr, it, ja, ko, nl, pl, pt, ru, sv, zh)
    #[arg(short, long, env = "TASKQUERY_LOCALE")]
    pub locale: Option<String>,

    /// Also list every candidate parse, authoritative one first
    #[arg(long)]
    pub candidates: bool,

    /// Cap on the number of candidate parses to enumerate
    #[arg(long, value_name = "N")]
    pub max_candidates: Option<usize>,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}
