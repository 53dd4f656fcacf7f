//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, `PowerShell`, and elvish.

use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

use crate::cli::args::Cli;
use crate::error::QueryError;

/// Execute the completions command.
///
/// # Errors
///
/// Returns `QueryError::Config` if the shell name is not recognized.
pub fn completions(shell: &str, install: bool) -> Result<String, QueryError> {
    let shell_type = shell_from_str(shell).ok_or_else(|| {
        QueryError::Config(format!(
            "Unknown shell: {shell}. Supported: bash, zsh, fish, powershell, elvish"
        ))
    })?;

    if install {
        Ok(completion_install_instructions(shell_type))
    } else {
        generate_completions(shell_type)
    }
}

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns `QueryError::Config` if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, QueryError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate_to(&mut buf, shell, &mut cmd);
    String::from_utf8(buf).map_err(|e| QueryError::Config(format!("UTF-8 error: {e}")))
}

fn generate_to<W: Write>(buf: &mut W, shell: Shell, cmd: &mut clap::Command) {
    clap_complete::generate(shell, cmd, "taskquery", buf);
}

/// Get shell from string name.
#[must_use]
pub fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}

/// Get installation instructions for shell completions.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc or ~/.bash_profile:
source <(taskquery completions bash)

# Or save to a file:
taskquery completions bash > /usr/local/etc/bash_completion.d/taskquery
"
        .to_string(),

        Shell::Zsh => r"# Add to ~/.zshrc (before compinit):
source <(taskquery completions zsh)

# Or save to your fpath:
taskquery completions zsh > ~/.zsh/completions/_taskquery
# Then add to ~/.zshrc:
fpath=(~/.zsh/completions $fpath)
autoload -Uz compinit && compinit
"
        .to_string(),

        Shell::Fish => r"# Save to fish completions directory:
taskquery completions fish > ~/.config/fish/completions/taskquery.fish

# Or run directly:
taskquery completions fish | source
"
        .to_string(),

        Shell::PowerShell => r"# Add to your PowerShell profile ($PROFILE):
taskquery completions powershell | Out-String | Invoke-Expression
"
        .to_string(),

        Shell::Elvish => r"# Save to elvish completions directory:
taskquery completions elvish > ~/.elvish/lib/taskquery.elv

# Then add to ~/.elvish/rc.elv:
use taskquery
"
        .to_string(),

        _ => "Unknown shell".to_string(),
    }
}
