use colored::Colorize;

use crate::grammar::Locale;
use crate::task::TaskRecord;
use crate::token::{Token, TokenKind, TokenSequence};

/// Format a parsed task as a colored summary
pub fn format_task_pretty(record: &TaskRecord<'_>, candidates: Option<&[TokenSequence]>) -> String {
    let mut output = String::new();

    if record.has_content() {
        output.push_str(&format!("{}\n", record.content().bold()));
    } else {
        output.push_str(&format!(
            "{} {}\n",
            record.content().dimmed(),
            "(no title text)".red()
        ));
    }

    output.push_str(&format!("  {}: {}\n", "Priority".dimmed(), record.priority()));

    if !record.due_string().is_empty() {
        output.push_str(&format!("  {}: {}\n", "Due".dimmed(), record.due_string().yellow()));
    }

    if let Some(project) = record.project() {
        output.push_str(&format!("  {}: {}\n", "Project".dimmed(), project));
    }

    if !record.labels().is_empty() {
        let labels = record
            .label_names()
            .map(|l| format!("@{l}"))
            .collect::<Vec<_>>()
            .join(" ");
        output.push_str(&format!("  {}: {}\n", "Labels".dimmed(), labels.cyan()));
    }

    for (kind, token) in record.extensions() {
        output.push_str(&format!("  {}: {}\n", capitalize(kind).dimmed(), token.value()));
    }

    if let Some(candidates) = candidates {
        output.push('\n');
        output.push_str(&format!("Candidates ({})\n", candidates.len()));
        output.push_str(&"─".repeat(60));
        output.push('\n');
        for (idx, sequence) in candidates.iter().enumerate() {
            let marker = if idx == 0 { "*".green() } else { " ".normal() };
            output.push_str(&format!("{marker} {:>2}. {}\n", idx + 1, format_sequence(sequence)));
        }
    }

    output.trim_end().to_string()
}

/// Format a token sequence as `[kind: value]` items, colored by kind
pub fn format_sequence(sequence: &TokenSequence) -> String {
    if sequence.is_empty() {
        return "(empty)".dimmed().to_string();
    }
    sequence
        .iter()
        .map(format_token)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_token(token: &Token) -> String {
    let text = format!("[{}: {}]", token.kind(), token.value());
    match token.kind() {
        TokenKind::Content => text,
        TokenKind::Label => text.cyan().to_string(),
        TokenKind::Priority => text.red().to_string(),
        TokenKind::Date => text.yellow().to_string(),
        TokenKind::Project => text.blue().to_string(),
        TokenKind::Other(_) => text.magenta().to_string(),
    }
}

/// Format the supported locales as a list
pub fn format_locales_pretty(locales: &[Locale]) -> String {
    let mut output = format!("Locales ({} items)\n", locales.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');
    for locale in locales {
        output.push_str(&format!("{}  {}\n", locale.code().bold(), locale.name()));
    }
    output.trim_end().to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
