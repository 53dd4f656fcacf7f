//! Folds a token sequence into a [`TaskRecord`].

use tracing::{debug, warn};

use super::record::{Priority, TaskRecord};
use crate::token::{TokenKind, TokenSequence};

/// Reduce a token sequence to a task record in a single left-to-right pass.
///
/// - content: trimmed, non-empty runs replace the placeholder and are then
///   joined with one space
/// - label: appended in order, repeats kept
/// - priority: mapped from the marker digit, last one wins
/// - date: last one wins
/// - project: last one wins
/// - any other kind: stored under its kind name, last one wins
#[must_use]
pub fn reduce(tokens: &TokenSequence) -> TaskRecord<'_> {
    let mut record = TaskRecord::default();
    let mut has_content = false;

    for token in tokens {
        match token.kind() {
            TokenKind::Content => {
                let text = token.value().trim();
                if text.is_empty() {
                    continue;
                }
                if has_content {
                    record.content.push(' ');
                    record.content.push_str(text);
                } else {
                    record.content = text.to_string();
                    has_content = true;
                }
            },
            TokenKind::Label => record.labels.push(token),
            TokenKind::Priority => {
                match token.value().parse::<u8>().ok().and_then(Priority::from_marker) {
                    Some(priority) => record.priority = priority,
                    None => warn!(value = token.value(), "ignoring malformed priority token"),
                }
            },
            TokenKind::Date => record.due_string = token.value().to_string(),
            TokenKind::Project => record.project = Some(token.value().to_string()),
            TokenKind::Other(kind) => {
                record.extensions.insert(kind.clone(), token);
            },
        }
    }

    record.last = tokens.last();
    debug!(
        tokens = tokens.len(),
        labels = record.labels.len(),
        priority = %record.priority,
        has_due = !record.due_string.is_empty(),
        "reduced tokens"
    );
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::PLACEHOLDER_CONTENT;
    use crate::token::Token;

    fn token(kind: TokenKind, value: &str) -> Token {
        Token::new(kind, value.to_string(), (0, value.len()))
    }

    fn seq(tokens: Vec<Token>) -> TokenSequence {
        TokenSequence::new(tokens)
    }

    // ===== Content Tests =====

    #[test]
    fn test_content_is_trimmed() {
        let tokens = seq(vec![token(TokenKind::Content, "  buy milk  ")]);
        assert_eq!(reduce(&tokens).content(), "buy milk");
    }

    #[test]
    fn test_content_runs_accumulate() {
        let tokens = seq(vec![
            token(TokenKind::Content, "buy milk"),
            token(TokenKind::Date, "tomorrow"),
            token(TokenKind::Content, "for the party "),
        ]);
        let record = reduce(&tokens);
        assert_eq!(record.content(), "buy milk for the party");
        assert!(record.has_content());
    }

    #[test]
    fn test_placeholder_replaced_not_prepended() {
        let tokens = seq(vec![
            token(TokenKind::Label, "home"),
            token(TokenKind::Content, "call"),
        ]);
        let record = reduce(&tokens);
        assert_eq!(record.content(), "call");
        assert!(!record.content().contains(PLACEHOLDER_CONTENT));
    }

    #[test]
    fn test_blank_content_keeps_placeholder() {
        let tokens = seq(vec![token(TokenKind::Content, "   ")]);
        let record = reduce(&tokens);
        assert_eq!(record.content(), PLACEHOLDER_CONTENT);
        assert!(!record.has_content());
    }

    // ===== Label Tests =====

    #[test]
    fn test_labels_keep_order_and_duplicates() {
        let tokens = seq(vec![
            token(TokenKind::Label, "home"),
            token(TokenKind::Label, "errand"),
            token(TokenKind::Label, "home"),
        ]);
        let record = reduce(&tokens);
        let names: Vec<_> = record.label_names().collect();
        assert_eq!(names, vec!["home", "errand", "home"]);
        // labels are the tokens themselves
        assert!(std::ptr::eq(record.labels()[0], &tokens.tokens()[0]));
    }

    // ===== Overwrite Tests =====

    #[test]
    fn test_priority_mapping() {
        for (marker, level) in [("1", 4), ("2", 3), ("3", 2), ("4", 1)] {
            let tokens = seq(vec![token(TokenKind::Priority, marker)]);
            assert_eq!(reduce(&tokens).priority().level(), level, "p{marker}");
        }
    }

    #[test]
    fn test_last_priority_wins() {
        let tokens = seq(vec![
            token(TokenKind::Priority, "1"),
            token(TokenKind::Priority, "3"),
        ]);
        assert_eq!(reduce(&tokens).priority().level(), 2);
    }

    #[test]
    fn test_malformed_priority_is_ignored() {
        let tokens = seq(vec![
            token(TokenKind::Priority, "2"),
            token(TokenKind::Priority, "9"),
        ]);
        assert_eq!(reduce(&tokens).priority().level(), 3);
    }

    #[test]
    fn test_last_date_wins() {
        let tokens = seq(vec![
            token(TokenKind::Date, "tomorrow"),
            token(TokenKind::Content, "call"),
            token(TokenKind::Date, "friday"),
        ]);
        assert_eq!(reduce(&tokens).due_string(), "friday");
    }

    #[test]
    fn test_last_project_wins() {
        let tokens = seq(vec![
            token(TokenKind::Project, "Work"),
            token(TokenKind::Project, "Home"),
        ]);
        assert_eq!(reduce(&tokens).project(), Some("Home"));
    }

    #[test]
    fn test_other_kinds_go_to_extensions() {
        let section = TokenKind::Other("section".to_string());
        let tokens = seq(vec![
            token(section.clone(), "Inbox"),
            token(section, "Errands"),
            token(TokenKind::Other("assignee".to_string()), "sam"),
        ]);
        let record = reduce(&tokens);
        assert_eq!(record.extensions().len(), 2);
        assert_eq!(record.extension("section").map(Token::value), Some("Errands"));
        assert_eq!(record.extension("assignee").map(Token::value), Some("sam"));
        assert_eq!(record.extension("missing"), None);
    }

    // ===== Last Token Tests =====

    #[test]
    fn test_last_is_final_token() {
        let tokens = seq(vec![
            token(TokenKind::Content, "buy"),
            token(TokenKind::Label, "home"),
        ]);
        let record = reduce(&tokens);
        let last = record.last().unwrap();
        assert!(std::ptr::eq(last, &tokens.tokens()[1]));
    }

    #[test]
    fn test_empty_sequence() {
        let tokens = TokenSequence::default();
        let record = reduce(&tokens);
        assert_eq!(record, TaskRecord::default());
        assert_eq!(record.last(), None);
    }
}
