//! Tokens produced by the query parser.
//!
//! A token is one classified sub-phrase of a query: a run of title words, a
//! label marker, a project marker, a priority marker, a date phrase, or any
//! other kind the grammar declares.

use std::fmt;

use serde::{Serialize, Serializer};

/// The classification of a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Plain title text.
    Content,
    /// A `@label` marker.
    Label,
    /// A `p1`..`p4` priority marker.
    Priority,
    /// A natural-language due-date phrase.
    Date,
    /// A `#project` marker.
    Project,
    /// Any kind declared by the grammar that has no dedicated field.
    Other(String),
}

impl TokenKind {
    /// Resolve a kind name as written in grammar annotations.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "content" => Self::Content,
            "label" => Self::Label,
            "priority" => Self::Priority,
            "date" => Self::Date,
            "project" => Self::Project,
            other => Self::Other(other.to_string()),
        }
    }

    /// The kind name as written in grammar annotations.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Content => "content",
            Self::Label => "label",
            Self::Priority => "priority",
            Self::Date => "date",
            Self::Project => "project",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One classified sub-phrase of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    value: String,
    span: (usize, usize),
}

impl Token {
    /// Create a token. `span` is the byte range of the phrase in the query.
    #[must_use]
    pub const fn new(kind: TokenKind, value: String, span: (usize, usize)) -> Self {
        Self { kind, value, span }
    }

    /// The token's kind.
    #[must_use]
    pub const fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// The normalized value: marker names without their sigil, priority as
    /// its digit, dates and content as the literal text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Byte range of the token in the original query.
    #[must_use]
    pub const fn span(&self) -> (usize, usize) {
        self.span
    }

    /// The raw query text this token was recognized from.
    ///
    /// Returns `None` if `query` is not the string the token came from.
    #[must_use]
    pub fn raw<'q>(&self, query: &'q str) -> Option<&'q str> {
        query.get(self.span.0..self.span.1)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// One complete parse of a query, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<Token>);

impl TokenSequence {
    /// Create a sequence from tokens in source order.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    /// The tokens of this parse.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    /// The final token, if the query had any words at all.
    #[must_use]
    pub fn last(&self) -> Option<&Token> {
        self.0.last()
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, token) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "[{}: {}]", token.kind, token.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for name in ["content", "label", "priority", "date", "project", "section"] {
            assert_eq!(TokenKind::from_name(name).as_str(), name);
        }
        assert_eq!(
            TokenKind::from_name("section"),
            TokenKind::Other("section".to_string())
        );
    }

    #[test]
    fn test_token_display_is_value() {
        let token = Token::new(TokenKind::Label, "home".to_string(), (9, 14));
        assert_eq!(token.to_string(), "home");
    }

    #[test]
    fn test_token_raw_text() {
        let query = "buy milk @home";
        let token = Token::new(TokenKind::Label, "home".to_string(), (9, 14));
        assert_eq!(token.raw(query), Some("@home"));
        assert_eq!(token.raw("short"), None);
    }

    #[test]
    fn test_sequence_last_and_display() {
        let seq = TokenSequence::new(vec![
            Token::new(TokenKind::Content, "buy milk".to_string(), (0, 8)),
            Token::new(TokenKind::Date, "tomorrow".to_string(), (9, 17)),
        ]);
        assert_eq!(seq.last().map(Token::value), Some("tomorrow"));
        assert_eq!(seq.to_string(), "[content: buy milk] [date: tomorrow]");
        assert_eq!(seq.iter().filter(|t| *t.kind() == TokenKind::Date).count(), 1);
    }

    #[test]
    fn test_empty_sequence() {
        let seq = TokenSequence::default();
        assert!(seq.is_empty());
        assert!(seq.last().is_none());
    }

    #[test]
    fn test_token_serializes_kind_as_string() {
        let token = Token::new(TokenKind::Other("section".into()), "Errands".into(), (0, 8));
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"kind":"section","value":"Errands","span":[0,8]}"#);
    }
}
