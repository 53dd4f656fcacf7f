//! Query parser.
//!
//! Turns free-form query text into [`TokenSequence`]s. The query grammar is
//! ambiguous on purpose (any word may be content, a date phrase may or may
//! not swallow a neighbouring word), so the parser can return several
//! candidate sequences. Candidates come out in a fixed, documented order (see
//! [`forest`]) and the first one is authoritative.
//!
//! Parsing never fails: empty input yields an empty sequence and anything the
//! grammar cannot place becomes content.

mod earley;
mod forest;
pub mod lexer;

use tracing::{debug, warn};

use crate::error::QueryError;
use crate::grammar::{Grammar, Locale};
use crate::token::{Token, TokenKind, TokenSequence};

use self::earley::parse_chart;
use self::forest::{Forest, ParseTree};
use self::lexer::{tokenize, Word};

/// Default cap on the number of trees enumerated by [`QueryParser::candidates`].
pub const DEFAULT_MAX_CANDIDATES: usize = 32;

/// A parser for one locale. Immutable after construction.
#[derive(Debug, Clone)]
pub struct QueryParser {
    locale: Locale,
    grammar: Grammar,
    max_candidates: usize,
}

impl QueryParser {
    /// Create a parser with the query grammar for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Grammar`] if the built-in grammar fails to
    /// compile.
    pub fn new(locale: Locale) -> Result<Self, QueryError> {
        Ok(Self {
            locale,
            grammar: Grammar::for_locale(locale)?,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        })
    }

    /// Create a parser for a custom grammar.
    ///
    /// The grammar must declare a `word` terminal reachable as content if
    /// parsing is to stay total; otherwise unparseable input falls back to a
    /// single content token.
    #[must_use]
    pub const fn with_grammar(locale: Locale, grammar: Grammar) -> Self {
        Self {
            locale,
            grammar,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    /// Cap the number of candidate trees enumerated. Values below 1 are
    /// raised to 1.
    #[must_use]
    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = max.max(1);
        self
    }

    /// The locale this parser was built for.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// The compiled grammar.
    #[must_use]
    pub const fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Parse a query into its authoritative token sequence.
    #[must_use]
    pub fn parse(&self, input: &str) -> TokenSequence {
        let words = tokenize(input);
        if words.is_empty() {
            return TokenSequence::default();
        }

        let chart = parse_chart(&self.grammar, &words);
        let forest = Forest::new(&self.grammar, &words, &chart);
        debug!(
            locale = %self.locale,
            words = words.len(),
            states = chart.state_count(),
            constituents = forest.len(),
            accepted = chart.accepts(),
            "parsed query"
        );

        let Some(tree) = forest.first_tree() else {
            return self.fallback(input, &words);
        };
        let sequence = self.to_sequence(&tree, input, &words);
        debug!(tokens = %sequence, "first candidate");
        sequence
    }

    /// Every candidate token sequence, in enumeration order, without
    /// duplicates. Never empty; the first element equals [`Self::parse`].
    #[must_use]
    pub fn candidates(&self, input: &str) -> Vec<TokenSequence> {
        let words = tokenize(input);
        if words.is_empty() {
            return vec![TokenSequence::default()];
        }

        let chart = parse_chart(&self.grammar, &words);
        let forest = Forest::new(&self.grammar, &words, &chart);
        let trees = forest.trees(self.max_candidates);
        debug!(
            locale = %self.locale,
            trees = trees.len(),
            limit = self.max_candidates,
            "enumerated candidates"
        );

        let mut candidates: Vec<TokenSequence> = Vec::with_capacity(trees.len());
        for tree in &trees {
            let sequence = self.to_sequence(tree, input, &words);
            if !candidates.contains(&sequence) {
                candidates.push(sequence);
            }
        }
        if candidates.is_empty() {
            candidates.push(self.fallback(input, &words));
        }
        candidates
    }

    fn fallback(&self, input: &str, words: &[Word<'_>]) -> TokenSequence {
        warn!(
            locale = %self.locale,
            words = words.len(),
            "no parse tree for query, treating it as content"
        );
        let start = words.first().map_or(0, |w| w.span.0);
        let end = words.last().map_or(input.len(), |w| w.span.1);
        let text = input.get(start..end).unwrap_or(input);
        TokenSequence::new(vec![Token::new(
            TokenKind::Content,
            text.to_string(),
            (start, end),
        )])
    }

    fn to_sequence(&self, tree: &ParseTree, input: &str, words: &[Word<'_>]) -> TokenSequence {
        let mut tokens = Vec::new();
        self.collect_tokens(tree, input, words, &mut tokens);
        TokenSequence::new(merge_content(tokens, input))
    }

    fn collect_tokens(
        &self,
        tree: &ParseTree,
        input: &str,
        words: &[Word<'_>],
        out: &mut Vec<Token>,
    ) {
        let rule = self.grammar.rule(tree.rule);
        let Some(kind) = &rule.token else {
            for child in &tree.children {
                self.collect_tokens(child, input, words, out);
            }
            return;
        };

        let (first, last) = tree.span;
        if first == last {
            return;
        }
        let span = (words[first].span.0, words[last - 1].span.1);
        let raw = &input[span.0..span.1];
        let value = normalize(kind, raw);
        if *kind == TokenKind::Project && value.is_empty() {
            // `#" "` names no project
            out.push(Token::new(TokenKind::Content, raw.to_string(), span));
        } else {
            out.push(Token::new(kind.clone(), value, span));
        }
    }
}

/// Strip marker syntax from a recognized phrase.
fn normalize(kind: &TokenKind, raw: &str) -> String {
    match kind {
        TokenKind::Label => raw.strip_prefix('@').unwrap_or(raw).to_string(),
        TokenKind::Project => raw
            .strip_prefix('#')
            .unwrap_or(raw)
            .trim_matches('"')
            .trim()
            .to_string(),
        TokenKind::Priority => raw
            .chars()
            .last()
            .filter(char::is_ascii_digit)
            .map_or_else(|| raw.to_string(), String::from),
        TokenKind::Other(_) => raw
            .strip_prefix(|c: char| c.is_ascii_punctuation())
            .unwrap_or(raw)
            .to_string(),
        TokenKind::Content | TokenKind::Date => raw.to_string(),
    }
}

/// Join runs of adjacent content tokens into one token covering the source
/// text between them.
fn merge_content(tokens: Vec<Token>, input: &str) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Some(prev) = merged.last_mut() {
            if *prev.kind() == TokenKind::Content && *token.kind() == TokenKind::Content {
                let span = (prev.span().0, token.span().1);
                *prev = Token::new(TokenKind::Content, input[span.0..span.1].to_string(), span);
                continue;
            }
        }
        merged.push(token);
    }
    merged
}
