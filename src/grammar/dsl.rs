//! Recursive-descent parser for the rule DSL.
//!
//! ```text
//! // comment
//! Symbol -> Other terminal;
//! Symbol[token: kind] -> terminal;
//! List -> Item+ closing;
//! Maybe -> word*;
//! Empty -> ;
//! ```
//!
//! Names starting with an uppercase letter are nonterminals, lowercase names
//! are terminal classes. A `+` or `*` suffix repeats a production one or more,
//! or zero or more, times. Each helper takes the remaining input and returns
//! what it consumed together with the new remainder.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Production, Repeat, Rule};
use crate::token::TokenKind;

type Infallible<'a, T> = (T, &'a str);
type ParseResult<'a, T> = Result<(T, &'a str), String>;

fn anchored(re: &str) -> Regex {
    Regex::new(re).unwrap_or_else(|e| panic!("Invalid grammar DSL regex {re}: {e}"))
}

static WHITESPACE_OR_COMMENT: Lazy<Regex> = Lazy::new(|| anchored(r"^(?:\s+|//[^\n]*)*"));

static NAME: Lazy<Regex> = Lazy::new(|| anchored(r"^[A-Za-z][A-Za-z0-9_\-]*"));

static ARROW: Lazy<Regex> = Lazy::new(|| anchored(r"^->"));

/// Try to consume a regex at the start of `s`.
fn optional_re<'a>(re: &Regex, s: &'a str) -> Infallible<'a, Option<&'a str>> {
    match re.find(s) {
        Some(m) if m.start() == 0 => (Some(m.as_str()), &s[m.end()..]),
        _ => (None, s),
    }
}

/// Consume a regex at the start of `s`, failing if it doesn't match.
fn needed_re<'a>(re: &Regex, what: &str, s: &'a str) -> ParseResult<'a, &'a str> {
    match optional_re(re, s) {
        (Some(m), rest) => Ok((m, rest)),
        (None, _) => Err(format!("expected {what} at '{}'", excerpt(s))),
    }
}

fn optional_char(c: char, s: &str) -> Infallible<'_, Option<char>> {
    s.strip_prefix(c).map_or((None, s), |rest| (Some(c), rest))
}

fn needed_char(c: char, s: &str) -> ParseResult<'_, char> {
    match optional_char(c, s) {
        (Some(c), rest) => Ok((c, rest)),
        (None, _) => Err(format!("expected '{c}' at '{}'", excerpt(s))),
    }
}

fn skip_whitespace(s: &str) -> &str {
    optional_re(&WHITESPACE_OR_COMMENT, s).1
}

fn parse_name(s: &str) -> ParseResult<'_, &str> {
    needed_re(&NAME, "a name", s)
}

fn excerpt(s: &str) -> &str {
    let line = s.lines().next().unwrap_or("");
    match line.char_indices().nth(40) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

fn is_terminal_name(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_lowercase)
}

/// Parses `[token: kind]`.
fn parse_annotation(s: &str) -> ParseResult<'_, TokenKind> {
    let (_, s) = needed_char('[', s)?;
    let s = skip_whitespace(s);
    let (key, s) = parse_name(s)?;
    if key != "token" {
        return Err(format!("unknown annotation '{key}'"));
    }
    let s = skip_whitespace(s);
    let (_, s) = needed_char(':', s)?;
    let s = skip_whitespace(s);
    let (kind, s) = parse_name(s).map_err(|e| format!("token kind: {e}"))?;
    let s = skip_whitespace(s);
    let (_, s) = needed_char(']', s)?;
    Ok((TokenKind::from_name(kind), s))
}

fn parse_production(s: &str) -> ParseResult<'_, Production> {
    let (name, s) = parse_name(s).map_err(|e| format!("production: {e}"))?;
    let (repeat, s) = match optional_char('+', s) {
        (Some(_), s) => (Repeat::OneOrMore, s),
        (None, s) => match optional_char('*', s) {
            (Some(_), s) => (Repeat::ZeroOrMore, s),
            (None, s) => (Repeat::Once, s),
        },
    };
    let prod = if is_terminal_name(name) {
        Production::Terminal(name.to_string(), repeat)
    } else {
        Production::Nonterminal(name.to_string(), repeat)
    };
    Ok((prod, s))
}

/// Symbol, optional annotation, arrow, productions, terminated by `;`.
fn parse_rule(s: &str) -> ParseResult<'_, Rule> {
    let (symbol, s) = parse_name(s).map_err(|e| format!("rule symbol: {e}"))?;
    if is_terminal_name(symbol) {
        return Err(format!("rule symbol '{symbol}' must start with an uppercase letter"));
    }
    let s = skip_whitespace(s);
    let (token, s) = if s.starts_with('[') {
        let (kind, s) = parse_annotation(s).map_err(|e| format!("rule {symbol}: {e}"))?;
        (Some(kind), s)
    } else {
        (None, s)
    };
    let s = skip_whitespace(s);
    let (_, s) = needed_re(&ARROW, "'->'", s).map_err(|e| format!("rule {symbol}: {e}"))?;

    let mut productions = Vec::new();
    let mut rem = s;
    loop {
        rem = skip_whitespace(rem);
        if let (Some(_), s) = optional_char(';', rem) {
            rem = s;
            break;
        }
        if rem.is_empty() {
            return Err(format!("rule {symbol}: missing ';'"));
        }
        let (prod, s) = parse_production(rem).map_err(|e| format!("rule {symbol}: {e}"))?;
        productions.push(prod);
        rem = s;
    }

    Ok((
        Rule {
            symbol: symbol.to_string(),
            token,
            productions,
        },
        rem,
    ))
}

/// Parse every rule in `source`, in declaration order.
pub(super) fn parse_rules(source: &str) -> Result<Vec<Rule>, String> {
    let mut rules = Vec::new();
    let mut rem = source;
    loop {
        rem = skip_whitespace(rem);
        if rem.is_empty() {
            return Ok(rules);
        }
        let (rule, s) = parse_rule(rem)?;
        rules.push(rule);
        rem = s;
    }
}
