//! Query grammar.
//!
//! A grammar is a list of context-free rules compiled from the rule DSL
//! (see [`dsl`]) plus the [`TerminalSet`] its lowercase symbols refer to.
//! Rules may carry a `token` annotation; the parser turns every constituent
//! built by an annotated rule into a [`Token`](crate::token::Token) of that
//! kind.
//!
//! Rule declaration order matters: it is the first key of the parser's
//! candidate enumeration order.

mod dsl;
pub mod locale;
mod query;
pub mod terminals;
pub mod vocab;

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::debug;

use crate::error::QueryError;
use crate::token::TokenKind;

pub use locale::Locale;
pub use terminals::{DateOrder, Matcher, TerminalSet};
pub use vocab::Vocabulary;

/// Index of a rule in declaration order.
pub type RuleId = usize;

/// How often a production matches in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Exactly once.
    #[default]
    Once,
    /// `name+`
    OneOrMore,
    /// `name*`
    ZeroOrMore,
}

impl Repeat {
    /// Whether the production may match more than once.
    #[must_use]
    pub const fn is_repeated(self) -> bool {
        !matches!(self, Self::Once)
    }

    const fn suffix(self) -> &'static str {
        match self {
            Self::Once => "",
            Self::OneOrMore => "+",
            Self::ZeroOrMore => "*",
        }
    }
}

/// One symbol on the right-hand side of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Production {
    /// A terminal class, matched against a single word.
    Terminal(String, Repeat),
    /// A nonterminal, expanded by its own rules.
    Nonterminal(String, Repeat),
}

impl Production {
    /// The symbol or terminal class name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Terminal(name, _) | Self::Nonterminal(name, _) => name,
        }
    }

    /// Whether this is a terminal class.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal(..))
    }

    #[must_use]
    pub const fn repeat(&self) -> Repeat {
        match self {
            Self::Terminal(_, repeat) | Self::Nonterminal(_, repeat) => *repeat,
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name(), self.repeat().suffix())
    }
}

/// A single rule: `Symbol[token: kind] -> productions;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// The nonterminal this rule builds.
    pub symbol: String,
    /// Kind of token emitted for constituents built by this rule.
    pub token: Option<TokenKind>,
    /// Right-hand side, possibly empty.
    pub productions: Vec<Production>,
}

impl Rule {
    /// Number of productions on the right-hand side.
    #[must_use]
    pub fn len(&self) -> usize {
        self.productions.len()
    }

    /// Whether the rule has an empty right-hand side.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)?;
        if let Some(kind) = &self.token {
            write!(f, "[token: {kind}]")?;
        }
        f.write_str(" ->")?;
        for prod in &self.productions {
            write!(f, " {prod}")?;
        }
        f.write_str(";")
    }
}

/// A compiled grammar.
#[derive(Debug, Clone)]
pub struct Grammar {
    start: String,
    rules: Vec<Rule>,
    by_symbol: HashMap<String, Vec<RuleId>>,
    nullables: HashSet<String>,
    terminals: TerminalSet,
}

impl Grammar {
    /// Compile a grammar from DSL source. The first rule's symbol is the
    /// start symbol.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Grammar`] if the source does not parse, is empty,
    /// uses a nonterminal that has no rules, or uses a terminal class that is
    /// not in `terminals`.
    pub fn new(source: &str, terminals: TerminalSet) -> Result<Self, QueryError> {
        let rules = dsl::parse_rules(source).map_err(QueryError::Grammar)?;
        let Some(first) = rules.first() else {
            return Err(QueryError::Grammar("empty ruleset".to_string()));
        };
        let start = first.symbol.clone();

        let mut by_symbol: HashMap<String, Vec<RuleId>> = HashMap::new();
        for (id, rule) in rules.iter().enumerate() {
            by_symbol.entry(rule.symbol.clone()).or_default().push(id);
        }

        for rule in &rules {
            for prod in &rule.productions {
                match prod {
                    Production::Terminal(name, _) if !terminals.contains(name) => {
                        return Err(QueryError::Grammar(format!(
                            "unknown terminal class '{name}' in rule for {}",
                            rule.symbol
                        )));
                    },
                    Production::Nonterminal(name, _) if !by_symbol.contains_key(name) => {
                        return Err(QueryError::Grammar(format!(
                            "undefined symbol '{name}' in rule for {}",
                            rule.symbol
                        )));
                    },
                    _ => {},
                }
            }
        }

        let nullables = find_nullables(&rules);
        debug!(
            rules = rules.len(),
            symbols = by_symbol.len(),
            terminals = terminals.len(),
            nullables = nullables.len(),
            "compiled grammar"
        );

        Ok(Self {
            start,
            rules,
            by_symbol,
            nullables,
            terminals,
        })
    }

    /// Compile the query grammar with a locale's date vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Grammar`] if the built-in grammar fails to
    /// compile, which would be a bug.
    pub fn for_locale(locale: Locale) -> Result<Self, QueryError> {
        Self::new(query::QUERY_GRAMMAR, query::terminals(locale.vocabulary()))
    }

    /// The start symbol.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// All rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Look up a rule by id.
    #[must_use]
    pub fn rule(&self, id: RuleId) -> &Rule {
        &self.rules[id]
    }

    /// Ids of the rules building `symbol`, in declaration order.
    #[must_use]
    pub fn rules_for(&self, symbol: &str) -> &[RuleId] {
        self.by_symbol.get(symbol).map_or(&[], Vec::as_slice)
    }

    /// Whether `symbol` can derive the empty string.
    #[must_use]
    pub fn is_nullable(&self, symbol: &str) -> bool {
        self.nullables.contains(symbol)
    }

    /// Whether a state waiting on `prod` may move past it without consuming
    /// anything. `looped` says the production already matched at least once.
    #[must_use]
    pub fn can_skip(&self, prod: &Production, looped: bool) -> bool {
        match prod.repeat() {
            Repeat::ZeroOrMore => true,
            Repeat::OneOrMore if looped => true,
            _ => matches!(prod, Production::Nonterminal(name, _) if self.is_nullable(name)),
        }
    }

    /// Check a word against a terminal class.
    #[must_use]
    pub fn matches(&self, terminal: &str, text: &str, lower: &str) -> bool {
        self.terminals
            .get(terminal)
            .is_some_and(|m| m.matches(text, lower))
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// start: {}", self.start)?;
        for rule in &self.rules {
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

fn find_nullables(rules: &[Rule]) -> HashSet<String> {
    let mut nullables: HashSet<String> = HashSet::new();
    loop {
        let before = nullables.len();
        for rule in rules {
            if nullables.contains(&rule.symbol) {
                continue;
            }
            let nullable = rule.productions.iter().all(|p| match p {
                _ if p.repeat() == Repeat::ZeroOrMore => true,
                Production::Nonterminal(name, _) => nullables.contains(name),
                Production::Terminal(..) => false,
            });
            if nullable {
                nullables.insert(rule.symbol.clone());
            }
        }
        if nullables.len() == before {
            return nullables;
        }
    }
}
