//! Earley recognizer over query words.
//!
//! Repeated productions (`x+`, `x*`) are handled in place: a state that has
//! matched its repeated production at least once is `looped` and may either
//! match it again or move on. Right-recursive lists are therefore never
//! needed, and the chart stays linear in the input for list-shaped grammars.

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::trace;

use super::lexer::Word;
use crate::grammar::{Grammar, Production, RuleId};

/// A dotted rule with the column it started in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct State {
    pub rule: RuleId,
    pub dot: usize,
    pub origin: usize,
    pub looped: bool,
}

impl State {
    const fn new(rule: RuleId, origin: usize) -> Self {
        Self {
            rule,
            dot: 0,
            origin,
            looped: false,
        }
    }

    const fn advance(self) -> Self {
        Self {
            rule: self.rule,
            dot: self.dot + 1,
            origin: self.origin,
            looped: false,
        }
    }

    /// The state after one more match of a repeated production.
    const fn again(self) -> Self {
        Self {
            rule: self.rule,
            dot: self.dot,
            origin: self.origin,
            looped: true,
        }
    }

    fn next_production(self, grammar: &Grammar) -> Option<&Production> {
        grammar.rule(self.rule).productions.get(self.dot)
    }

    /// The state after its next production matched once.
    fn matched(self, grammar: &Grammar) -> Self {
        match self.next_production(grammar) {
            Some(prod) if prod.repeat().is_repeated() => self.again(),
            _ => self.advance(),
        }
    }
}

/// One column per gap between words (so `words + 1` columns).
#[derive(Debug)]
pub(crate) struct Chart<'g> {
    grammar: &'g Grammar,
    columns: Vec<Vec<State>>,
    seen: Vec<HashSet<State>>,
    /// States per column keyed by the nonterminal they wait on.
    waiting: Vec<HashMap<&'g str, Vec<State>>>,
}

impl<'g> Chart<'g> {
    fn new(grammar: &'g Grammar, length: usize) -> Self {
        Self {
            grammar,
            columns: vec![Vec::new(); length],
            seen: vec![HashSet::new(); length],
            waiting: vec![HashMap::new(); length],
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    fn add(&mut self, k: usize, state: State) {
        if !self.seen[k].insert(state) {
            return;
        }
        let grammar = self.grammar;
        if let Some(Production::Nonterminal(symbol, _)) = state.next_production(grammar) {
            self.waiting[k].entry(symbol.as_str()).or_default().push(state);
        }
        self.columns[k].push(state);
    }

    fn waiting_on(&self, k: usize, symbol: &str) -> Vec<State> {
        self.waiting[k].get(symbol).cloned().unwrap_or_default()
    }

    /// Total number of states across every column.
    pub fn state_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Completed states as `(end column, state)`.
    pub fn completed(&self) -> impl Iterator<Item = (usize, State)> + '_ {
        self.columns.iter().enumerate().flat_map(move |(k, column)| {
            column
                .iter()
                .filter(move |s| s.next_production(self.grammar).is_none())
                .map(move |s| (k, *s))
        })
    }

    /// Whether the start symbol was recognized over the whole input.
    pub fn accepts(&self) -> bool {
        let end = self.len() - 1;
        let start = self.grammar.start();
        self.columns[end].iter().any(|s| {
            s.origin == 0
                && s.next_production(self.grammar).is_none()
                && self.grammar.rule(s.rule).symbol == start
        })
    }
}

impl fmt::Display for Chart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, column) in self.columns.iter().enumerate() {
            writeln!(f, "Column {k}:")?;
            for state in column {
                let looped = if state.looped { " (looped)" } else { "" };
                writeln!(
                    f,
                    "  rule {} dot {} from {}{looped}",
                    state.rule, state.dot, state.origin
                )?;
            }
        }
        Ok(())
    }
}

/// Fill the chart for `words`.
pub(crate) fn parse_chart<'g>(grammar: &'g Grammar, words: &[Word<'_>]) -> Chart<'g> {
    let mut chart = Chart::new(grammar, words.len() + 1);

    for &rule in grammar.rules_for(grammar.start()) {
        chart.add(0, State::new(rule, 0));
    }

    for k in 0..chart.len() {
        // the column grows while we walk it
        let mut idx = 0;
        while idx < chart.columns[k].len() {
            let state = chart.columns[k][idx];
            idx += 1;

            let Some(prod) = state.next_production(grammar) else {
                completer(grammar, &mut chart, k, state);
                continue;
            };
            match prod {
                Production::Nonterminal(symbol, _) => predictor(grammar, &mut chart, k, symbol),
                Production::Terminal(terminal, _) => {
                    scanner(grammar, &mut chart, k, state, terminal, words);
                },
            }
            // A nullable symbol may already have completed in this column,
            // before `state` started waiting on it.
            if grammar.can_skip(prod, state.looped) {
                chart.add(k, state.advance());
            }
        }
        trace!(column = k, states = chart.columns[k].len(), "chart column");
    }

    chart
}

fn completer(grammar: &Grammar, chart: &mut Chart<'_>, k: usize, state: State) {
    let symbol = &grammar.rule(state.rule).symbol;
    for waiting in chart.waiting_on(state.origin, symbol) {
        chart.add(k, waiting.matched(grammar));
    }
}

fn predictor(grammar: &Grammar, chart: &mut Chart<'_>, k: usize, symbol: &str) {
    for &rule in grammar.rules_for(symbol) {
        chart.add(k, State::new(rule, k));
    }
}

fn scanner(
    grammar: &Grammar,
    chart: &mut Chart<'_>,
    k: usize,
    state: State,
    terminal: &str,
    words: &[Word<'_>],
) {
    if let Some(word) = words.get(k) {
        if grammar.matches(terminal, word.text, &word.lower) {
            chart.add(k + 1, state.matched(grammar));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{Matcher, TerminalSet};
    use crate::parser::lexer::tokenize;

    fn grammar(src: &str) -> Grammar {
        let terminals = TerminalSet::new()
            .with("x", Matcher::words(&["x"]))
            .with("y", Matcher::words(&["y"]))
            .with("word", Matcher::Any);
        Grammar::new(src, terminals).unwrap()
    }

    #[test]
    fn test_accepts_sequence() {
        let g = grammar("S -> x y;");
        assert!(parse_chart(&g, &tokenize("x y")).accepts());
        assert!(!parse_chart(&g, &tokenize("y x")).accepts());
        assert!(!parse_chart(&g, &tokenize("x")).accepts());
    }

    #[test]
    fn test_ambiguous_grammar() {
        let g = grammar("S -> x; S -> S S;");
        let words = tokenize("x x x");
        let chart = parse_chart(&g, &words);
        assert!(chart.accepts());
        assert_eq!(chart.len(), 4);
    }

    #[test]
    fn test_nullable_completion() {
        let g = grammar("S -> A x A; A -> ; A -> y;");
        for input in ["x", "y x", "x y", "y x y"] {
            let chart = parse_chart(&g, &tokenize(input));
            assert!(chart.accepts(), "{input}");
        }
    }

    #[test]
    fn test_nullable_before_waiting_state() {
        // B completes empty in column 0 before S starts waiting on it
        let g = grammar("S -> A B x; A -> ; B -> A;");
        assert!(parse_chart(&g, &tokenize("x")).accepts());
    }

    #[test]
    fn test_no_duplicate_states() {
        let g = grammar("S -> x; S -> S S;");
        let chart = parse_chart(&g, &tokenize("x x x x"));
        for column in &chart.columns {
            let unique: HashSet<_> = column.iter().collect();
            assert_eq!(unique.len(), column.len());
        }
    }

    #[test]
    fn test_repetition() {
        let g = grammar("S -> x+ y*;");
        for input in ["x", "x x x", "x y", "x x y y"] {
            assert!(parse_chart(&g, &tokenize(input)).accepts(), "{input}");
        }
        for input in ["", "y", "x y x"] {
            assert!(!parse_chart(&g, &tokenize(input)).accepts(), "{input}");
        }
    }

    #[test]
    fn test_repeated_nonterminal() {
        let g = grammar("S -> P+; P -> x; P -> x y;");
        assert!(parse_chart(&g, &tokenize("x y x x y")).accepts());
        assert!(!parse_chart(&g, &tokenize("y x")).accepts());
    }

    #[test]
    fn test_repetition_chart_is_linear() {
        let g = grammar("S -> P+; P -> x; P -> word;");
        let short = parse_chart(&g, &tokenize(&"x ".repeat(100))).state_count();
        let long = parse_chart(&g, &tokenize(&"x ".repeat(1000))).state_count();
        assert!(long <= short * 11, "{short} vs {long}");
    }

    #[test]
    fn test_empty_input() {
        let g = grammar("S -> ; S -> x;");
        let chart = parse_chart(&g, &[]);
        assert!(chart.accepts());
        assert!(chart.state_count() > 0);
    }
}
