//! Parse trees read back out of a finished chart.
//!
//! Completed chart states are indexed by the column they started in and the
//! symbol they built. Trees are built top-down from the start symbol, and
//! whenever a production can be filled in more than one way the alternatives
//! are tried in a fixed order:
//!
//! 1. rule declaration order, then
//! 2. longer span first, then
//! 3. for a repeated production, one more match before moving on.
//!
//! [`Forest::trees`] enumerates trees in that order up to a limit, and
//! [`Forest::first_tree`] is its first element. Every memo entry holds at
//! most `limit` alternatives, and alternatives share their subtrees and
//! child-list tails, so the work done is bounded by the chart size times the
//! limit.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use super::earley::Chart;
use super::lexer::Word;
use crate::grammar::{Grammar, Production, RuleId};

/// A constituent built by one rule over a word span. Terminal matches are
/// not stored; they are implied by the rule and span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParseTree {
    pub rule: RuleId,
    pub span: (usize, usize),
    pub children: Vec<Rc<ParseTree>>,
}

/// The children of a partly filled rule, first child first. Alternatives
/// that end the same way share the same tail.
type Fill = Option<Rc<Link>>;

#[derive(Debug)]
struct Link {
    head: Rc<ParseTree>,
    tail: Fill,
}

impl Drop for Link {
    // unlink the unshared part of the chain one link at a time
    fn drop(&mut self) {
        let mut tail = self.tail.take();
        while let Some(link) = tail {
            match Rc::try_unwrap(link) {
                Ok(mut link) => tail = link.tail.take(),
                Err(_) => break,
            }
        }
    }
}

fn cons(head: Option<&Rc<ParseTree>>, tail: &Fill) -> Fill {
    match head {
        Some(head) => Some(Rc::new(Link {
            head: Rc::clone(head),
            tail: tail.clone(),
        })),
        None => tail.clone(),
    }
}

fn children(fill: &Fill) -> Vec<Rc<ParseTree>> {
    let mut out = Vec::new();
    let mut link = fill.as_deref();
    while let Some(l) = link {
        out.push(Rc::clone(&l.head));
        link = l.tail.as_deref();
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Completed {
    rule: RuleId,
    end: usize,
}

/// One way to match a single production: where it ends, and the subtrees it
/// may contribute (`None` for a terminal).
type Step = (usize, Vec<Option<Rc<ParseTree>>>);

type BranchKey = (RuleId, usize, usize);
type FillKey = (RuleId, usize, usize, usize, bool);

struct Enumeration {
    limit: usize,
    branches: HashMap<BranchKey, Rc<[Rc<ParseTree>]>>,
    fills: HashMap<FillKey, Rc<[Fill]>>,
    active: HashSet<BranchKey>,
}

impl Enumeration {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            branches: HashMap::new(),
            fills: HashMap::new(),
            active: HashSet::new(),
        }
    }

    /// Append `heads x tails` to `out`. Returns whether `out` is full.
    fn extend(&self, out: &mut Vec<Fill>, heads: &[Option<Rc<ParseTree>>], tails: &[Fill]) -> bool {
        for head in heads {
            for tail in tails {
                if out.len() >= self.limit {
                    return true;
                }
                out.push(cons(head.as_ref(), tail));
            }
        }
        out.len() >= self.limit
    }
}

#[derive(Debug)]
pub(crate) struct Forest<'a> {
    grammar: &'a Grammar,
    words: &'a [Word<'a>],
    by_origin: Vec<HashMap<&'a str, Vec<Completed>>>,
}

impl<'a> Forest<'a> {
    pub fn new(grammar: &'a Grammar, words: &'a [Word<'a>], chart: &Chart<'_>) -> Self {
        let mut by_origin: Vec<HashMap<&'a str, Vec<Completed>>> =
            vec![HashMap::new(); words.len() + 1];
        for (end, state) in chart.completed() {
            let symbol = grammar.rule(state.rule).symbol.as_str();
            by_origin[state.origin]
                .entry(symbol)
                .or_default()
                .push(Completed {
                    rule: state.rule,
                    end,
                });
        }
        for list in by_origin.iter_mut().flat_map(HashMap::values_mut) {
            list.sort_by_key(|c| (c.rule, Reverse(c.end)));
            list.dedup();
        }

        Self {
            grammar,
            words,
            by_origin,
        }
    }

    /// Number of completed constituents.
    pub fn len(&self) -> usize {
        self.by_origin
            .iter()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum()
    }

    /// Constituents of `symbol` starting at `start` and ending no later than
    /// `max_end`, in enumeration order.
    fn constituents(&self, symbol: &str, start: usize, max_end: usize) -> Vec<Completed> {
        self.by_origin
            .get(start)
            .and_then(|by_symbol| by_symbol.get(symbol))
            .map(|list| list.iter().copied().filter(|c| c.end <= max_end).collect())
            .unwrap_or_default()
    }

    fn scans(&self, terminal: &str, pos: usize, end: usize) -> bool {
        pos < end
            && self
                .words
                .get(pos)
                .is_some_and(|w| self.grammar.matches(terminal, w.text, &w.lower))
    }

    /// The first complete tree in enumeration order.
    pub fn first_tree(&self) -> Option<Rc<ParseTree>> {
        self.trees(1).into_iter().next()
    }

    /// Up to `limit` complete trees, in enumeration order.
    pub fn trees(&self, limit: usize) -> Vec<Rc<ParseTree>> {
        let n = self.words.len();
        let mut memo = Enumeration::new(limit);
        let mut out = Vec::new();
        for root in self.constituents(self.grammar.start(), 0, n) {
            if root.end != n {
                continue;
            }
            for tree in self.branches(root.rule, 0, n, &mut memo).iter() {
                if out.len() >= limit {
                    return out;
                }
                out.push(Rc::clone(tree));
            }
        }
        out
    }

    fn branches(
        &self,
        rule: RuleId,
        start: usize,
        end: usize,
        memo: &mut Enumeration,
    ) -> Rc<[Rc<ParseTree>]> {
        let key = (rule, start, end);
        if let Some(trees) = memo.branches.get(&key) {
            return Rc::clone(trees);
        }
        if !memo.active.insert(key) {
            return Rc::from(Vec::new());
        }
        let trees: Rc<[Rc<ParseTree>]> = self
            .fills(rule, 0, start, end, false, memo)
            .iter()
            .map(|fill| {
                Rc::new(ParseTree {
                    rule,
                    span: (start, end),
                    children: children(fill),
                })
            })
            .collect();
        memo.active.remove(&key);
        memo.branches.insert(key, Rc::clone(&trees));
        trees
    }

    /// Ways to fill productions `idx..` of `rule` over `pos..end`. `looped`
    /// says production `idx` is repeated and has already matched.
    fn fills(
        &self,
        rule: RuleId,
        idx: usize,
        pos: usize,
        end: usize,
        looped: bool,
        memo: &mut Enumeration,
    ) -> Rc<[Fill]> {
        let key = (rule, idx, pos, end, looped);
        if let Some(fills) = memo.fills.get(&key) {
            return Rc::clone(fills);
        }

        let fills: Rc<[Fill]> = match self.grammar.rule(rule).productions.get(idx) {
            None if pos == end => Rc::from(vec![None]),
            None => Rc::from(Vec::new()),
            Some(prod) if prod.repeat().is_repeated() => {
                // Fill the looped entries right to left so each continuation
                // is memoized before it is needed.
                for q in (pos + 1..=end).rev() {
                    if !memo.fills.contains_key(&(rule, idx, q, end, true)) {
                        let looped_fills = self.repeated(rule, idx, prod, q, end, true, memo);
                        memo.fills.insert((rule, idx, q, end, true), looped_fills);
                    }
                }
                self.repeated(rule, idx, prod, pos, end, looped, memo)
            },
            Some(prod) => {
                let mut out = Vec::new();
                for (next, heads) in self.steps(prod, pos, end, memo) {
                    let tails = self.fills(rule, idx + 1, next, end, false, memo);
                    if memo.extend(&mut out, &heads, &tails) {
                        break;
                    }
                }
                Rc::from(out)
            },
        };

        memo.fills.insert(key, Rc::clone(&fills));
        fills
    }

    #[allow(clippy::too_many_arguments)]
    fn repeated(
        &self,
        rule: RuleId,
        idx: usize,
        prod: &Production,
        pos: usize,
        end: usize,
        looped: bool,
        memo: &mut Enumeration,
    ) -> Rc<[Fill]> {
        let mut out = Vec::new();
        let mut full = false;
        for (next, heads) in self.steps(prod, pos, end, memo) {
            if next == pos {
                continue;
            }
            let tails = self.fills(rule, idx, next, end, true, memo);
            if memo.extend(&mut out, &heads, &tails) {
                full = true;
                break;
            }
        }
        if !full && self.grammar.can_skip(prod, looped) {
            let tails = self.fills(rule, idx + 1, pos, end, false, memo);
            memo.extend(&mut out, &[None], &tails);
        }
        Rc::from(out)
    }

    /// Every way to match `prod` once at `pos`, in enumeration order.
    fn steps(&self, prod: &Production, pos: usize, end: usize, memo: &mut Enumeration) -> Vec<Step> {
        match prod {
            Production::Terminal(terminal, _) => {
                if self.scans(terminal, pos, end) {
                    vec![(pos + 1, vec![None])]
                } else {
                    Vec::new()
                }
            },
            Production::Nonterminal(symbol, _) => self
                .constituents(symbol, pos, end)
                .into_iter()
                .filter_map(|child| {
                    let heads = self.branches(child.rule, pos, child.end, memo);
                    (!heads.is_empty()).then(|| (child.end, heads.iter().cloned().map(Some).collect()))
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{Matcher, TerminalSet};
    use crate::parser::earley::parse_chart;
    use crate::parser::lexer::tokenize;

    fn grammar(src: &str) -> Grammar {
        let terminals = TerminalSet::new()
            .with("x", Matcher::words(&["x"]))
            .with("y", Matcher::words(&["y"]))
            .with("word", Matcher::Any);
        Grammar::new(src, terminals).unwrap()
    }

    fn spans(tree: &ParseTree) -> Vec<(usize, usize)> {
        tree.children.iter().map(|c| c.span).collect()
    }

    #[test]
    fn test_first_tree_prefers_earlier_rule() {
        // "x" is both an A and a B; A is declared first
        let g = grammar("S -> T; T -> A; T -> B; A -> x; B -> word;");
        let words = tokenize("x");
        let chart = parse_chart(&g, &words);
        let forest = Forest::new(&g, &words, &chart);
        let tree = forest.first_tree().unwrap();
        let t = &tree.children[0];
        assert_eq!(g.rule(t.rule).to_string(), "T -> A;");
    }

    #[test]
    fn test_first_tree_prefers_longer_span() {
        let g = grammar("S -> P; S -> P S; P -> x; P -> x y; P -> y;");
        let words = tokenize("x y");
        let chart = parse_chart(&g, &words);
        let forest = Forest::new(&g, &words, &chart);
        let tree = forest.first_tree().unwrap();
        // S -> P (rule 0) over the whole input with P -> x y
        assert_eq!(tree.rule, 0);
        assert_eq!(spans(&tree), vec![(0, 2)]);
    }

    #[test]
    fn test_trees_enumerates_all_in_order() {
        let g = grammar("S -> x; S -> S S;");
        let words = tokenize("x x x");
        let chart = parse_chart(&g, &words);
        let forest = Forest::new(&g, &words, &chart);
        let trees = forest.trees(10);
        assert_eq!(trees.len(), 2);
        // S -> x is declared first, so the short left child wins
        assert_eq!(spans(&trees[0]), vec![(0, 1), (1, 3)]);
        assert_eq!(spans(&trees[1]), vec![(0, 2), (2, 3)]);
        assert_eq!(forest.first_tree().as_ref(), trees.first());
    }

    #[test]
    fn test_trees_respects_limit() {
        let g = grammar("S -> x; S -> S S;");
        let words = tokenize("x x x x x x");
        let chart = parse_chart(&g, &words);
        let forest = Forest::new(&g, &words, &chart);
        let all = forest.trees(1000);
        // Catalan(5)
        assert_eq!(all.len(), 42);
        let capped = forest.trees(5);
        assert_eq!(capped.len(), 5);
        assert_eq!(&all[..5], &capped[..]);
        assert_eq!(forest.first_tree().as_ref(), all.first());
    }

    #[test]
    fn test_no_tree_for_rejected_input() {
        let g = grammar("S -> x y;");
        let words = tokenize("y y");
        let chart = parse_chart(&g, &words);
        let forest = Forest::new(&g, &words, &chart);
        assert!(forest.first_tree().is_none());
        assert!(forest.trees(8).is_empty());
    }

    #[test]
    fn test_repetition_children_are_flat() {
        let g = grammar("S -> P+; P -> x y; P -> x; P -> y;");
        let words = tokenize("x y x x");
        let chart = parse_chart(&g, &words);
        let forest = Forest::new(&g, &words, &chart);
        let tree = forest.first_tree().unwrap();
        assert_eq!(spans(&tree), vec![(0, 2), (2, 3), (3, 4)]);

        let trees = forest.trees(10);
        assert_eq!(trees.len(), 2);
        assert_eq!(spans(&trees[1]), vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn test_repeated_terminals_leave_no_children() {
        let g = grammar("S -> x y* x;");
        let words = tokenize("x y y y x");
        let chart = parse_chart(&g, &words);
        let forest = Forest::new(&g, &words, &chart);
        let tree = forest.first_tree().unwrap();
        assert_eq!(tree.span, (0, 5));
        assert!(tree.children.is_empty());
    }

    #[test]
    fn test_long_repetition_enumerates_within_limit() {
        let g = grammar("S -> P+; P -> x; P -> word;");
        let input = "x ".repeat(3000);
        let words = tokenize(&input);
        let chart = parse_chart(&g, &words);
        let forest = Forest::new(&g, &words, &chart);
        let trees = forest.trees(4);
        assert_eq!(trees.len(), 4);
        assert_eq!(trees[0].children.len(), 3000);
        // only the last words differ between the first few trees
        assert_eq!(trees[0].children[..2998], trees[1].children[..2998]);
    }

    #[test]
    fn test_nullable_children() {
        let g = grammar("S -> A x A; A -> ; A -> y;");
        let words = tokenize("x y");
        let chart = parse_chart(&g, &words);
        let forest = Forest::new(&g, &words, &chart);
        let tree = forest.first_tree().unwrap();
        assert_eq!(spans(&tree), vec![(0, 0), (1, 2)]);
    }
}
