//! Terminal classes: predicates over single query words.
//!
//! Grammar rules refer to terminals by lowercase name (`label_marker`,
//! `weekday`, ...). A [`TerminalSet`] maps each name to a [`Matcher`]. Marker
//! and number patterns are shared by every locale; word lists come from the
//! locale's vocabulary.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// How a two- or three-part numeric date (`12/15`, `15.12.2024`) is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// `month/day[/year]`
    MonthFirst,
    /// `day/month[/year]`
    DayFirst,
}

/// A predicate deciding whether one word belongs to a terminal class.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Matches every word.
    Any,
    /// Matches words the regex matches in full.
    Pattern(Regex),
    /// Matches words whose lowercase form is in the set.
    Words(HashSet<String>),
    /// Matches numeric dates that name a real calendar day.
    NumericDate(DateOrder),
}

impl Matcher {
    /// Build a word-list matcher. Entries are compared case-insensitively.
    #[must_use]
    pub fn words(list: &[&str]) -> Self {
        Self::Words(list.iter().map(|w| w.to_lowercase()).collect())
    }

    /// Check a word, given its original and lowercase forms.
    #[must_use]
    pub fn matches(&self, text: &str, lower: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Pattern(re) => re.is_match(text),
            Self::Words(set) => set.contains(lower),
            Self::NumericDate(order) => is_numeric_date(text, *order),
        }
    }
}

/// Named terminal classes available to a grammar.
#[derive(Debug, Clone, Default)]
pub struct TerminalSet(HashMap<String, Matcher>);

impl TerminalSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a terminal class.
    #[must_use]
    pub fn with(mut self, name: &str, matcher: Matcher) -> Self {
        self.0.insert(name.to_string(), matcher);
        self
    }

    /// Look up a terminal class by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Matcher> {
        self.0.get(name)
    }

    /// Whether a terminal class with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of terminal classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn pattern(re: &str) -> Regex {
    Regex::new(re).unwrap_or_else(|e| panic!("Invalid terminal regex {re}: {e}"))
}

// Marker patterns
pub(crate) static LABEL_MARKER: Lazy<Regex> = Lazy::new(|| pattern(r#"^@[^\s@#"]+$"#));

pub(crate) static PROJECT_MARKER: Lazy<Regex> = Lazy::new(|| pattern(r#"^#[^\s#"]+$"#));

pub(crate) static PROJECT_QUOTED: Lazy<Regex> = Lazy::new(|| pattern(r#"^#"[^"]+"$"#));

pub(crate) static PROJECT_OPEN: Lazy<Regex> = Lazy::new(|| pattern(r#"^#"[^"]*$"#));

pub(crate) static PROJECT_CLOSE: Lazy<Regex> = Lazy::new(|| pattern(r#"^[^"]*"$"#));

pub(crate) static UNQUOTED_WORD: Lazy<Regex> = Lazy::new(|| pattern(r#"^[^"]+$"#));

pub(crate) static PRIORITY_MARKER: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)^(?:p|!!)[1-4]$"));

pub(crate) static SECTION_MARKER: Lazy<Regex> = Lazy::new(|| pattern(r"^/[^\s/]+$"));

// Numbers and clock times
pub(crate) static NUMBER: Lazy<Regex> = Lazy::new(|| pattern(r"^\d{1,3}$"));

pub(crate) static DAY_NUMBER: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?i)^(?:0?[1-9]|[12]\d|3[01])(?:st|nd|rd|th|er|e|º|\.|日|号|일)?$")
});

pub(crate) static YEAR: Lazy<Regex> = Lazy::new(|| pattern(r"^(?:19|20)\d{2}(?:年|년)?$"));

pub(crate) static CLOCK_TIME: Lazy<Regex> = Lazy::new(|| {
    pattern(concat!(
        r"(?i)^(?:",
        // 17:30, 5:30pm, 17.30
        r"(?:[01]?\d|2[0-3])[:.][0-5]\d(?:am|pm|a|p)?",
        // 5pm, 11a
        r"|(?:1[0-2]|0?[1-9])(?:am|pm|a|p)",
        // 17h, 17h30
        r"|(?:[01]?\d|2[0-3])h(?:[0-5]\d)?",
        // 17時, 5点半, 3시30분
        r"|(?:[01]?\d|2[0-3])(?:時|点|시)(?:[0-5]?\d(?:分|분)?|半|반)?",
        r")$"
    ))
});

static NUMERIC_DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| pattern(r"^(\d{1,4})([-/.])(\d{1,2})(?:[-/.](\d{1,4}))?\.?$"));

static CJK_DATE: Lazy<Regex> =
    Lazy::new(|| pattern(r"^(?:(\d{4})年)?(\d{1,2})月(\d{1,2})[日号]$"));

/// Check whether `text` is a numeric date naming a real day.
///
/// ISO dates (`2024-12-15`) and year-first dates are always accepted; two-
/// and three-part dates follow `order`. Dates without a year are checked
/// against a leap year so that `2/29` is accepted.
fn is_numeric_date(text: &str, order: DateOrder) -> bool {
    if let Some(caps) = CJK_DATE.captures(text) {
        let year: i32 = caps.get(1).and_then(|y| y.as_str().parse().ok()).unwrap_or(2000);
        let month: Option<u32> = caps.get(2).and_then(|m| m.as_str().parse().ok());
        let day: Option<u32> = caps.get(3).and_then(|d| d.as_str().parse().ok());
        return matches!((month, day), (Some(m), Some(d)) if NaiveDate::from_ymd_opt(year, m, d).is_some());
    }

    let Some(caps) = NUMERIC_DATE_SHAPE.captures(text) else {
        return false;
    };
    let first = caps.get(1).map_or("", |m| m.as_str());
    let second: u32 = match caps.get(3).and_then(|m| m.as_str().parse().ok()) {
        Some(n) => n,
        None => return false,
    };
    let third = caps.get(4).map(|m| m.as_str());

    // "1.5" is a decimal, "1.5." and "1.5.2024" are dates
    if caps.get(2).map(|m| m.as_str()) == Some(".") && third.is_none() && !text.ends_with('.') {
        return false;
    }

    if first.len() == 4 {
        let (Ok(year), Some(day)) = (first.parse::<i32>(), third.and_then(|d| d.parse().ok()))
        else {
            return false;
        };
        return NaiveDate::from_ymd_opt(year, second, day).is_some();
    }

    let Ok(first) = first.parse::<u32>() else {
        return false;
    };
    let year = match third {
        None => 2000,
        Some(y) if y.len() == 2 => y.parse::<i32>().map_or(-1, |y| 2000 + y),
        Some(y) if y.len() == 4 => y.parse::<i32>().unwrap_or(-1),
        Some(_) => return false,
    };
    if year < 0 {
        return false;
    }

    let (month, day) = match order {
        DateOrder::MonthFirst => (first, second),
        DateOrder::DayFirst => (second, first),
    };
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(matcher: &Matcher, word: &str) -> bool {
        matcher.matches(word, &word.to_lowercase())
    }

    // ==============
    // Marker Tests
    // ==============

    #[test]
    fn test_label_marker() {
        let m = Matcher::Pattern(LABEL_MARKER.clone());
        assert!(check(&m, "@home"));
        assert!(check(&m, "@high-priority"));
        assert!(!check(&m, "@"));
        assert!(!check(&m, "john@example.com"));
    }

    #[test]
    fn test_project_markers() {
        assert!(PROJECT_MARKER.is_match("#Work"));
        assert!(!PROJECT_MARKER.is_match("#"));
        assert!(!PROJECT_MARKER.is_match("#\"Home"));
        assert!(PROJECT_QUOTED.is_match("#\"Home\""));
        assert!(PROJECT_OPEN.is_match("#\"Home"));
        assert!(!PROJECT_OPEN.is_match("#\"Home\""));
        assert!(PROJECT_CLOSE.is_match("Renovation\""));
        assert!(UNQUOTED_WORD.is_match("big"));
        assert!(!UNQUOTED_WORD.is_match("big\""));
    }

    #[test]
    fn test_priority_marker() {
        for word in ["p1", "P2", "p4", "!!1", "!!4"] {
            assert!(PRIORITY_MARKER.is_match(word), "{word}");
        }
        for word in ["p0", "p5", "p12", "!1", "pp1"] {
            assert!(!PRIORITY_MARKER.is_match(word), "{word}");
        }
    }

    #[test]
    fn test_section_marker() {
        assert!(SECTION_MARKER.is_match("/Errands"));
        assert!(!SECTION_MARKER.is_match("/"));
        assert!(!SECTION_MARKER.is_match("and/or"));
    }

    // =================
    // Clock Time Tests
    // =================

    #[test]
    fn test_clock_times() {
        for word in ["5pm", "5PM", "11a", "17:30", "5:30pm", "17h", "17h30", "17時", "5点半", "3시30분"] {
            assert!(CLOCK_TIME.is_match(word), "{word}");
        }
        for word in ["5", "25:00", "13pm", "17:75", "pm"] {
            assert!(!CLOCK_TIME.is_match(word), "{word}");
        }
    }

    #[test]
    fn test_day_numbers() {
        for word in ["1", "15th", "3rd", "15.", "31", "15日", "1er"] {
            assert!(DAY_NUMBER.is_match(word), "{word}");
        }
        for word in ["0", "32", "100"] {
            assert!(!DAY_NUMBER.is_match(word), "{word}");
        }
    }

    // ===================
    // Numeric Date Tests
    // ===================

    #[test]
    fn test_iso_dates() {
        assert!(is_numeric_date("2024-12-15", DateOrder::MonthFirst));
        assert!(is_numeric_date("2024/12/15", DateOrder::DayFirst));
        assert!(!is_numeric_date("2024-02-30", DateOrder::MonthFirst));
    }

    #[test]
    fn test_month_first_dates() {
        assert!(is_numeric_date("12/15", DateOrder::MonthFirst));
        assert!(is_numeric_date("2/29", DateOrder::MonthFirst));
        assert!(is_numeric_date("12/15/24", DateOrder::MonthFirst));
        assert!(!is_numeric_date("15/12", DateOrder::MonthFirst));
    }

    #[test]
    fn test_day_first_dates() {
        assert!(is_numeric_date("15/12", DateOrder::DayFirst));
        assert!(is_numeric_date("15.12.", DateOrder::DayFirst));
        assert!(is_numeric_date("15.12.2024", DateOrder::DayFirst));
        assert!(!is_numeric_date("12/31", DateOrder::DayFirst));
    }

    #[test]
    fn test_decimals_are_not_dates() {
        assert!(!is_numeric_date("1.5", DateOrder::DayFirst));
        assert!(!is_numeric_date("12", DateOrder::DayFirst));
    }

    #[test]
    fn test_cjk_dates() {
        assert!(is_numeric_date("12月15日", DateOrder::MonthFirst));
        assert!(is_numeric_date("2024年2月29日", DateOrder::MonthFirst));
        assert!(!is_numeric_date("2月30日", DateOrder::MonthFirst));
    }

    // =================
    // Word List Tests
    // =================

    #[test]
    fn test_word_list_is_case_insensitive() {
        let m = Matcher::words(&["Tomorrow", "today"]);
        assert!(check(&m, "tomorrow"));
        assert!(check(&m, "TODAY"));
        assert!(!check(&m, "yesterday"));
    }

    #[test]
    fn test_empty_word_list_matches_nothing() {
        let m = Matcher::words(&[]);
        assert!(!check(&m, "anything"));
    }

    #[test]
    fn test_terminal_set_lookup() {
        let set = TerminalSet::new().with("word", Matcher::Any);
        assert!(set.contains("word"));
        assert!(set.get("missing").is_none());
        assert_eq!(set.len(), 1);
    }
}
