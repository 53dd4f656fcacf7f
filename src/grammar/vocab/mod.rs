//! Per-locale date-phrase vocabulary.
//!
//! Every locale fills the same set of word classes; the date-phrase rules in
//! the query grammar are shared. A class a language has no word for is left
//! empty and its rules simply never match. All entries are single lowercase
//! words because the parser works on whitespace-separated words.

use super::terminals::DateOrder;

pub(crate) mod da;
pub(crate) mod de;
pub(crate) mod en;
pub(crate) mod es;
pub(crate) mod fr;
pub(crate) mod it;
pub(crate) mod ja;
pub(crate) mod ko;
pub(crate) mod nl;
pub(crate) mod pl;
pub(crate) mod pt;
pub(crate) mod ru;
pub(crate) mod sv;
pub(crate) mod zh;

/// Date-phrase words for one locale.
#[derive(Debug)]
pub struct Vocabulary {
    /// Days named relative to today ("today", "tomorrow").
    pub relative_days: &'static [&'static str],
    /// Weekday names and abbreviations.
    pub weekdays: &'static [&'static str],
    /// Month names and abbreviations.
    pub months: &'static [&'static str],
    /// Duration units ("day", "weeks").
    pub units: &'static [&'static str],
    /// "next" before a period.
    pub next: &'static [&'static str],
    /// "next" after a period ("lundi prochain").
    pub next_after: &'static [&'static str],
    /// "this" before a period.
    pub this: &'static [&'static str],
    /// "every" introducing a recurrence.
    pub every: &'static [&'static str],
    /// "other" in "every other week".
    pub other: &'static [&'static str],
    /// Articles allowed after "every" or "at" ("tous les lundis", "a las 5").
    pub articles: &'static [&'static str],
    /// One-word recurrences ("daily").
    pub recurring: &'static [&'static str],
    /// "in" before an offset ("in 3 days").
    pub within: &'static [&'static str],
    /// Word after an offset ("3 days later").
    pub later: &'static [&'static str],
    /// "at" before a time.
    pub at: &'static [&'static str],
    /// "on" before a day.
    pub on: &'static [&'static str],
    /// "starting" between a recurrence and its first day.
    pub starting: &'static [&'static str],
    /// Named times of day ("morning", "noon").
    pub times_of_day: &'static [&'static str],
    /// Standalone am/pm words.
    pub meridiem: &'static [&'static str],
    /// Words following an hour number ("o'clock", "uhr").
    pub hour_words: &'static [&'static str],
    /// Order of two- and three-part numeric dates.
    pub date_order: DateOrder,
}

impl Vocabulary {
    /// Every word class with its name, for diagnostics and tests.
    #[must_use]
    pub fn classes(&self) -> [(&'static str, &'static [&'static str]); 19] {
        [
            ("relative_day", self.relative_days),
            ("weekday", self.weekdays),
            ("month", self.months),
            ("unit", self.units),
            ("next", self.next),
            ("next_after", self.next_after),
            ("this", self.this),
            ("every", self.every),
            ("other", self.other),
            ("article", self.articles),
            ("recurring", self.recurring),
            ("within", self.within),
            ("later", self.later),
            ("at", self.at),
            ("on", self.on),
            ("starting", self.starting),
            ("time_of_day", self.times_of_day),
            ("meridiem", self.meridiem),
            ("hour_word", self.hour_words),
        ]
    }
}

#[cfg(test)]
mod tests {
    use crate::grammar::Locale;

    #[test]
    fn test_entries_are_single_lowercase_words() {
        for locale in Locale::ALL {
            for (class, words) in locale.vocabulary().classes() {
                for word in words {
                    assert!(
                        !word.chars().any(char::is_whitespace),
                        "{locale} {class}: '{word}' contains whitespace"
                    );
                    assert_eq!(
                        word.to_lowercase(),
                        *word,
                        "{locale} {class}: '{word}' is not lowercase"
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_locale_has_core_classes() {
        for locale in Locale::ALL {
            let vocab = locale.vocabulary();
            assert!(!vocab.relative_days.is_empty(), "{locale} relative days");
            assert!(!vocab.weekdays.is_empty(), "{locale} weekdays");
            assert!(!vocab.months.is_empty(), "{locale} months");
            assert!(!vocab.units.is_empty(), "{locale} units");
            assert!(!vocab.recurring.is_empty(), "{locale} recurring");
        }
    }
}
