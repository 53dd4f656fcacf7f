//! The built-in query grammar and its terminal classes.

use super::terminals::{
    Matcher, TerminalSet, CLOCK_TIME, DAY_NUMBER, LABEL_MARKER, NUMBER, PRIORITY_MARKER,
    PROJECT_CLOSE, PROJECT_MARKER, PROJECT_OPEN, PROJECT_QUOTED, SECTION_MARKER, UNQUOTED_WORD,
    YEAR,
};
use super::vocab::Vocabulary;

/// Query grammar shared by every locale. Only the word lists behind the
/// lowercase date-phrase terminals change per locale.
///
/// `Item` alternatives are listed from most to least specific; the parser
/// tries them in this order, so a word is only content when nothing else
/// accepts it. Sequences use repetition rather than recursion, so parse
/// trees stay shallow however long the query is.
pub(super) const QUERY_GRAMMAR: &str = r"
Query -> Item+;

Item -> Label;
Item -> Project;
Item -> Priority;
Item -> Section;
Item -> Date;
Item -> Content;

// Markers
Label[token: label] -> label_marker;

Project[token: project] -> project_marker;
Project[token: project] -> project_quoted;
Project[token: project] -> project_open unquoted_word* project_close;

Priority[token: priority] -> priority_marker;

Section[token: section] -> section_marker;

Date[token: date] -> DatePhrase;

Content[token: content] -> word;

// Date phrases
DatePhrase -> Day;
DatePhrase -> Day TimeClause;
DatePhrase -> Day time_of_day;
DatePhrase -> TimeClause Day;
DatePhrase -> TimeClause;
DatePhrase -> this time_of_day;
DatePhrase -> Recurrence;
DatePhrase -> Recurrence TimeClause;
DatePhrase -> Recurrence starting Day;

Day -> on DayCore;
Day -> DayCore;

DayCore -> relative_day;
DayCore -> weekday;
DayCore -> next Period;
DayCore -> Period next_after;
DayCore -> this Period;
DayCore -> within number unit;
DayCore -> number unit later;
DayCore -> CalendarDate;

CalendarDate -> month day_number;
CalendarDate -> month day_number year;
CalendarDate -> day_number month;
CalendarDate -> day_number month year;
CalendarDate -> numeric_date;

Period -> weekday;
Period -> unit;
Period -> month;

Recurrence -> recurring;
Recurrence -> every Period;
Recurrence -> every article Period;
Recurrence -> every number unit;
Recurrence -> every other unit;
Recurrence -> every day_number;

// Times
TimeClause -> at Time;
TimeClause -> at article Time;
TimeClause -> at number;
TimeClause -> at time_of_day;
TimeClause -> Time;

Time -> clock_time;
Time -> number meridiem;
Time -> number hour_word;
Time -> meridiem clock_time;
Time -> meridiem number hour_word;
";

/// Terminal classes for the query grammar, with `vocab` supplying the
/// date-phrase word lists.
pub(super) fn terminals(vocab: &Vocabulary) -> TerminalSet {
    let mut set = TerminalSet::new()
        .with("word", Matcher::Any)
        .with("label_marker", Matcher::Pattern(LABEL_MARKER.clone()))
        .with("project_marker", Matcher::Pattern(PROJECT_MARKER.clone()))
        .with("project_quoted", Matcher::Pattern(PROJECT_QUOTED.clone()))
        .with("project_open", Matcher::Pattern(PROJECT_OPEN.clone()))
        .with("project_close", Matcher::Pattern(PROJECT_CLOSE.clone()))
        .with("unquoted_word", Matcher::Pattern(UNQUOTED_WORD.clone()))
        .with("priority_marker", Matcher::Pattern(PRIORITY_MARKER.clone()))
        .with("section_marker", Matcher::Pattern(SECTION_MARKER.clone()))
        .with("number", Matcher::Pattern(NUMBER.clone()))
        .with("day_number", Matcher::Pattern(DAY_NUMBER.clone()))
        .with("year", Matcher::Pattern(YEAR.clone()))
        .with("clock_time", Matcher::Pattern(CLOCK_TIME.clone()))
        .with("numeric_date", Matcher::NumericDate(vocab.date_order));

    for (name, words) in vocab.classes() {
        set = set.with(name, Matcher::words(words));
    }
    set
}
