use super::Vocabulary;
use crate::grammar::terminals::DateOrder;

pub(crate) static VOCABULARY: Vocabulary = Vocabulary {
    relative_days: &["today", "tod", "tomorrow", "tmr", "tmrw", "tonight", "yesterday"],
    // "sat" and "sun" are left out: too common as plain words
    weekdays: &[
        "monday", "mon", "tuesday", "tue", "tues", "wednesday", "wed", "thursday", "thu", "thur",
        "thurs", "friday", "fri", "saturday", "sunday", "weekday", "weekend",
    ],
    months: &[
        "january", "jan", "february", "feb", "march", "mar", "april", "apr", "may", "june", "jun",
        "july", "jul", "august", "aug", "september", "sep", "sept", "october", "oct", "november",
        "nov", "december", "dec",
    ],
    units: &[
        "day", "days", "week", "weeks", "month", "months", "quarter", "year", "years", "hour",
        "hours", "min", "mins", "minute", "minutes",
    ],
    next: &["next"],
    next_after: &[],
    this: &["this"],
    every: &["every", "each"],
    other: &["other"],
    articles: &[],
    recurring: &["daily", "weekly", "monthly", "yearly", "annually", "everyday", "weekdays", "weekends"],
    within: &["in"],
    later: &["later"],
    at: &["at", "@"],
    on: &["on"],
    starting: &["starting", "from"],
    times_of_day: &["morning", "noon", "midday", "afternoon", "evening", "night", "midnight", "eod"],
    meridiem: &["am", "pm", "a.m.", "p.m."],
    hour_words: &["o'clock", "oclock"],
    date_order: DateOrder::MonthFirst,
};
