use super::Vocabulary;
use crate::grammar::terminals::DateOrder;

pub(crate) static VOCABULARY: Vocabulary = Vocabulary {
    relative_days: &["vandaag", "morgen", "overmorgen", "gisteren", "vanavond", "vannacht"],
    weekdays: &[
        "maandag", "dinsdag", "woensdag", "donderdag", "vrijdag", "zaterdag", "zondag", "weekend",
    ],
    months: &[
        "januari", "jan", "februari", "feb", "maart", "mrt", "april", "apr", "mei", "juni", "jun",
        "juli", "jul", "augustus", "aug", "september", "sep", "sept", "oktober", "okt", "november",
        "nov", "december", "dec",
    ],
    units: &[
        "dag", "dagen", "week", "weken", "maand", "maanden", "jaar", "jaren", "uur", "uren",
        "minuut", "minuten",
    ],
    next: &["volgende", "volgend", "komende", "komend"],
    next_after: &[],
    this: &["deze", "dit"],
    every: &["elke", "iedere", "elk", "ieder"],
    other: &["andere"],
    articles: &[],
    recurring: &["dagelijks", "wekelijks", "maandelijks", "jaarlijks", "werkdagen"],
    within: &["over", "binnen"],
    later: &["later"],
    at: &["om"],
    on: &["op"],
    starting: &["vanaf"],
    times_of_day: &["ochtend", "middag", "avond", "nacht", "middernacht"],
    meridiem: &[],
    hour_words: &["uur"],
    date_order: DateOrder::DayFirst,
};
