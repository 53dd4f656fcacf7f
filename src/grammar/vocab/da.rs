use super::Vocabulary;
use crate::grammar::terminals::DateOrder;

// "i morgen" parses as `on` + relative day
pub(crate) static VOCABULARY: Vocabulary = Vocabulary {
    relative_days: &["idag", "imorgen", "igår", "iaften", "overmorgen", "morgen", "aften"],
    weekdays: &["mandag", "tirsdag", "onsdag", "torsdag", "fredag", "lørdag", "søndag", "weekend"],
    months: &[
        "januar", "jan", "februar", "feb", "marts", "mar", "april", "apr", "maj", "juni", "jun",
        "juli", "jul", "august", "aug", "september", "sep", "oktober", "okt", "november", "nov",
        "december", "dec",
    ],
    units: &[
        "dag", "dage", "uge", "uger", "måned", "måneder", "år", "time", "timer", "minut",
        "minutter",
    ],
    next: &["næste", "kommende"],
    next_after: &[],
    this: &["denne", "dette"],
    every: &["hver", "hvert", "alle"],
    other: &["anden", "andet"],
    articles: &[],
    recurring: &["dagligt", "daglig", "ugentligt", "månedligt", "årligt", "hverdage"],
    within: &["om"],
    later: &["senere"],
    at: &["kl", "kl.", "klokken"],
    on: &["i", "på"],
    starting: &["fra"],
    times_of_day: &["formiddag", "middag", "eftermiddag", "nat", "midnat"],
    meridiem: &[],
    hour_words: &[],
    date_order: DateOrder::DayFirst,
};
