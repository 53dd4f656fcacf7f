use super::Vocabulary;
use crate::grammar::terminals::DateOrder;

// "i morgon" parses as `on` + relative day
pub(crate) static VOCABULARY: Vocabulary = Vocabulary {
    relative_days: &["idag", "imorgon", "igår", "ikväll", "övermorgon", "morgon", "kväll"],
    weekdays: &["måndag", "tisdag", "onsdag", "torsdag", "fredag", "lördag", "söndag", "helgen"],
    months: &[
        "januari", "jan", "februari", "feb", "mars", "mar", "april", "apr", "maj", "juni", "jun",
        "juli", "jul", "augusti", "aug", "september", "sep", "oktober", "okt", "november", "nov",
        "december", "dec",
    ],
    units: &[
        "dag", "dagar", "vecka", "veckor", "månad", "månader", "år", "timme", "timmar", "minut",
        "minuter",
    ],
    next: &["nästa", "kommande"],
    next_after: &[],
    this: &["denna", "detta", "den", "det"],
    every: &["varje", "var", "vart"],
    other: &["annan", "annat", "andra"],
    articles: &[],
    recurring: &["dagligen", "veckovis", "månadsvis", "årligen", "vardagar"],
    within: &["om"],
    later: &["senare"],
    at: &["kl", "kl.", "klockan"],
    on: &["på", "i"],
    starting: &["från"],
    times_of_day: &["förmiddag", "eftermiddag", "natt", "midnatt", "lunch"],
    meridiem: &[],
    hour_words: &[],
    date_order: DateOrder::DayFirst,
};
