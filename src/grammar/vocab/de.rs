use super::Vocabulary;
use crate::grammar::terminals::DateOrder;

pub(crate) static VOCABULARY: Vocabulary = Vocabulary {
    relative_days: &["heute", "morgen", "übermorgen", "gestern", "vorgestern", "heute-abend"],
    weekdays: &[
        "montag", "dienstag", "mittwoch", "donnerstag", "freitag", "samstag", "sonnabend",
        "sonntag", "montags", "dienstags", "mittwochs", "donnerstags", "freitags", "samstags",
        "sonntags", "wochenende",
    ],
    months: &[
        "januar", "jan", "jänner", "februar", "feb", "märz", "mär", "april", "apr", "mai", "juni",
        "jun", "juli", "jul", "august", "aug", "september", "sep", "sept", "oktober", "okt",
        "november", "nov", "dezember", "dez",
    ],
    units: &[
        "tag", "tage", "tagen", "woche", "wochen", "monat", "monate", "monaten", "jahr", "jahre",
        "jahren", "stunde", "stunden", "minute", "minuten",
    ],
    next: &["nächsten", "nächste", "nächster", "nächstes", "kommenden", "kommende", "kommender"],
    next_after: &[],
    this: &["diesen", "diese", "dieser", "dieses"],
    every: &["jeden", "jede", "jeder", "jedes", "alle"],
    other: &["zweite", "zweiten", "zweiter"],
    articles: &[],
    recurring: &["täglich", "wöchentlich", "monatlich", "jährlich", "werktags", "wochentags"],
    within: &["in"],
    later: &["später"],
    at: &["um"],
    on: &["am"],
    starting: &["ab"],
    times_of_day: &["morgens", "vormittags", "mittags", "nachmittags", "abends", "nachts", "mittag", "abend"],
    meridiem: &[],
    hour_words: &["uhr"],
    date_order: DateOrder::DayFirst,
};
