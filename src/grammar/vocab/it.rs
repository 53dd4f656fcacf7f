use super::Vocabulary;
use crate::grammar::terminals::DateOrder;

pub(crate) static VOCABULARY: Vocabulary = Vocabulary {
    relative_days: &["oggi", "domani", "dopodomani", "ieri", "stasera", "stanotte"],
    weekdays: &[
        "lunedì", "lunedi", "martedì", "martedi", "mercoledì", "mercoledi", "giovedì", "giovedi",
        "venerdì", "venerdi", "sabato", "domenica", "weekend",
    ],
    months: &[
        "gennaio", "gen", "febbraio", "feb", "marzo", "mar", "aprile", "apr", "maggio", "mag",
        "giugno", "giu", "luglio", "lug", "agosto", "ago", "settembre", "set", "ottobre", "ott",
        "novembre", "nov", "dicembre", "dic",
    ],
    units: &[
        "giorno", "giorni", "settimana", "settimane", "mese", "mesi", "anno", "anni", "ora", "ore",
        "minuto", "minuti",
    ],
    next: &["prossimo", "prossima"],
    next_after: &["prossimo", "prossima"],
    this: &["questo", "questa"],
    every: &["ogni"],
    other: &["altro", "altra"],
    articles: &["il", "la", "i", "le"],
    recurring: &["quotidiano", "giornaliero", "settimanale", "mensile", "annuale"],
    within: &["tra", "fra"],
    later: &["dopo"],
    at: &["alle", "all'", "a"],
    on: &[],
    starting: &["da", "dal", "dalla"],
    times_of_day: &["mattina", "mattino", "pomeriggio", "sera", "notte", "mezzogiorno", "mezzanotte"],
    meridiem: &[],
    hour_words: &[],
    date_order: DateOrder::DayFirst,
};
