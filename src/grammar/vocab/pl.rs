use super::Vocabulary;
use crate::grammar::terminals::DateOrder;

pub(crate) static VOCABULARY: Vocabulary = Vocabulary {
    relative_days: &["dziś", "dzis", "dzisiaj", "jutro", "pojutrze", "wczoraj"],
    weekdays: &[
        "poniedziałek", "poniedzialek", "wtorek", "środa", "środę", "sroda", "czwartek", "piątek",
        "piatek", "sobota", "sobotę", "niedziela", "niedzielę", "weekend",
    ],
    months: &[
        "styczeń", "stycznia", "luty", "lutego", "marzec", "marca", "kwiecień", "kwietnia", "maj",
        "maja", "czerwiec", "czerwca", "lipiec", "lipca", "sierpień", "sierpnia", "wrzesień",
        "września", "październik", "października", "listopad", "listopada", "grudzień", "grudnia",
    ],
    units: &[
        "dzień", "dni", "tydzień", "tygodnie", "tygodni", "miesiąc", "miesiące", "miesięcy", "rok",
        "lata", "lat", "godzina", "godziny", "godzin", "minuta", "minuty", "minut",
    ],
    next: &["następny", "następna", "następne", "przyszły", "przyszła", "przyszłe"],
    next_after: &[],
    this: &["ten", "ta", "to", "w-ten"],
    every: &["co", "każdy", "każda", "każde"],
    other: &["drugi", "drugą", "drugie"],
    articles: &[],
    recurring: &["codziennie", "tygodniowo", "miesięcznie", "rocznie", "corocznie"],
    within: &["za"],
    later: &["później"],
    at: &["o"],
    on: &["w", "we"],
    starting: &["od"],
    times_of_day: &["rano", "południe", "popołudniu", "wieczorem", "wieczór", "nocą", "północ"],
    meridiem: &[],
    hour_words: &[],
    date_order: DateOrder::DayFirst,
};
