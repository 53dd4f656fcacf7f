use super::Vocabulary;
use crate::grammar::terminals::DateOrder;

pub(crate) static VOCABULARY: Vocabulary = Vocabulary {
    relative_days: &["aujourd'hui", "aujourd’hui", "demain", "après-demain", "hier", "ce-soir"],
    weekdays: &[
        "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche", "lundis",
        "mardis", "mercredis", "jeudis", "vendredis", "samedis", "dimanches", "week-end",
    ],
    months: &[
        "janvier", "janv", "février", "fevrier", "févr", "mars", "avril", "avr", "mai", "juin",
        "juillet", "juil", "août", "aout", "septembre", "sept", "octobre", "oct", "novembre", "nov",
        "décembre", "decembre", "déc",
    ],
    units: &[
        "jour", "jours", "semaine", "semaines", "mois", "an", "ans", "année", "années", "heure",
        "heures", "minute", "minutes",
    ],
    next: &["prochain", "prochaine"],
    next_after: &["prochain", "prochaine"],
    this: &["ce", "cet", "cette"],
    every: &["chaque", "tous", "toutes"],
    other: &["autre"],
    articles: &["les", "le", "la"],
    recurring: &["quotidien", "quotidiennement", "hebdomadaire", "mensuel", "annuel"],
    within: &["dans"],
    later: &["plus-tard"],
    at: &["à"],
    on: &["le"],
    starting: &["dès", "depuis"],
    times_of_day: &["matin", "midi", "après-midi", "soir", "soirée", "nuit", "minuit"],
    meridiem: &[],
    hour_words: &["h", "heure", "heures"],
    date_order: DateOrder::DayFirst,
};
