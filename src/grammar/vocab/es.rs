use super::Vocabulary;
use crate::grammar::terminals::DateOrder;

pub(crate) static VOCABULARY: Vocabulary = Vocabulary {
    relative_days: &["hoy", "mañana", "manana", "pasado-mañana", "ayer", "esta-noche"],
    weekdays: &[
        "lunes", "martes", "miércoles", "miercoles", "jueves", "viernes", "sábado", "sabado",
        "domingo", "sábados", "sabados", "domingos", "finde",
    ],
    months: &[
        "enero", "ene", "febrero", "feb", "marzo", "mar", "abril", "abr", "mayo", "may", "junio",
        "jun", "julio", "jul", "agosto", "ago", "septiembre", "setiembre", "sep", "octubre", "oct",
        "noviembre", "nov", "diciembre", "dic",
    ],
    units: &[
        "día", "dia", "días", "dias", "semana", "semanas", "mes", "meses", "año", "años", "hora",
        "horas", "minuto", "minutos",
    ],
    next: &["próximo", "próxima", "proximo", "proxima"],
    next_after: &["próximo", "próxima", "proximo", "proxima"],
    this: &["este", "esta"],
    every: &["cada", "todos", "todas"],
    other: &["otro", "otra"],
    articles: &["los", "las", "el", "la"],
    recurring: &["diario", "diariamente", "semanal", "semanalmente", "mensual", "mensualmente", "anual", "anualmente"],
    within: &["en", "dentro"],
    later: &["después", "despues"],
    at: &["a"],
    on: &["el"],
    starting: &["desde"],
    times_of_day: &["tarde", "noche", "mediodía", "mediodia", "medianoche", "madrugada"],
    meridiem: &["am", "pm"],
    hour_words: &["h", "horas"],
    date_order: DateOrder::DayFirst,
};
