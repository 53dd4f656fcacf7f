use super::Vocabulary;
use crate::grammar::terminals::DateOrder;

pub(crate) static VOCABULARY: Vocabulary = Vocabulary {
    relative_days: &["hoje", "amanhã", "amanha", "depois-de-amanhã", "ontem", "hoje-à-noite"],
    weekdays: &[
        "segunda", "segunda-feira", "terça", "terca", "terça-feira", "quarta", "quarta-feira",
        "quinta", "quinta-feira", "sexta", "sexta-feira", "sábado", "sabado", "domingo",
    ],
    months: &[
        "janeiro", "jan", "fevereiro", "fev", "março", "marco", "mar", "abril", "abr", "maio",
        "mai", "junho", "jun", "julho", "jul", "agosto", "ago", "setembro", "set", "outubro",
        "out", "novembro", "nov", "dezembro", "dez",
    ],
    units: &[
        "dia", "dias", "semana", "semanas", "mês", "mes", "meses", "ano", "anos", "hora", "horas",
        "minuto", "minutos",
    ],
    next: &["próximo", "próxima", "proximo", "proxima"],
    next_after: &["próximo", "próxima", "proximo", "proxima", "que-vem"],
    this: &["este", "esta", "neste", "nesta"],
    every: &["cada", "todo", "toda", "todos", "todas"],
    other: &["outro", "outra"],
    articles: &["os", "as", "o", "a"],
    recurring: &["diariamente", "diário", "diario", "semanalmente", "mensalmente", "anualmente"],
    within: &["em", "daqui"],
    later: &["depois"],
    at: &["às", "as", "à"],
    on: &["na", "no"],
    starting: &["desde"],
    times_of_day: &["manhã", "manha", "tarde", "noite", "meio-dia", "meia-noite"],
    meridiem: &[],
    hour_words: &["h", "horas"],
    date_order: DateOrder::DayFirst,
};
