use super::Vocabulary;
use crate::grammar::terminals::DateOrder;

pub(crate) static VOCABULARY: Vocabulary = Vocabulary {
    relative_days: &["сегодня", "завтра", "послезавтра", "вчера"],
    weekdays: &[
        "понедельник", "вторник", "среда", "среду", "четверг", "пятница", "пятницу", "суббота",
        "субботу", "воскресенье", "пн", "вт", "ср", "чт", "пт", "сб", "вс", "выходные",
    ],
    months: &[
        "январь", "января", "февраль", "февраля", "март", "марта", "апрель", "апреля", "май",
        "мая", "июнь", "июня", "июль", "июля", "август", "августа", "сентябрь", "сентября",
        "октябрь", "октября", "ноябрь", "ноября", "декабрь", "декабря",
    ],
    units: &[
        "день", "дня", "дней", "неделя", "недели", "неделю", "недель", "месяц", "месяца",
        "месяцев", "год", "года", "лет", "час", "часа", "часов", "минута", "минуты", "минут",
    ],
    next: &["следующий", "следующая", "следующую", "следующее", "следующей", "следующем"],
    next_after: &[],
    this: &["этот", "эта", "эту", "это", "этой"],
    every: &["каждый", "каждая", "каждую", "каждое", "каждые"],
    other: &[],
    articles: &[],
    recurring: &["ежедневно", "еженедельно", "ежемесячно", "ежегодно", "по-будням"],
    within: &["через"],
    later: &["спустя"],
    at: &["в"],
    on: &["в", "во"],
    starting: &["с", "начиная"],
    times_of_day: &["утром", "днём", "днем", "вечером", "ночью", "полдень", "полночь"],
    meridiem: &[],
    hour_words: &["час", "часа", "часов"],
    date_order: DateOrder::DayFirst,
};
