use super::Vocabulary;
use crate::grammar::terminals::DateOrder;

pub(crate) static VOCABULARY: Vocabulary = Vocabulary {
    relative_days: &["오늘", "내일", "모레", "어제", "오늘밤", "내일밤", "주말"],
    weekdays: &[
        "월요일", "화요일", "수요일", "목요일", "금요일", "토요일", "일요일", "월요일에",
        "화요일에", "수요일에", "목요일에", "금요일에", "토요일에", "일요일에",
    ],
    months: &["1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월", "12월"],
    units: &["일", "주", "주일", "개월", "달", "년", "시간", "분"],
    next: &["다음", "다음주"],
    next_after: &[],
    this: &["이번", "이번주"],
    every: &["매", "매주"],
    other: &["격"],
    articles: &[],
    recurring: &["매일", "매주", "매월", "매달", "매년", "평일"],
    within: &[],
    later: &["후", "후에", "뒤"],
    at: &[],
    on: &[],
    starting: &["부터"],
    times_of_day: &["아침", "점심", "오후", "저녁", "밤", "정오", "자정"],
    meridiem: &["오전", "오후"],
    hour_words: &["시"],
    date_order: DateOrder::MonthFirst,
};
