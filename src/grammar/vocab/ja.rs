use super::Vocabulary;
use crate::grammar::terminals::DateOrder;

// Japanese is usually written without spaces; compounds that users type as
// one word ("毎週月曜日", "来週") are listed whole.
pub(crate) static VOCABULARY: Vocabulary = Vocabulary {
    relative_days: &[
        "今日", "きょう", "明日", "あした", "あす", "明後日", "あさって", "昨日", "今夜", "今晩",
        "来週", "再来週", "来月", "週末",
    ],
    weekdays: &[
        "月曜", "月曜日", "火曜", "火曜日", "水曜", "水曜日", "木曜", "木曜日", "金曜", "金曜日",
        "土曜", "土曜日", "日曜", "日曜日",
    ],
    months: &[
        "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
        "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
        "十二月",
    ],
    units: &["日", "日間", "週", "週間", "ヶ月", "か月", "カ月", "年", "時間", "分"],
    next: &["次の", "来週の"],
    next_after: &[],
    this: &["今週の", "今度の"],
    every: &["毎", "毎週"],
    other: &["隔"],
    articles: &[],
    recurring: &[
        "毎日", "毎週", "毎月", "毎年", "平日", "毎朝", "毎晩", "毎週月曜日", "毎週火曜日",
        "毎週水曜日", "毎週木曜日", "毎週金曜日", "毎週土曜日", "毎週日曜日",
    ],
    within: &[],
    later: &["後", "あと"],
    at: &["に"],
    on: &[],
    starting: &["から"],
    times_of_day: &["朝", "昼", "夕方", "夜", "正午", "深夜"],
    meridiem: &["午前", "午後"],
    hour_words: &["時"],
    date_order: DateOrder::MonthFirst,
};
