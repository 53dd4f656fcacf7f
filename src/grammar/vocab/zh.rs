use super::Vocabulary;
use crate::grammar::terminals::DateOrder;

// Covers simplified and traditional forms.
pub(crate) static VOCABULARY: Vocabulary = Vocabulary {
    relative_days: &[
        "今天", "明天", "后天", "後天", "昨天", "今晚", "明晚", "下周", "下週", "下个月", "下個月",
        "周末", "週末",
    ],
    weekdays: &[
        "周一", "周二", "周三", "周四", "周五", "周六", "周日", "週一", "週二", "週三", "週四",
        "週五", "週六", "週日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六",
        "星期日", "星期天", "礼拜一", "礼拜天", "下周一", "下周五",
    ],
    months: &[
        "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
        "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
        "十二月",
    ],
    units: &["天", "日", "周", "週", "星期", "个月", "個月", "年", "小时", "小時", "分钟", "分鐘"],
    next: &["下", "下个", "下個"],
    next_after: &[],
    this: &["这", "这个", "這", "這個", "本"],
    every: &["每", "每个", "每個"],
    other: &["隔"],
    articles: &[],
    recurring: &["每天", "每日", "每周", "每週", "每月", "每年", "工作日", "每周一", "每周五"],
    within: &[],
    later: &["后", "後", "以后", "以後"],
    at: &["在"],
    on: &[],
    starting: &["从", "從"],
    times_of_day: &["早上", "上午", "中午", "下午", "晚上", "傍晚"],
    meridiem: &["上午", "下午"],
    hour_words: &["点", "點"],
    date_order: DateOrder::MonthFirst,
};
