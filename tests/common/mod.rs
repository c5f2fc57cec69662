#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

/// テスト用の日付を作成（日/月/年の順）
pub fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// テストで固定する現在時刻
///
/// 2026-10-19 14:30（ローカル時刻）
pub fn fixed_now() -> NaiveDateTime {
    date(19, 10, 2026)
        .and_hms_opt(14, 30, 0)
        .expect("valid test time")
}
