use crate::config::DEFAULT_DATE_PATTERN;
use crate::ports::date_formatter::{
    DateFormatError, DateFormatter as DateFormatterTrait, InvalidDatePattern,
};
use chrono::NaiveDate;
use chrono::format::{Fixed, Item, Numeric, Pad, StrftimeItems};
use std::fmt::Write;

/// chronoのstrftime書式による日付書式の実装
///
/// 書式文字列のみを保持する。状態を共有しないため、同じインスタンスを何度使ってもよい。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatter {
    pattern: String,
}

impl DateFormatter {
    /// 書式を検証して作成する
    ///
    /// 確認用の日付を書式化して解析し直し、同じ日付に戻らない書式はエラーにする。
    pub fn try_new(pattern: impl Into<String>) -> Result<Self, InvalidDatePattern> {
        let pattern = pattern.into();
        let round_trips = NaiveDate::from_ymd_opt(2030, 12, 31).is_some_and(|probe| {
            let mut rendered = String::new();
            write!(rendered, "{}", probe.format(&pattern)).is_ok()
                && NaiveDate::parse_from_str(&rendered, &pattern).is_ok_and(|parsed| parsed == probe)
        });

        if !round_trips {
            return Err(InvalidDatePattern(pattern));
        }
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_PATTERN.to_string(),
        }
    }
}

impl DateFormatterTrait for DateFormatter {
    fn parse(&self, input: &str) -> Result<NaiveDate, DateFormatError> {
        NaiveDate::parse_from_str(input.trim(), &self.pattern).map_err(|source| DateFormatError {
            input: input.to_string(),
            hint: self.pattern_hint(),
            source,
        })
    }

    fn format(&self, date: NaiveDate) -> String {
        date.format(&self.pattern).to_string()
    }

    fn pattern_hint(&self) -> String {
        StrftimeItems::new(&self.pattern)
            .map(|item| item_hint(&item))
            .collect()
    }
}

/// 書式の要素を人が読める表記に変換する（例: `%d` → `dd`、`%b` → `MMM`）
///
/// 表記を持たない指定子は `?` になる。
fn item_hint(item: &Item<'_>) -> String {
    match item {
        Item::Literal(text) | Item::Space(text) => (*text).to_string(),
        Item::OwnedLiteral(text) | Item::OwnedSpace(text) => text.to_string(),
        Item::Numeric(numeric, pad) => {
            let zero_padded = matches!(pad, Pad::Zero);
            let hint = match numeric {
                Numeric::Day if zero_padded => "dd",
                Numeric::Day => "d",
                Numeric::Month if zero_padded => "MM",
                Numeric::Month => "M",
                Numeric::Year | Numeric::IsoYear => "yyyy",
                Numeric::YearMod100 | Numeric::IsoYearMod100 => "yy",
                Numeric::Ordinal => "DDD",
                _ => "?",
            };
            hint.to_string()
        }
        Item::Fixed(fixed) => {
            let hint = match fixed {
                Fixed::ShortMonthName => "MMM",
                Fixed::LongMonthName => "MMMM",
                Fixed::ShortWeekdayName => "EEE",
                Fixed::LongWeekdayName => "EEEE",
                _ => "?",
            };
            hint.to_string()
        }
        _ => String::new(),
    }
}
