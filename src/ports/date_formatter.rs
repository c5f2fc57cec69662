use chrono::NaiveDate;
use thiserror::Error;

/// 日付文字列の解析エラー
#[derive(Debug, Error)]
#[error("cannot parse {input:?} as a date ({hint})")]
pub struct DateFormatError {
    pub input: String,
    pub hint: String,
    #[source]
    pub source: chrono::ParseError,
}

/// 日付書式が不正
///
/// 確認用の日付を書式化して解析し直したとき、同じ日付に戻らない書式。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date pattern {0:?}: it must format and parse back a full calendar date")]
pub struct InvalidDatePattern(pub String);

/// 日付書式ポート
///
/// 同じ書式で解析と書式化を行う。`format` した文字列を `parse` すると同じ日付に戻る。
pub trait DateFormatter {
    /// 文字列を日付として解析する
    fn parse(&self, input: &str) -> Result<NaiveDate, DateFormatError>;

    /// 日付を文字列に書式化する
    fn format(&self, date: NaiveDate) -> String;

    /// プロンプトに表示する書式の説明（例: `dd/MM/yyyy`）
    fn pattern_hint(&self) -> String;
}
