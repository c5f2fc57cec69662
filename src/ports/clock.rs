use chrono::NaiveDateTime;

/// 現在時刻ポート
///
/// 日付変更の検証に使う「現在」をローカル時刻で返す。
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}
