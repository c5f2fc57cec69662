use thiserror::Error;

/// 予約のドメインエラー
///
/// 入力の解析エラーとは区別される、ビジネスルール違反を表す。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    /// 更新後の日付が未来日ではない
    #[error("Reservation dates for update must be future dates")]
    DatesNotInFuture,
}
