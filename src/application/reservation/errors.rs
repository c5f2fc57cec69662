use crate::domain::ReservationError;
use crate::ports::{DateFormatError, InputError, InvalidDatePattern};
use thiserror::Error;

/// 予約アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum ReservationApplicationError {
    /// 設定が不正（日付書式など）
    #[error("Invalid configuration")]
    Config(#[from] InvalidDatePattern),

    /// 入力の読み取りに失敗した（整数でない、入力の終端など）
    #[error("Failed to read input")]
    Input(#[from] InputError),

    /// 日付文字列の解析に失敗した
    #[error("Failed to read date")]
    DateFormat(#[from] DateFormatError),

    /// ドメイン層のエラー（ビジネスルール違反）
    #[error(transparent)]
    Domain(#[from] ReservationError),

    /// 結果の出力に失敗した
    #[error("Failed to write output")]
    Output(#[source] std::io::Error),
}

impl ReservationApplicationError {
    /// ビジネスルール違反によるエラーか
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, ReservationApplicationError>;
