/// 日付書式を指定する環境変数
pub const DATE_PATTERN_ENV: &str = "RESERVATION_DATE_PATTERN";

/// 既定の日付書式（dd/MM/yyyy）
pub const DEFAULT_DATE_PATTERN: &str = "%d/%m/%Y";

/// 既定のログフィルタ
///
/// 通常の実行（予約の作成・変更・拒否、入力エラー）は警告未満で記録するため、
/// 既定ではプロンプトの間にログが出力されない。
pub const DEFAULT_LOG_FILTER: &str = "hotel_reservation=warn";

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// chronoのstrftime形式の日付書式
    pub date_pattern: String,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// 未設定または空白のみの値は既定値に置き換える。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let date_pattern = lookup(DATE_PATTERN_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_DATE_PATTERN.to_string());

        Self { date_pattern }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
        }
    }
}
