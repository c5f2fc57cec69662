use thiserror::Error;

/// 入力読み取りのエラー
#[derive(Debug, Error)]
pub enum InputError {
    /// 値を読み取る前に入力が終わった
    #[error("input ended before a value was read")]
    EndOfInput,

    /// 整数として解釈できないトークン
    #[error("expected an integer but got {token:?}")]
    NotAnInteger {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// コンソールの読み書きに失敗した
    #[error("console I/O failed")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InputError>;

/// トークンを整数として解釈する（アダプター共通）
pub fn parse_int_token(token: String) -> Result<i32> {
    token
        .parse()
        .map_err(|source| InputError::NotAnInteger { token, source })
}

/// 入力ソースポート
///
/// プロンプトを表示し、空白区切りの次のトークンを読み取る。
pub trait InputReader {
    /// プロンプトを表示して整数を読み取る
    fn read_int(&mut self, prompt: &str) -> Result<i32>;

    /// プロンプトを表示して文字列トークンを読み取る
    fn read_string(&mut self, prompt: &str) -> Result<String>;
}
