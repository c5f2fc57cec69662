use crate::domain::reservation::Reservation;
use std::error::Error;
use std::io::{self, Write};

use super::errors::Result;

/// セッションの終了結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// 予約の作成と変更が完了した
    Completed,
    /// 日付の変更がビジネスルールにより拒否された
    Rejected,
    /// 入力エラーなど、想定外のエラーで中断した
    Failed,
}

impl SessionOutcome {
    /// プロセスを失敗扱いで終了すべきか
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// セッションの結果を報告する
///
/// - ドメインエラー: `out` に `Error in reservation: <message>` を出力
/// - その他のエラー: `err` にエラーと原因の連鎖をすべて出力
///
/// どの経路でも最後に `End of program` を出力する。
pub fn report_outcome(
    result: &Result<Reservation>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<SessionOutcome> {
    let outcome = match result {
        Ok(_) => SessionOutcome::Completed,
        Err(e) if e.is_domain() => {
            writeln!(out, "Error in reservation: {e}")?;
            SessionOutcome::Rejected
        }
        Err(e) => {
            tracing::debug!(error = ?e, "reservation session failed");
            write_diagnostics(err, e)?;
            err.flush()?;
            SessionOutcome::Failed
        }
    };

    writeln!(out, "End of program")?;
    out.flush()?;
    Ok(outcome)
}

fn write_diagnostics(err: &mut dyn Write, error: &dyn Error) -> io::Result<()> {
    writeln!(err, "Unexpected error: {error}")?;
    let mut source = error.source();
    while let Some(cause) = source {
        writeln!(err, "  Caused by: {cause}")?;
        source = cause.source();
    }
    Ok(())
}
