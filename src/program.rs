use crate::adapters::system::DateFormatter as PatternDateFormatter;
use crate::application::reservation::{
    ReservationApplicationError, SessionDependencies, SessionOutcome, report_outcome, run_session,
};
use crate::config::AppConfig;
use crate::ports::{Clock, InputReader};
use std::io::{self, Write};

/// 設定から予約セッションを組み立てて実行し、結果を報告する
///
/// 日付書式が不正な場合もセッションのエラーとして報告するため、
/// どの経路でも `End of program` が出力される。
/// 入力ソースは結果を報告する前に解放する。
pub fn run_program<I: InputReader>(
    config: &AppConfig,
    mut input: I,
    clock: &dyn Clock,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<SessionOutcome> {
    let result = match PatternDateFormatter::try_new(config.date_pattern.as_str()) {
        Ok(date_formatter) => {
            let mut deps = SessionDependencies {
                input: &mut input,
                date_formatter: &date_formatter,
                clock,
            };
            run_session(&mut deps, out)
        }
        Err(e) => Err(ReservationApplicationError::from(e)),
    };
    drop(input);

    report_outcome(&result, out, err)
}
