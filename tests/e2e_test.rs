use hotel_reservation::adapters::console::InputReader as ConsoleInputReader;
use hotel_reservation::adapters::system::{DateFormatter as PatternDateFormatter, LocalClock};
use hotel_reservation::application::reservation::{
    SessionDependencies, SessionOutcome, report_outcome, run_session,
};
use hotel_reservation::config::{AppConfig, DEFAULT_LOG_FILTER};
use hotel_reservation::program::run_program;
use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

struct Transcript {
    outcome: SessionOutcome,
    prompts: String,
    stdout: String,
    stderr: String,
}

/// コンソール入力からセッションを最後まで実行する（main と同じ配線）
fn run_console(input: &str) -> Transcript {
    let formatter = PatternDateFormatter::default();
    let mut prompts = Vec::new();
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();

    let result = {
        let mut reader = ConsoleInputReader::new(Cursor::new(input), &mut prompts);
        let mut deps = SessionDependencies {
            input: &mut reader,
            date_formatter: &formatter,
            clock: &LocalClock,
        };
        run_session(&mut deps, &mut stdout)
    };
    let outcome = report_outcome(&result, &mut stdout, &mut stderr).unwrap();

    Transcript {
        outcome,
        prompts: String::from_utf8(prompts).unwrap(),
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

#[test]
fn test_e2e_successful_update() {
    let t = run_console("101\n01/01/2099\n10/01/2099\n05/02/2099 08/02/2099\n");

    assert_eq!(t.outcome, SessionOutcome::Completed);
    assert_eq!(
        t.prompts,
        "Enter room number: \
         Check-in date (dd/MM/yyyy): \
         Check-out date (dd/MM/yyyy): \
         Check-in date (dd/MM/yyyy): \
         Check-out date (dd/MM/yyyy): "
    );
    assert_eq!(
        t.stdout,
        "Reservation: Room 101, check-in: 01/01/2099, check-out: 10/01/2099, 9 nights\n\
         \n\
         Enter data to update the reservation:\n\
         Reservation: Room 101, check-in: 05/02/2099, check-out: 08/02/2099, 3 nights\n\
         End of program\n"
    );
    assert!(t.stderr.is_empty());
}

#[test]
fn test_e2e_update_with_past_date() {
    let t = run_console("101\n01/01/2030\n10/01/2030\n01/01/2000\n10/01/2099\n");

    assert_eq!(t.outcome, SessionOutcome::Rejected);
    assert!(t.stdout.starts_with(
        "Reservation: Room 101, check-in: 01/01/2030, check-out: 10/01/2030, 9 nights\n"
    ));
    assert!(t.stdout.ends_with(
        "Error in reservation: Reservation dates for update must be future dates\nEnd of program\n"
    ));
    assert!(t.stderr.is_empty());
}

#[test]
fn test_e2e_malformed_date() {
    let t = run_console("101\n31-13-2030\n10/01/2030\n");

    assert_eq!(t.outcome, SessionOutcome::Failed);
    assert_eq!(t.stdout, "End of program\n");
    assert!(t.stderr.starts_with("Unexpected error: Failed to read date\n"));
    assert!(t.stderr.contains("Caused by: cannot parse \"31-13-2030\" as a date (dd/MM/yyyy)"));
}

#[test]
fn test_e2e_empty_input() {
    let t = run_console("");

    assert_eq!(t.outcome, SessionOutcome::Failed);
    assert_eq!(t.prompts, "Enter room number: ");
    assert_eq!(t.stdout, "End of program\n");
    assert!(t.stderr.contains("input ended before a value was read"));
}

// ============================================================================
// run_program（設定から実行まで）
// ============================================================================

/// 設定を含めて main と同じ経路で実行する
fn run_with_config(config: &AppConfig, input: &str) -> Transcript {
    let mut prompts = Vec::new();
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();

    let outcome = run_program(
        config,
        ConsoleInputReader::new(Cursor::new(input), &mut prompts),
        &LocalClock,
        &mut stdout,
        &mut stderr,
    )
    .unwrap();

    Transcript {
        outcome,
        prompts: String::from_utf8(prompts).unwrap(),
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

#[test]
fn test_run_program_with_default_config() {
    let t = run_with_config(
        &AppConfig::default(),
        "101 01/01/2099 10/01/2099 05/02/2099 08/02/2099\n",
    );

    assert_eq!(t.outcome, SessionOutcome::Completed);
    assert!(t.stdout.ends_with(
        "Reservation: Room 101, check-in: 05/02/2099, check-out: 08/02/2099, 3 nights\nEnd of program\n"
    ));
    assert!(t.stderr.is_empty());
}

#[test]
fn test_run_program_invalid_date_pattern_still_ends_program() {
    let config = AppConfig {
        date_pattern: "%d/%m".to_string(),
    };
    let t = run_with_config(&config, "101\n01/01/2099\n");

    assert_eq!(t.outcome, SessionOutcome::Failed);
    assert!(t.prompts.is_empty());
    assert_eq!(t.stdout, "End of program\n");
    // エラーは1回だけ報告される
    assert_eq!(
        t.stderr,
        "Unexpected error: Invalid configuration\n  \
         Caused by: invalid date pattern \"%d/%m\": it must format and parse back a full calendar date\n"
    );
}

// ============================================================================
// ログ出力
// ============================================================================

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// 指定したフィルタでログを収集しながら、日付変更が拒否されるセッションを実行する
fn logs_for_rejected_update(filter: &str) -> String {
    let logs = SharedBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let t = tracing::subscriber::with_default(subscriber, || {
        run_with_config(
            &AppConfig::default(),
            "101\n01/01/2030\n10/01/2030\n01/01/2000\n10/01/2099\n",
        )
    });
    assert_eq!(t.outcome, SessionOutcome::Rejected);

    let bytes = logs.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_default_log_filter_keeps_rejection_out_of_console() {
    assert!(logs_for_rejected_update(DEFAULT_LOG_FILTER).is_empty());
}

#[test]
fn test_rejection_is_logged_at_info_level() {
    let logs = logs_for_rejected_update("hotel_reservation=info");
    assert!(logs.contains("reservation update rejected"));
    assert!(logs.contains("INFO"));
}
