use crate::domain::{
    self, DomainEvent, RoomNumber,
    commands::{MakeReservation, UpdateReservationDates},
    reservation::Reservation,
};
use crate::ports::{Clock, DateFormatter, InputReader};
use chrono::NaiveDate;
use std::io::Write;

use super::errors::{ReservationApplicationError, Result};

/// セッションの依存関係
///
/// 入力ソースは借用するだけで、解放は所有者（`main`）のスコープに任せる。
/// そのため、どの経路で終了しても入力ソースは必ず解放される。
pub struct SessionDependencies<'a> {
    pub input: &'a mut dyn InputReader,
    pub date_formatter: &'a dyn DateFormatter,
    pub clock: &'a dyn Clock,
}

/// 日付を1つ読み取るヘルパー関数
///
/// # 引数
/// * `deps` - セッションの依存関係
/// * `label` - プロンプトに表示する日付の種類（"Check-in" など）
fn read_date(deps: &mut SessionDependencies<'_>, label: &str) -> Result<NaiveDate> {
    let prompt = format!("{label} date ({}): ", deps.date_formatter.pattern_hint());
    let raw = deps.input.read_string(&prompt)?;
    Ok(deps.date_formatter.parse(&raw)?)
}

/// 予約を作成する
///
/// 部屋番号・チェックイン日・チェックアウト日を順に読み取る。
/// 作成時は日付を検証しない。
///
/// # エラー
/// - Input: 部屋番号が整数でない、または入力が終わった
/// - DateFormat: 日付を解析できない
pub fn make_reservation(deps: &mut SessionDependencies<'_>) -> Result<Reservation> {
    let room_number = RoomNumber::new(deps.input.read_int("Enter room number: ")?);
    let check_in = read_date(deps, "Check-in")?;
    let check_out = read_date(deps, "Check-out")?;

    let (reservation, event) = domain::reservation::make_reservation(MakeReservation {
        room_number,
        check_in,
        check_out,
    });

    tracing::info!(event = ?DomainEvent::ReservationMade(event), "reservation made");
    Ok(reservation)
}

/// 予約の日付を変更する
///
/// 新しい日付を読み取り、読み取り後の現在時刻で検証する。
/// 失敗した場合、元の予約はそのまま残る。
///
/// # エラー
/// - Input / DateFormat: 入力エラー
/// - Domain: どちらかの日付が未来日ではない
pub fn update_reservation_dates(
    deps: &mut SessionDependencies<'_>,
    reservation: &Reservation,
) -> Result<Reservation> {
    let check_in = read_date(deps, "Check-in")?;
    let check_out = read_date(deps, "Check-out")?;

    let cmd = UpdateReservationDates {
        check_in,
        check_out,
        requested_at: deps.clock.now(),
    };

    let (updated, event) = domain::reservation::update_dates(reservation, cmd).map_err(|e| {
        tracing::info!(
            room_number = %reservation.room_number(),
            error = %e,
            "reservation update rejected"
        );
        ReservationApplicationError::Domain(e)
    })?;

    tracing::info!(event = ?DomainEvent::ReservationDatesUpdated(event), "reservation updated");
    Ok(updated)
}

fn write_update_request(out: &mut dyn Write, reservation: &Reservation) -> std::io::Result<()> {
    writeln!(out, "Reservation: {reservation}")?;
    writeln!(out)?;
    writeln!(out, "Enter data to update the reservation:")?;
    out.flush()
}

/// 予約セッションを実行する
///
/// 1. 予約を作成して表示する
/// 2. 新しい日付を読み取って予約を変更する
/// 3. 変更後の予約を表示する
///
/// 成功時は変更後の予約を返す。終了メッセージの表示は`report_outcome`が行う。
pub fn run_session(deps: &mut SessionDependencies<'_>, out: &mut dyn Write) -> Result<Reservation> {
    let reservation = make_reservation(deps)?;

    write_update_request(out, &reservation).map_err(ReservationApplicationError::Output)?;

    let updated = update_reservation_dates(deps, &reservation)?;

    writeln!(out, "Reservation: {updated}").map_err(ReservationApplicationError::Output)?;
    Ok(updated)
}
