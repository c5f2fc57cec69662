use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    ReservationDatesUpdated, ReservationError, ReservationMade, RoomNumber,
    commands::{MakeReservation, UpdateReservationDates},
};

/// 表示用の日付書式（dd/MM/yyyy）
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Reservation集約 - 1部屋の1回の宿泊予約
///
/// 作成時には日付を検証しない。日付の変更時のみ未来日であることを要求する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    room_number: RoomNumber,
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl Reservation {
    /// 受け取った値をそのまま保持する（検証なし）
    pub fn new(room_number: RoomNumber, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            room_number,
            check_in,
            check_out,
        }
    }

    pub fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// チェックインからチェックアウトまでの期間
    ///
    /// チェックアウトがチェックインより前の場合は負の値になる。
    pub fn duration(&self) -> TimeDelta {
        self.check_out.signed_duration_since(self.check_in)
    }

    /// 宿泊数
    pub fn nights(&self) -> i64 {
        self.duration().num_days()
    }

    /// 日付を変更する
    ///
    /// # エラー
    /// どちらかの日付が `now` より後でない場合は`ReservationError::DatesNotInFuture`を返す。
    /// その場合、保持している日付は変更されない。
    pub fn update_dates(
        &mut self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        now: NaiveDateTime,
    ) -> Result<(), ReservationError> {
        ensure_future_dates(check_in, check_out, now)?;
        self.check_in = check_in;
        self.check_out = check_out;
        Ok(())
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {}, check-in: {}, check-out: {}, {} nights",
            self.room_number,
            self.check_in.format(DISPLAY_DATE_FORMAT),
            self.check_out.format(DISPLAY_DATE_FORMAT),
            self.nights()
        )
    }
}

/// 日付がその日の0時の時点で `now` より厳密に後か
///
/// 当日の日付は0時を過ぎているため未来日として扱わない。
pub fn is_future_date(date: NaiveDate, now: NaiveDateTime) -> bool {
    date > now.date()
}

fn ensure_future_dates(
    check_in: NaiveDate,
    check_out: NaiveDate,
    now: NaiveDateTime,
) -> Result<(), ReservationError> {
    if !is_future_date(check_in, now) || !is_future_date(check_out, now) {
        return Err(ReservationError::DatesNotInFuture);
    }
    Ok(())
}

/// 純粋関数：予約を作成する
///
/// ビジネスルール：
/// - 作成時は日付を検証しない（過去日でも受け付ける）
///
/// 副作用なし。新しいReservationとイベントを返す。
pub fn make_reservation(cmd: MakeReservation) -> (Reservation, ReservationMade) {
    let reservation = Reservation::new(cmd.room_number, cmd.check_in, cmd.check_out);

    let event = ReservationMade {
        room_number: cmd.room_number,
        check_in: cmd.check_in,
        check_out: cmd.check_out,
    };

    (reservation, event)
}

/// 純粋関数：予約の日付を変更する
///
/// ビジネスルール：
/// - チェックイン・チェックアウトの両方が要求時刻より後であること
/// - 両方の日付をまとめて置き換える（片方だけの変更はない）
///
/// 副作用なし。新しいReservationとイベントを返す。
pub fn update_dates(
    reservation: &Reservation,
    cmd: UpdateReservationDates,
) -> Result<(Reservation, ReservationDatesUpdated), ReservationError> {
    let mut updated = reservation.clone();
    updated.update_dates(cmd.check_in, cmd.check_out, cmd.requested_at)?;

    let event = ReservationDatesUpdated {
        room_number: reservation.room_number,
        old_check_in: reservation.check_in,
        old_check_out: reservation.check_out,
        new_check_in: updated.check_in,
        new_check_out: updated.check_out,
        updated_at: cmd.requested_at,
    };

    Ok((updated, event))
}
