use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::RoomNumber;

/// コマンド：予約を作成する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeReservation {
    pub room_number: RoomNumber,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// コマンド：予約の日付を変更する
///
/// `requested_at` は変更を受け付けた時点の現在時刻（ローカル時刻）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateReservationDates {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub requested_at: NaiveDateTime,
}
