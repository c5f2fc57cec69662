use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::RoomNumber;

/// イベント：予約が作成された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationMade {
    pub room_number: RoomNumber,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// イベント：予約の日付が変更された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDatesUpdated {
    pub room_number: RoomNumber,
    pub old_check_in: NaiveDate,
    pub old_check_out: NaiveDate,
    pub new_check_in: NaiveDate,
    pub new_check_out: NaiveDate,
    pub updated_at: NaiveDateTime,
}

/// ドメインイベント統合型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainEvent {
    ReservationMade(ReservationMade),
    ReservationDatesUpdated(ReservationDatesUpdated),
}
