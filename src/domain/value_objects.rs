use serde::{Deserialize, Serialize};
use std::fmt;

/// 部屋番号 - 予約対象の客室
///
/// 一意性や範囲の制約はない。入力された整数をそのまま保持する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(i32);

impl RoomNumber {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for RoomNumber {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
