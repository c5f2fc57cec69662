use crate::ports::clock::Clock;
use chrono::{Local, NaiveDateTime};

/// ローカルタイムゾーンのシステム時計
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
