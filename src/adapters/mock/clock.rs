use crate::ports::clock::Clock as ClockTrait;
use chrono::NaiveDateTime;

/// Mock implementation of Clock
///
/// Always returns the fixed moment it was created with.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    now: NaiveDateTime,
}

impl Clock {
    pub fn fixed(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl ClockTrait for Clock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}
