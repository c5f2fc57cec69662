pub mod clock;
pub mod date_formatter;

pub use clock::LocalClock;
pub use date_formatter::DateFormatter;
