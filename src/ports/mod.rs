pub mod clock;
pub mod date_formatter;
pub mod input_reader;

pub use clock::Clock;
pub use date_formatter::{DateFormatError, DateFormatter, InvalidDatePattern};
pub use input_reader::{InputError, InputReader};
