pub mod clock;
pub mod input_reader;

pub use clock::Clock;
pub use input_reader::InputReader;
