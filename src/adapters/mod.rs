pub mod console;
pub mod mock;
pub mod system;
