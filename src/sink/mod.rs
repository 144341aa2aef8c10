pub mod console;
pub mod file;

pub use console::{ConsoleFormat, ConsoleSink};
pub use file::{DEFAULT_MAX_LINES, FileSink, max_lines, set_max_lines};
