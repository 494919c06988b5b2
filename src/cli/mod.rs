//! Terminal output for the demo programs

mod console;

pub use console::Console;
