//! Output formatting for the command line

pub mod console;
