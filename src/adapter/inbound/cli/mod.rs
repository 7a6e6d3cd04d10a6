//! Diagnostic command-line adapter.

pub mod command;
pub mod window;

pub use command::Cli;
