//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module and writes to the sink it
//! is given, so tests can capture the output.

pub mod calc;
pub mod demo;
pub mod flow;
pub mod init;
pub mod person;
