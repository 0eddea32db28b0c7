//! Command handler layer.
//!
//! Matches the parsed CLI, calls into `services/*` and wires the output.
//! Everything is computed before the first line is printed, so a failing
//! run leaves stdout empty.

pub mod report;

pub use report::handle_commands;
