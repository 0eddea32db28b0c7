//! Service layer containing the aggregation logic and its I/O helpers.
//!
//! ## Service map
//! - `aggregate.rs` — shape validation of decoded JSON + the counting operations.
//! - `loader.rs` — reading and decoding the pattern file.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Counting functions are pure and take typed values only.
//! - Side effects (file reads, stdout) stay in `loader.rs` and `output.rs`.
//! - Keep command handlers thin; delegate to services.

pub mod aggregate;
pub mod loader;
pub mod output;
