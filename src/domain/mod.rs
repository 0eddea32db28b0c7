//! Shared data model layer (structs only).
//!
//! ## Files
//! - `models.rs` — typed pattern values plus report/output structs.
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem side effects and no shape
//! checking. Untyped JSON is converted in `services::aggregate` and nowhere
//! else.
//!
//! ## Compatibility note
//! `CountReport`, `BlockSummary` and `JsonOut` define the `--json` output.

pub mod models;
