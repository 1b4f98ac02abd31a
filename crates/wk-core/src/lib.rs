//! # wk-core
//!
//! Core definitions shared by the workalendar-rs workspace: the error
//! taxonomy with its `fail!` macro, and the process-wide
//! `Settings` singleton.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `fail!` macro.
pub mod errors;

/// Global library settings (evaluation date).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::Settings;
