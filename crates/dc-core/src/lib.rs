//! # dc-core
//!
//! Core types and error definitions for daycal.
//!
//! This crate provides the building blocks shared across the workspace: the
//! error taxonomy and its macros, the `SnapshotHandle` used to publish
//! immutable calendar indexes, process-wide `Settings`, and the compact
//! date-string helpers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Swappable snapshot handle (`SnapshotHandle<T>`).
pub mod handle;

/// Global library settings (evaluation date).
pub mod settings;

/// Compact date-string parsing and formatting.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use handle::SnapshotHandle;
pub use settings::{ScopedEvaluationDate, Settings};
