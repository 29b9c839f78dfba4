//! # Idiom Common
//!
//! Shared value types used by every crate in the workspace.
//!
//! * **[`records`]**: Immutable records validated at construction.
//! * **[`error`]**: The error raised when a construction invariant is violated.
//! * **[`config`]**: Runtime switches built from the command line.

pub mod config;
pub mod error;
pub mod records;
