//! # Idiom Core
//!
//! The demonstration routines. Every routine is a plain function that
//! returns a report, leaving rendering to the caller.

pub mod showcase;
