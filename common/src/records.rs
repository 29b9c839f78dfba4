//! # Records
//!
//! Immutable value types. Fields are private and only readable through
//! accessors, so an instance never changes after construction.
//!
//! * [`person::Person`]: validated at construction (`age >= 0`).
//! * [`employee::Employee`]: unvalidated, supports derived copies (`with_raise`).

pub mod employee;
pub mod person;
