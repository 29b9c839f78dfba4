//! # Functional Building Blocks
//!
//! Extension traits that combine closures (`and`/`or`/`negate` for
//! predicates, `and_then` for functions), plus a supplier and a timestamped
//! logger.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use rand::Rng;

/// `and`/`or`/`negate` on any closure that tests a borrowed value.
pub trait PredicateExt<T: ?Sized>: Fn(&T) -> bool + Sized {
    /// Short-circuits: `other` only runs when `self` passes.
    fn and<P>(self, other: P) -> impl Fn(&T) -> bool
    where
        P: Fn(&T) -> bool,
    {
        move |value: &T| self(value) && other(value)
    }

    fn or<P>(self, other: P) -> impl Fn(&T) -> bool
    where
        P: Fn(&T) -> bool,
    {
        move |value: &T| self(value) || other(value)
    }

    fn negate(self) -> impl Fn(&T) -> bool {
        move |value: &T| !self(value)
    }
}

impl<T: ?Sized, F: Fn(&T) -> bool> PredicateExt<T> for F {}

pub trait ComposeExt<A, B>: Fn(A) -> B + Sized {
    /// Returns a function computing `next(self(a))`.
    fn and_then<C, G>(self, next: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
    {
        move |a: A| next(self(a))
    }
}

impl<A, B, F: Fn(A) -> B> ComposeExt<A, B> for F {}

/// Formats `msg` prefixed with the wall-clock time as `[HH:MM:SS]`.
pub fn log_line<Tz>(at: &DateTime<Tz>, msg: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("[{}] {msg}", at.format("%H:%M:%S"))
}

/// Yields uniformly distributed values in `[0, 1)`.
pub fn random_supplier() -> impl FnMut() -> f64 {
    let mut rng = rand::rng();
    move || rng.random::<f64>()
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionalReport {
    pub four_is_positive_even: bool,
    pub processed: String,
    pub log_line: String,
    pub random: f64,
    pub product: i64,
}

pub fn demonstrate() -> FunctionalReport {
    let is_even = |n: &i64| n % 2 == 0;
    let is_positive = |n: &i64| *n > 0;
    let is_positive_even = is_even.and(is_positive);

    let to_lower_case = |s: String| s.to_lowercase();
    let trim = |s: String| s.trim().to_string();
    let process = to_lower_case.and_then(trim);

    let mut supplier = random_supplier();

    let multiply = |a: i64, b: i64| a * b;

    FunctionalReport {
        four_is_positive_even: is_positive_even(&4),
        processed: process("  HELLO  ".to_string()),
        log_line: log_line(&Local::now(), "Functional programming in Rust!"),
        random: supplier(),
        product: multiply(5, 3),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_predicate_combinators() {
        let is_even = |n: &i64| n % 2 == 0;
        let is_positive = |n: &i64| *n > 0;

        let both = is_even.and(is_positive);
        assert!(both(&4));
        assert!(!both(&-4));
        assert!(!both(&3));

        let either = is_even.or(is_positive);
        assert!(either(&-4));
        assert!(either(&3));
        assert!(!either(&-3));

        let odd = is_even.negate();
        assert!(odd(&3));
        assert!(!odd(&2));
    }

    #[test]
    fn test_predicate_chaining() {
        let is_even = |n: &i64| n % 2 == 0;
        let is_positive = |n: &i64| *n > 0;

        let not_positive_even = is_even.and(is_positive).negate();
        assert!(!not_positive_even(&4));
        assert!(not_positive_even(&-4));
    }

    #[test]
    fn test_predicate_unsized() {
        let empty = |s: &str| s.is_empty();
        assert!(empty(""));

        let not_empty = empty.negate();
        assert!(not_empty("x"));
    }

    #[test]
    fn test_and_then() {
        let to_lower_case = |s: String| s.to_lowercase();
        let process = to_lower_case.and_then(|s: String| s.trim().to_string());
        assert_eq!(process("  HELLO  ".to_string()), "hello");

        let add_one = |n: i32| n + 1;
        let add_then_double = add_one.and_then(|n: i32| n * 2);
        assert_eq!(add_then_double(3), 8);
    }

    #[test]
    fn test_log_line() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 5, 7).unwrap();
        assert_eq!(log_line(&at, "hi"), "[09:05:07] hi");
    }

    #[test]
    fn test_random_supplier_range() {
        let mut supplier = random_supplier();
        for _ in 0..100 {
            let value = supplier();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_functional_report() {
        let report = demonstrate();
        assert!(report.four_is_positive_even);
        assert_eq!(report.processed, "hello");
        assert_eq!(report.product, 15);
        assert!(report.log_line.ends_with("] Functional programming in Rust!"));
    }
}
