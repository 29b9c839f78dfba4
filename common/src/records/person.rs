use std::fmt;

use crate::error::RecordError;

/// A person with a non-negative age.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
    age: i32,
    email: String,
}

impl Person {
    /// Builds a person, rejecting negative ages.
    ///
    /// The check runs before any field is moved, so a rejected call never
    /// produces a partially built value.
    pub fn new(
        name: impl Into<String>,
        age: i32,
        email: impl Into<String>,
    ) -> Result<Self, RecordError> {
        if age < 0 {
            return Err(RecordError::InvalidArgument(
                "Age cannot be negative".to_string(),
            ));
        }

        Ok(Self {
            name: name.into(),
            age,
            email: email.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person[name={}, age={}, email={}]",
            self.name, self.age, self.email
        )
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
    use proptest::prelude::*;

    #[test]
    fn test_person_new_valid() {
        let person = Person::new("Alice", 30, "alice@example.com").unwrap();
        assert_eq!(person.name(), "Alice");
        assert_eq!(person.age(), 30);
        assert_eq!(person.email(), "alice@example.com");
    }

    #[test]
    fn test_person_new_negative_age() {
        let result = Person::new("X", -1, "x@example.com");
        assert_eq!(
            result,
            Err(RecordError::InvalidArgument(
                "Age cannot be negative".to_string()
            ))
        );
    }

    #[test]
    fn test_person_new_zero_age() {
        let person = Person::new("Newborn", 0, "baby@example.com").unwrap();
        assert_eq!(person.age(), 0);
    }

    #[test]
    fn test_person_display() {
        let person = Person::new("Alice", 30, "alice@example.com").unwrap();
        assert_eq!(
            person.to_string(),
            "Person[name=Alice, age=30, email=alice@example.com]"
        );
    }

    #[test]
    fn test_person_structural_equality() {
        let a = Person::new("Alice", 30, "alice@example.com").unwrap();
        let b = Person::new("Alice", 30, "alice@example.com").unwrap();
        let c = Person::new("Alice", 31, "alice@example.com").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    proptest! {
        #[test]
        fn prop_non_negative_age_is_kept(age in 0..=i32::MAX, name in "[A-Za-z]{1,12}") {
            let person = Person::new(name.clone(), age, "p@example.com").unwrap();
            prop_assert_eq!(person.age(), age);
            prop_assert_eq!(person.name(), name.as_str());
        }

        #[test]
        fn prop_negative_age_is_rejected(age in i32::MIN..0) {
            let result = Person::new("X", age, "x@example.com");
            prop_assert!(matches!(result, Err(RecordError::InvalidArgument(_))));
        }
    }
}
