use idiom_common::error::RecordError;
use idiom_common::records::employee::Employee;
use idiom_common::records::person::Person;
use proptest::prelude::*;

/// A rejected construction surfaces as an error the caller can propagate.
#[test]
fn invalid_person_propagates_through_anyhow() {
    fn build() -> anyhow::Result<Person> {
        Ok(Person::new("X", -1, "x@example.com")?)
    }

    let err = build().unwrap_err();
    let record_err = err
        .downcast_ref::<RecordError>()
        .expect("error should be a RecordError");

    assert!(matches!(record_err, RecordError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "invalid argument: Age cannot be negative");
}

#[test]
fn alice_scenario() {
    let person = Person::new("Alice", 30, "alice@example.com").unwrap();
    assert_eq!(person.age(), 30);
}

#[test]
fn bob_raise_scenario() {
    let bob = Employee::new("Bob", 50000.0, "Engineering");
    let raised = bob.with_raise(10.0);

    assert!((raised.salary() - 55000.0).abs() < 1e-6);
    assert_eq!(raised.department(), "Engineering");
    assert_eq!(raised.name(), "Bob");
    assert_eq!(bob.salary(), 50000.0);
}

#[test]
fn chained_raises_compound() {
    let bob = Employee::new("Bob", 100.0, "Engineering");
    let twice = bob.with_raise(10.0).with_raise(10.0);
    assert!((twice.salary() - 121.0).abs() < 1e-9);
}

proptest! {
    #[test]
    fn person_age_sign_decides_outcome(age in any::<i32>()) {
        let result = Person::new("P", age, "p@example.com");
        if age >= 0 {
            prop_assert_eq!(result.map(|p| p.age()), Ok(age));
        } else {
            prop_assert!(result.is_err());
        }
    }
}
