use idiom_common::error::RecordError;
use idiom_common::records::employee::Employee;
use idiom_common::records::person::Person;

pub const RAISE_PERCENTAGE: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordsReport {
    pub person: Person,
    pub employee: Employee,
    /// `employee` after a [`RAISE_PERCENTAGE`] raise.
    pub raised: Employee,
}

pub fn demonstrate() -> Result<RecordsReport, RecordError> {
    let person = Person::new("Alice", 30, "alice@example.com")?;
    let employee = Employee::new("Bob", 50000.0, "Engineering");
    let raised = employee.with_raise(RAISE_PERCENTAGE);

    Ok(RecordsReport {
        person,
        employee,
        raised,
    })
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

    #[test]
    fn test_records_report() {
        let report = demonstrate().unwrap();
        assert_eq!(report.person.name(), "Alice");
        assert_eq!(report.person.age(), 30);
        assert_eq!(report.employee.salary(), 50000.0);
        assert!((report.raised.salary() - 55000.0).abs() < 1e-6);
        assert_eq!(report.raised.department(), "Engineering");
    }
}
