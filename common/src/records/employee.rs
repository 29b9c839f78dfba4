use std::fmt;

/// An employee record. The salary is stored as given, negative values included.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    name: String,
    salary: f64,
    department: String,
}

impl Employee {
    pub fn new(name: impl Into<String>, salary: f64, department: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            salary,
            department: department.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns a copy with the salary scaled by `1 + percentage / 100`.
    pub fn with_raise(&self, percentage: f64) -> Self {
        Self {
            salary: self.salary * (1.0 + percentage / 100.0),
            ..self.clone()
        }
    }

    /// One-line description, e.g. `Bob works in Engineering with salary $50000.00`.
    pub fn summary(&self) -> String {
        format!(
            "{} works in {} with salary ${:.2}",
            self.name, self.department, self.salary
        )
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee[name={}, salary={:?}, department={}]",
            self.name, self.salary, self.department
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
