use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use idiom_common::records::employee::Employee;
use idiom_common::records::person::Person;
use idiom_core::showcase::matching::DayType;

pub type Detail = (String, ColoredString);

fn detail(key: &str, value: ColoredString) -> Detail {
    (key.to_string(), value)
}

/// Renders a sequence as `[a, b, c]`.
pub fn list<T: Display>(items: &[T]) -> String {
    let body: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", body.join(", "))
}

pub fn set<T: Display>(items: &BTreeSet<T>) -> String {
    let body: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", body.join(", "))
}

/// Renders a map as `{k=v, ...}` in key order.
pub fn map<K: Display, V: Display>(entries: &BTreeMap<K, V>) -> String {
    let body: Vec<String> = entries.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{{{}}}", body.join(", "))
}

pub fn number<T: Display>(value: T) -> ColoredString {
    value.to_string().color(colors::NUMBER)
}

pub fn day_type(day_type: DayType) -> ColoredString {
    match day_type {
        DayType::Weekend => "Weekend".green(),
        DayType::Weekday => "Weekday".normal(),
        DayType::Unknown => "Unknown".yellow(),
    }
}

pub fn person_to_details(person: &Person) -> Vec<Detail> {
    vec![
        detail("Name", person.name().normal()),
        detail("Age", number(person.age())),
        detail("Email", person.email().normal()),
    ]
}

pub fn employee_to_details(employee: &Employee) -> Vec<Detail> {
    vec![
        detail("Name", employee.name().normal()),
        detail("Salary", number(format!("${:.2}", employee.salary()))),
        detail("Department", employee.department().normal()),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
