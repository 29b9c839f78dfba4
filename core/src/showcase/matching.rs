use tracing::warn;

/// A dynamically typed value, matched on by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Text(String),
    Null,
    Other,
}

impl Value {
    pub fn describe(&self) -> String {
        match self {
            Value::Integer(i) => format!("Integer: {i}"),
            Value::Text(s) => format!("String: {s}"),
            Value::Null => "Null value".to_string(),
            Value::Other => "Unknown type".to_string(),
        }
    }

    /// Number of characters when the value is text.
    pub fn text_length(&self) -> Option<usize> {
        if let Value::Text(s) = self {
            Some(s.chars().count())
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayType {
    Weekend,
    Weekday,
    Unknown,
}

impl DayType {
    /// Classifies a day number where `1` and `7` are the weekend.
    pub fn of(day: u8) -> Self {
        match day {
            1 | 7 => DayType::Weekend,
            2..=6 => DayType::Weekday,
            _ => {
                warn!("Invalid day");
                DayType::Unknown
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    /// Character count of the value when it is text.
    pub text_length: Option<usize>,
    pub description: String,
    pub day: u8,
    pub day_type: DayType,
}

pub fn demonstrate() -> MatchReport {
    let value = Value::Text("Hello".to_string());

    let text_length = value.text_length();

    let day = 3;

    MatchReport {
        text_length,
        description: value.describe(),
        day,
        day_type: DayType::of(day),
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
