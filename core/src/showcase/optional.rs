#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalReport {
    pub present: Option<String>,
    pub with_default: String,
    pub length: usize,
    pub starts_with_h: Option<String>,
}

pub fn demonstrate() -> OptionalReport {
    let present: Option<&str> = Some("Hello");
    let empty: Option<&str> = None;

    let with_default = empty.unwrap_or("Default Value").to_string();
    let length = present.map(str::len).unwrap_or(0);
    let starts_with_h = present
        .filter(|s| s.starts_with('H'))
        .map(ToString::to_string);

    OptionalReport {
        present: present.map(ToString::to_string),
        with_default,
        length,
        starts_with_h,
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

    #[test]
    fn test_optional_report() {
        let report = demonstrate();
        assert_eq!(report.present.as_deref(), Some("Hello"));
        assert_eq!(report.with_default, "Default Value");
        assert_eq!(report.length, 5);
        assert_eq!(report.starts_with_h.as_deref(), Some("Hello"));
    }
}
