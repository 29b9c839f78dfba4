pub const NAMES: [&str; 4] = ["Alice", "Bob", "Charlie", "Diana"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaReport {
    /// One `Hello, <name>` line per name, in input order.
    pub greetings: Vec<String>,
    /// The names as passed through a function reference.
    pub names: Vec<String>,
    /// Stable sort by length; equal lengths keep their input order.
    pub sorted_by_length: Vec<String>,
}

pub fn demonstrate() -> LambdaReport {
    let names: Vec<String> = NAMES.iter().map(ToString::to_string).collect();

    let greetings: Vec<String> = names.iter().map(|name| format!("Hello, {name}")).collect();

    let mut sorted_by_length = names.clone();
    sorted_by_length.sort_by_key(String::len);

    LambdaReport {
        greetings,
        names,
        sorted_by_length,
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
