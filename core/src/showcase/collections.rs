use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionsReport {
    pub list: Vec<&'static str>,
    pub set: BTreeSet<i32>,
    pub map: BTreeMap<&'static str, i32>,
    pub joined: String,
}

/// Joins items with `separator`, wrapped in `prefix` and `suffix`.
pub fn join_with<I, T>(items: I, separator: &str, prefix: &str, suffix: &str) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let body: Vec<String> = items
        .into_iter()
        .map(|item| item.as_ref().to_string())
        .collect();
    format!("{prefix}{}{suffix}", body.join(separator))
}

pub fn demonstrate() -> CollectionsReport {
    let list = vec!["Java", "Python", "Go"];
    let set = BTreeSet::from([1, 2, 3, 4, 5]);
    let map = BTreeMap::from([("one", 1), ("two", 2), ("three", 3)]);

    let joined = join_with(&list, ", ", "[", "]");

    CollectionsReport {
        list,
        set,
        map,
        joined,
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
    fn test_join_with() {
        assert_eq!(join_with(["a", "b"], "-", "<", ">"), "<a-b>");
        assert_eq!(join_with(Vec::<String>::new(), ", ", "[", "]"), "[]");
    }

    #[test]
    fn test_collections_report() {
        let report = demonstrate();
        assert_eq!(report.joined, "[Java, Python, Go]");
        assert_eq!(report.set.len(), 5);
        assert_eq!(report.map.get("two"), Some(&2));
        let keys: Vec<&str> = report.map.keys().copied().collect();
        assert_eq!(keys, ["one", "three", "two"]);
    }
}
