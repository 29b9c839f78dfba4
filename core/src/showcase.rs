//! # Showcase
//!
//! One submodule per language idiom. [`Section`] lists them in the order
//! they are presented and [`run`] dispatches a single one.

pub mod collections;
pub mod functional;
pub mod lambdas;
pub mod matching;
pub mod optional;
pub mod records;
pub mod resources;
pub mod streams;

use std::fmt;
use std::str::FromStr;

use idiom_common::error::RecordError;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Lambdas,
    Streams,
    Optional,
    Records,
    PatternMatching,
    Collections,
    Resources,
    Functional,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Lambdas,
        Section::Streams,
        Section::Optional,
        Section::Records,
        Section::PatternMatching,
        Section::Collections,
        Section::Resources,
        Section::Functional,
    ];

    /// Name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Section::Lambdas => "lambdas",
            Section::Streams => "streams",
            Section::Optional => "optional",
            Section::Records => "records",
            Section::PatternMatching => "pattern-matching",
            Section::Collections => "collections",
            Section::Resources => "resources",
            Section::Functional => "functional",
        }
    }

    /// Human readable title used for headers.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Lambdas => "lambda expressions",
            Section::Streams => "stream api",
            Section::Optional => "optional",
            Section::Records => "records",
            Section::PatternMatching => "pattern matching & switch",
            Section::Collections => "collections",
            Section::Resources => "scoped resources",
            Section::Functional => "functional interfaces",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.name() == lower)
            .ok_or_else(|| {
                let names: Vec<&str> = Section::ALL.iter().map(Section::name).collect();
                format!("unknown section '{s}', expected one of: {}", names.join(", "))
            })
    }
}

/// Output of a single section.
#[derive(Debug, Clone)]
pub enum Report {
    Lambdas(lambdas::LambdaReport),
    Streams(streams::StreamReport),
    Optional(optional::OptionalReport),
    Records(records::RecordsReport),
    PatternMatching(matching::MatchReport),
    Collections(collections::CollectionsReport),
    Resources(resources::ResourceReport),
    Functional(functional::FunctionalReport),
}

impl Report {
    pub fn section(&self) -> Section {
        match self {
            Report::Lambdas(_) => Section::Lambdas,
            Report::Streams(_) => Section::Streams,
            Report::Optional(_) => Section::Optional,
            Report::Records(_) => Section::Records,
            Report::PatternMatching(_) => Section::PatternMatching,
            Report::Collections(_) => Section::Collections,
            Report::Resources(_) => Section::Resources,
            Report::Functional(_) => Section::Functional,
        }
    }
}

pub fn run(section: Section) -> Result<Report, RecordError> {
    debug!("Running section {section}");
    let report = match section {
        Section::Lambdas => Report::Lambdas(lambdas::demonstrate()),
        Section::Streams => Report::Streams(streams::demonstrate()),
        Section::Optional => Report::Optional(optional::demonstrate()),
        Section::Records => Report::Records(records::demonstrate()?),
        Section::PatternMatching => Report::PatternMatching(matching::demonstrate()),
        Section::Collections => Report::Collections(collections::demonstrate()),
        Section::Resources => Report::Resources(resources::demonstrate()),
        Section::Functional => Report::Functional(functional::demonstrate()),
    };
    Ok(report)
}

/// Runs every section in presentation order.
pub fn run_all() -> Result<Vec<Report>, RecordError> {
    Section::ALL.into_iter().map(run).collect()
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
    fn test_section_from_str() {
        assert_eq!("lambdas".parse::<Section>(), Ok(Section::Lambdas));
        assert_eq!("Pattern-Matching".parse::<Section>(), Ok(Section::PatternMatching));
        assert_eq!(" resources ".parse::<Section>(), Ok(Section::Resources));
        assert!("threads".parse::<Section>().is_err());
    }

    #[test]
    fn test_section_name_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.name().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn test_run_all_order() {
        let reports = run_all().unwrap();
        let sections: Vec<Section> = reports.iter().map(Report::section).collect();
        assert_eq!(sections, Section::ALL.to_vec());
    }
}
