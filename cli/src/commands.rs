pub mod demo;
pub mod person;
pub mod raise;

use clap::{Parser, Subcommand};
use idiom_core::showcase::Section;

#[derive(Parser)]
#[command(name = "idiom")]
#[command(about = "A tour of idiomatic value types and language features.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output, repeat for less (-qq only shows warnings)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the demonstrations, or a single section of them
    #[command(alias = "d")]
    Demo { section: Option<Section> },
    /// Build a person record
    #[command(alias = "p")]
    Person {
        name: String,
        #[arg(allow_negative_numbers = true)]
        age: i32,
        email: String,
    },
    /// Build an employee record and give it a raise
    #[command(alias = "r")]
    Raise {
        name: String,
        #[arg(allow_negative_numbers = true)]
        salary: f64,
        department: String,
        #[arg(allow_negative_numbers = true)]
        percentage: f64,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
    fn test_parse_person_negative_age() {
        let cli = CommandLine::try_parse_from(["idiom", "person", "X", "-1", "x@example.com"]).unwrap();
        match cli.command {
            Commands::Person { name, age, email } => {
                assert_eq!(name, "X");
                assert_eq!(age, -1);
                assert_eq!(email, "x@example.com");
            }
            _ => panic!("expected person command"),
        }
    }

    #[test]
    fn test_parse_demo_section_and_flags() {
        let cli = CommandLine::try_parse_from(["idiom", "-qq", "d", "streams", "--no-banner"]).unwrap();
        assert_eq!(cli.quiet, 2);
        assert!(cli.no_banner);
        assert!(matches!(cli.command, Commands::Demo { section: Some(Section::Streams) }));
    }

    #[test]
    fn test_parse_demo_unknown_section() {
        assert!(CommandLine::try_parse_from(["idiom", "demo", "threads"]).is_err());
    }

    #[test]
    fn test_parse_raise() {
        let cli = CommandLine::try_parse_from(["idiom", "r", "Bob", "50000", "Engineering", "10"]).unwrap();
        match cli.command {
            Commands::Raise { salary, percentage, .. } => {
                assert_eq!(salary, 50000.0);
                assert_eq!(percentage, 10.0);
            }
            _ => panic!("expected raise command"),
        }
    }
}
