use idiom_common::config::Config;
use idiom_common::records::person::Person;

use crate::terminal::{format, print};

pub fn person(name: String, age: i32, email: String, cfg: &Config) -> anyhow::Result<()> {
    let person = Person::new(name, age, email)?;

    print::header("person", cfg);
    print::tree_head(0, &person.to_string(), None);
    print::as_tree_one_level(format::person_to_details(&person));
    Ok(())
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
    use idiom_common::error::RecordError;

    fn quiet_config() -> Config {
        Config {
            no_banner: true,
            quiet: 1,
        }
    }

    #[test]
    fn test_person_negative_age_fails() {
        let result = person("X".into(), -1, "x@example.com".into(), &quiet_config());

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RecordError>(),
            Some(RecordError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_person_valid() {
        let result = person("Alice".into(), 30, "alice@example.com".into(), &quiet_config());
        assert!(result.is_ok());
    }
}
