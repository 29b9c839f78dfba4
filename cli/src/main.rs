mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, demo, person, raise};
use idiom_common::config::Config;
use terminal::{logging, print};
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    print::banner(&cfg);

    let result = match commands.command {
        Commands::Demo { section } => demo::demo(section, &cfg),
        Commands::Person { name, age, email } => person::person(name, age, email, &cfg),
        Commands::Raise {
            name,
            salary,
            department,
            percentage,
        } => raise::raise(name, salary, department, percentage, &cfg),
    };

    match result {
        Ok(()) => {
            print::end_of_program(&cfg);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
