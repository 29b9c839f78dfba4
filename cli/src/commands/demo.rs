use std::collections::BTreeMap;

use colored::*;
use idiom_common::config::Config;
use idiom_core::showcase::collections::CollectionsReport;
use idiom_core::showcase::functional::FunctionalReport;
use idiom_core::showcase::lambdas::LambdaReport;
use idiom_core::showcase::matching::MatchReport;
use idiom_core::showcase::optional::OptionalReport;
use idiom_core::showcase::records::{RAISE_PERCENTAGE, RecordsReport};
use idiom_core::showcase::resources::ResourceReport;
use idiom_core::showcase::streams::StreamReport;
use idiom_core::showcase::{self, Report, Section};
use tracing::info;

use crate::terminal::{format, print};

pub fn demo(section: Option<Section>, cfg: &Config) -> anyhow::Result<()> {
    let reports: Vec<Report> = match section {
        Some(section) => vec![showcase::run(section)?],
        None => showcase::run_all()?,
    };

    for report in &reports {
        print::header(report.section().title(), cfg);
        render(report);
    }

    let noun: &str = if reports.len() == 1 { "section" } else { "sections" };
    let summary: String = format!("{} {noun} demonstrated", reports.len())
        .bold()
        .green()
        .to_string();

    match cfg.quiet {
        0 => print::centerln(&summary),
        _ => info!("{summary}"),
    }

    Ok(())
}

fn render(report: &Report) {
    match report {
        Report::Lambdas(r) => lambdas(r),
        Report::Streams(r) => streams(r),
        Report::Optional(r) => optional(r),
        Report::Records(r) => records(r),
        Report::PatternMatching(r) => pattern_matching(r),
        Report::Collections(r) => collections(r),
        Report::Resources(r) => resources(r),
        Report::Functional(r) => functional(r),
    }
}

fn lambdas(report: &LambdaReport) {
    report.greetings.iter().for_each(print::print_status);
    report.names.iter().for_each(print::print_status);
    print::set_key_width(["Sorted by length"]);
    print::aligned_line("Sorted by length", format::list(&report.sorted_by_length));
}

fn streams(report: &StreamReport) {
    print::set_key_width(["Even squares", "Sum", "Partitioned", "Statistics"]);
    print::aligned_line("Even squares", format::list(&report.even_squares));
    print::aligned_line("Sum", report.sum);

    let partitioned: BTreeMap<bool, String> = report
        .partitioned
        .iter()
        .map(|(is_even, values)| (*is_even, format::list(values)))
        .collect();
    print::aligned_line("Partitioned", format::map(&partitioned));
    print::aligned_line("Statistics", report.stats.to_string());
}

fn optional(report: &OptionalReport) {
    print::set_key_width(["Present", "With default", "Length", "Starts with H"]);
    if let Some(present) = &report.present {
        print::aligned_line("Present", present.as_str());
    }
    print::aligned_line("With default", report.with_default.as_str());
    print::aligned_line("Length", report.length);
    if let Some(value) = &report.starts_with_h {
        print::aligned_line("Starts with H", value.as_str());
    }
}

fn records(report: &RecordsReport) {
    print::tree_head(0, &report.person.to_string(), None);
    print::as_tree_one_level(format::person_to_details(&report.person));

    print::tree_head(1, &report.employee.to_string(), None);
    print::as_tree_one_level(format::employee_to_details(&report.employee));
    print::print_status(report.employee.summary());

    let note = format!("(+{RAISE_PERCENTAGE}%)");
    print::tree_head(2, &report.raised.to_string(), Some(&note));
    print::as_tree_one_level(format::employee_to_details(&report.raised));
    print::print_status(report.raised.summary());
}

fn pattern_matching(report: &MatchReport) {
    print::set_key_width(["String length", "Matched", "Day type"]);
    if let Some(length) = report.text_length {
        print::aligned_line("String length", length);
    }
    print::aligned_line("Matched", report.description.as_str());
    print::aligned_line(
        "Day type",
        format!("{} (day {})", format::day_type(report.day_type), report.day),
    );
}

fn collections(report: &CollectionsReport) {
    print::set_key_width(["Immutable list", "Immutable set", "Joined"]);
    print::aligned_line("Immutable list", format::list(&report.list));
    print::aligned_line("Immutable set", format::set(&report.set));

    for (key, value) in &report.map {
        print::print_status(format!("{} -> {}", key, format::number(value)));
    }

    print::aligned_line("Joined", report.joined.as_str());
}

fn resources(report: &ResourceReport) {
    for event in &report.events {
        print::print_status(event.to_string());
    }
}

fn functional(report: &FunctionalReport) {
    print::set_key_width(["4 is positive even", "Processed", "Random", "5 * 3"]);
    print::aligned_line("4 is positive even", report.four_is_positive_even);
    print::aligned_line("Processed", format!("'{}'", report.processed));
    print::print_status(report.log_line.italic().to_string());
    print::aligned_line("Random", report.random);
    print::aligned_line("5 * 3", report.product);
}
