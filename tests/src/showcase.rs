use idiom_core::showcase::{self, Report, Section};

#[test]
fn every_section_runs() {
    for section in Section::ALL {
        let report = showcase::run(section).unwrap();
        assert_eq!(report.section(), section);
    }
}

#[test]
fn records_section_uses_validated_records() {
    let Report::Records(report) = showcase::run(Section::Records).unwrap() else {
        panic!("expected records report");
    };

    assert_eq!(
        report.person.to_string(),
        "Person[name=Alice, age=30, email=alice@example.com]"
    );
    assert_eq!(
        report.employee.summary(),
        "Bob works in Engineering with salary $50000.00"
    );
    assert_eq!(
        report.raised.summary(),
        "Bob works in Engineering with salary $55000.00"
    );
}

#[test]
fn resources_close_in_reverse_order() {
    let Report::Resources(report) = showcase::run(Section::Resources).unwrap() else {
        panic!("expected resources report");
    };

    let closed: Vec<String> = report
        .events
        .iter()
        .map(ToString::to_string)
        .filter(|line| line.ends_with("closed"))
        .collect();

    assert_eq!(closed, ["Resource 2 closed", "Resource 1 closed"]);
}
