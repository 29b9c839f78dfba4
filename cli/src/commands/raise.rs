use colored::*;
use idiom_common::config::Config;
use idiom_common::records::employee::Employee;
use tracing::info;

use crate::terminal::{format, print};

pub fn raise(
    name: String,
    salary: f64,
    department: String,
    percentage: f64,
    cfg: &Config,
) -> anyhow::Result<()> {
    let employee = Employee::new(name, salary, department);
    let raised = employee.with_raise(percentage);

    print::header("employee", cfg);
    print::tree_head(0, &employee.to_string(), None);
    print::as_tree_one_level(format::employee_to_details(&employee));
    print::print_status(employee.summary());

    print::header(&format!("after a {percentage}% raise"), cfg);
    print::tree_head(1, &raised.to_string(), Some(&format!("(+{percentage}%)")));
    print::as_tree_one_level(format::employee_to_details(&raised));
    print::print_status(raised.summary());

    let delta: f64 = raised.salary() - employee.salary();
    info!("Salary changed by {}", format!("{delta:+.2}").bold());
    Ok(())
}
