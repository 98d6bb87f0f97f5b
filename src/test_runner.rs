use crate::formats::tree::Node;
use crate::formats::{tap, tree};
use crate::registry::CaseRegistry;
use crate::test_result::CaseOutcome;
use colored::Colorize;

pub struct ReportConfig {
    pub number_of_tests: usize,
    pub format: ReportFormat,
}

pub enum ReportFormat {
    Summary { show_all_tests: bool },
    Tap,
}

// RUN TEST CASES

pub fn run_test_cases<'a>(
    report_config: &ReportConfig,
    registry: &'a CaseRegistry,
    run_in_parallel: bool,
) -> Vec<CaseOutcome<'a>> {
    report_start(report_config);

    let outcomes = registry.run_all(run_in_parallel, |i, outcome| {
        report_test_case(report_config, i, outcome)
    });

    report_summary(report_config, &outcomes);

    outcomes
}

pub fn all_passed(outcomes: &[CaseOutcome]) -> bool {
    outcomes.iter().all(CaseOutcome::passed)
}

// REPORTING

fn report_start(report_config: &ReportConfig) {
    match report_config.format {
        ReportFormat::Summary { show_all_tests: _ } => {
            summary_print_start(report_config.number_of_tests);
        }
        ReportFormat::Tap => {
            tap_print_start(report_config.number_of_tests);
        }
    }
}

fn report_test_case(report_config: &ReportConfig, index: usize, outcome: &CaseOutcome) {
    match report_config.format {
        ReportFormat::Summary { show_all_tests: _ } => {
            summary_print_test_case(outcome);
        }
        ReportFormat::Tap => {
            let test_number_indent_level = report_config.number_of_tests.to_string().len();
            tap_print_test_case(index + 1, outcome, test_number_indent_level);
        }
    }
}

fn report_summary(report_config: &ReportConfig, outcomes: &[CaseOutcome]) {
    match report_config.format {
        ReportFormat::Summary { show_all_tests } => {
            summary_print_summary(report_config.number_of_tests, show_all_tests, outcomes);
        }
        ReportFormat::Tap => {
            tap_print_summary();
        }
    }
}

// SUMMARY HELPERS

fn summary_print_start(number_of_tests: usize) {
    println!("Running {} tests:", number_of_tests)
}

fn summary_print_test_case(outcome: &CaseOutcome) {
    let status = if outcome.passed() { "✅" } else { "❌" };
    let line = format!("Running command `{}`", outcome.case.command_line());

    println!("{} {}: {}", status, outcome.case.name, line.yellow())
}

fn summary_print_summary(number_of_tests: usize, show_all_tests: bool, outcomes: &[CaseOutcome]) {
    let mut is_any_test_cases_printed = false;

    for outcome in outcomes {
        if show_all_tests || !outcome.passed() {
            if !is_any_test_cases_printed {
                println!();
                is_any_test_cases_printed = true;
            }

            summary_print_result(outcome);
        }
    }

    let number_of_passed_tests = outcomes.iter().filter(|o| o.passed()).count();
    let number_of_failed_tests = number_of_tests - number_of_passed_tests;

    let status = if number_of_failed_tests == 0 {
        "OK".green()
    } else {
        "FAIL".red()
    };

    println!();
    println!(
        "Test result: {} ({} passed, {} failed)",
        status, number_of_passed_tests, number_of_failed_tests,
    );
}

fn summary_print_result(outcome: &CaseOutcome) {
    let message = outcome.case.label();

    if outcome.passed() {
        println!("✅ {}", message)
    } else {
        let header = format!("❌ {}", message.red());
        let tree = Node(header, tree::tree_from_outcome(outcome));
        let content =
            tree::draw_tree(&tree).unwrap_or_else(|_| String::from("Failed to draw tree\n"));
        print!("{}", content);
    }
}

// TAP HELPERS

fn tap_print_start(number_of_tests: usize) {
    tap::print_version();
    tap::print_plan(1, number_of_tests);
}

fn tap_print_test_case(test_number: usize, outcome: &CaseOutcome, indent_level: usize) {
    let message = match &outcome.case.description {
        Some(description) => format!("{} # {}", outcome.case.name, description),
        None => outcome.case.name.clone(),
    };

    match outcome.diagnostic_message() {
        None => tap::print_ok(test_number, &message, indent_level),
        Some(diagnostic_message) => {
            let diagnostics = format!(
                "command: {}\n{}",
                outcome.case.command_line(),
                tap::yaml_literal("message", &diagnostic_message)
            );
            tap::print_not_ok(test_number, &message, &diagnostics, indent_level)
        }
    }
}

fn tap_print_summary() {}
