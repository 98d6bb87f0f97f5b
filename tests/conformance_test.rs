#![cfg(unix)]

mod common;

use arxc_conformance::config::HarnessConfig;
use arxc_conformance::registry::CaseRegistry;
use arxc_conformance::test_case::TestCase;
use arxc_conformance::test_result::CaseFailure;
use common::{fake_config, fake_project, FAKE_ARXC};
use std::sync::Mutex;

#[test]
fn test_help_prints_usage_line() {
    let project = fake_project(FAKE_ARXC);
    let registry = CaseRegistry::with_builtin_cases(fake_config(project.path()));

    let help = registry.get("help").unwrap();
    let outcome = registry.evaluate(help);

    assert!(outcome.passed(), "{:?}", outcome.diagnostic_message());
}

#[test]
fn test_version_prints_semantic_version() {
    let project = fake_project(FAKE_ARXC);
    let registry = CaseRegistry::with_builtin_cases(fake_config(project.path()));

    let version = registry.get("version").unwrap();
    let outcome = registry.evaluate(version);

    assert!(outcome.passed(), "{:?}", outcome.diagnostic_message());
}

#[test]
fn test_wrong_version_reports_actual_output() {
    let project = fake_project(FAKE_ARXC);
    let registry = CaseRegistry::new(fake_config(project.path()));
    let test_case = TestCase::new(
        "version",
        registry.compiler_invocation(["--version"]),
        "9.9.9",
    );

    let outcome = registry.evaluate(&test_case);

    assert!(!outcome.passed());
    let message = outcome.diagnostic_message().unwrap();
    assert!(message.contains("Got: arxc version 0.1.0"), "{}", message);
}

#[test]
fn test_version_match_is_case_sensitive_and_exact() {
    let project = fake_project("echo 'arxc version 0.1.1'");
    let registry = CaseRegistry::with_builtin_cases(fake_config(project.path()));

    let outcome = registry.evaluate(registry.get("version").unwrap());

    assert!(!outcome.passed());
}

#[test]
fn test_missing_binary_is_an_ordinary_failure() {
    let config = HarnessConfig::default().with_compiler("/nonexistent/binary");
    let registry = CaseRegistry::with_builtin_cases(config);

    let outcome = registry.evaluate(registry.get("help").unwrap());

    assert!(!outcome.passed());
    assert!(matches!(outcome.failure(), Some(CaseFailure::SpawnFailure(_))));
    let message = outcome.diagnostic_message().unwrap();
    assert!(message.contains("failed to start process"), "{}", message);
}

#[test]
fn test_suite_continues_after_spawn_failure() {
    let project = fake_project(FAKE_ARXC);
    let mut registry = CaseRegistry::with_builtin_cases(fake_config(project.path()));
    registry.register(TestCase::new(
        "missing",
        arxc_conformance::test_case::Invocation::direct("/nonexistent/binary", ["--help"]),
        "Usage",
    ));
    registry.register(TestCase::new(
        "after_missing",
        registry.compiler_invocation(["--version"]),
        "0.1.0",
    ));

    let seen = Mutex::new(vec![]);
    let outcomes = registry.run_all(false, |i, outcome| {
        seen.lock().unwrap().push((i, outcome.passed()));
    });

    let verdicts: Vec<_> = outcomes
        .iter()
        .map(|o| (o.case.name.as_str(), o.passed()))
        .collect();
    assert_eq!(
        verdicts,
        vec![
            ("help", true),
            ("version", true),
            ("missing", false),
            ("after_missing", true),
        ]
    );
    assert_eq!(
        seen.into_inner().unwrap(),
        vec![(0, true), (1, true), (2, false), (3, true)]
    );
}

#[test]
fn test_parallel_run_keeps_registration_order() {
    let project = fake_project(FAKE_ARXC);
    let mut registry = CaseRegistry::with_builtin_cases(fake_config(project.path()));
    for i in 0..8 {
        registry.register(TestCase::new(
            format!("version_{}", i),
            registry.compiler_invocation(["--version"]),
            "0.1.0",
        ));
    }

    let outcomes = registry.run_all(true, |_, _| {});

    let names: Vec<_> = outcomes.iter().map(|o| o.case.name.clone()).collect();
    let registered: Vec<_> = registry.cases().iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, registered);
    assert!(outcomes.iter().all(|o| o.passed()));
}

#[test]
fn test_empty_expectation_always_passes() {
    let project = fake_project("true");
    let registry = CaseRegistry::new(fake_config(project.path()));
    let test_case = TestCase::new("silent", registry.compiler_invocation(["--help"]), "");

    let outcome = registry.evaluate(&test_case);

    assert!(outcome.passed());
}

#[test]
fn test_empty_output_never_matches() {
    let project = fake_project("true");
    let registry = CaseRegistry::with_builtin_cases(fake_config(project.path()));

    let outcome = registry.evaluate(registry.get("help").unwrap());

    assert!(!outcome.passed());
    assert_eq!(
        outcome.diagnostic_message().as_deref(),
        Some("expected output not found. Got: ")
    );
}

#[test]
fn test_expected_text_on_stderr_with_crash_still_passes() {
    let project = fake_project("echo 'arxc version 0.1.0' 1>&2; exit 139");
    let registry = CaseRegistry::with_builtin_cases(fake_config(project.path()));

    let outcome = registry.evaluate(registry.get("version").unwrap());

    assert!(outcome.passed());
    assert_eq!(outcome.exit_code, Some(139));
}

#[test]
fn test_evaluating_twice_gives_same_outcome() {
    let project = fake_project(FAKE_ARXC);
    let registry = CaseRegistry::new(fake_config(project.path()));
    let test_case = TestCase::new("version", registry.compiler_invocation(["--version"]), "9.9.9");

    let first = registry.evaluate(&test_case);
    let second = registry.evaluate(&test_case);

    assert_eq!(first.passed(), second.passed());
    assert_eq!(first.diagnostic_message(), second.diagnostic_message());
    assert_eq!(first.exit_code, second.exit_code);
}

#[test]
fn test_shell_case_sees_compiler_path() {
    let project = fake_project(FAKE_ARXC);
    let registry = CaseRegistry::new(fake_config(project.path()));
    let test_case = TestCase::new(
        "piped_version",
        registry.config().shell_invocation("$ARXC --version | tr 'a-z' 'A-Z'"),
        "ARXC VERSION 0.1.0",
    );

    let outcome = registry.evaluate(&test_case);

    assert!(outcome.passed(), "{:?}", outcome.diagnostic_message());
}
