use crate::config::HarnessConfig;
use crate::test_case::TestCase;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// File name suffix used when searching a directory for suite files
pub const SUITE_FILE_SUFFIX: &str = ".suite.toml";

// READ SUITE FILE

#[derive(Debug, Error)]
pub enum SuiteFileError {
    #[error("failed to read suite file: {0}")]
    FailedToReadFile(#[source] io::Error),
    #[error("failed to parse suite file: {0}")]
    FailedToParseSuiteFile(#[source] toml::de::Error),
    #[error("{} invalid test case(s)", .0.len())]
    InvalidTestCases(Vec<(String, BTreeSet<TestCaseValidationError>)>),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TestCaseValidationError {
    InvocationRequired,
    ConflictingInvocations,
    EmptyShellScript,
    ExpectationRequired,
}

impl TestCaseValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvocationRequired => "Either 'arguments' or 'shell' is required",
            Self::ConflictingInvocations => "Only one of 'arguments' and 'shell' may be given",
            Self::EmptyShellScript => "The field 'shell' must not be empty",
            Self::ExpectationRequired => "The field 'expected_output' is required",
        }
    }
}

pub fn parse_suite_file(
    source_file: &Path,
    config: &HarnessConfig,
) -> Result<Vec<TestCase>, SuiteFileError> {
    let toml_content = fs::read_to_string(source_file).map_err(SuiteFileError::FailedToReadFile)?;
    parse_suite_str(&toml_content, config)
}

/// Build test cases from suite file contents
///
/// Cases are returned sorted by name. All cases are validated before any
/// error is returned.
pub fn parse_suite_str(
    toml_content: &str,
    config: &HarnessConfig,
) -> Result<Vec<TestCase>, SuiteFileError> {
    let suite = toml::from_str::<SuiteToml>(toml_content)
        .map_err(SuiteFileError::FailedToParseSuiteFile)?;

    let mut test_cases = vec![];
    let mut validation_errors = vec![];

    for (name, case_toml) in suite.tests {
        match build_test_case(name.clone(), case_toml, config) {
            Ok(test_case) => test_cases.push(test_case),
            Err(errs) => validation_errors.push((name, errs)),
        }
    }

    if validation_errors.is_empty() {
        Ok(test_cases)
    } else {
        Err(SuiteFileError::InvalidTestCases(validation_errors))
    }
}

// TOML SHAPE

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SuiteToml {
    #[serde(default)]
    tests: BTreeMap<String, TestCaseToml>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TestCaseToml {
    description: Option<String>,
    arguments: Option<Vec<String>>,
    shell: Option<String>,
    expected_output: Option<String>,
}

fn build_test_case(
    name: String,
    case_toml: TestCaseToml,
    config: &HarnessConfig,
) -> Result<TestCase, BTreeSet<TestCaseValidationError>> {
    let mut validation_errors = BTreeSet::new();

    let invocation = match (case_toml.arguments, case_toml.shell) {
        (Some(arguments), None) => Some(config.compiler_invocation(arguments)),
        (None, Some(script)) => {
            if script.trim().is_empty() {
                validation_errors.insert(TestCaseValidationError::EmptyShellScript);
                None
            } else {
                Some(config.shell_invocation(script))
            }
        }
        (Some(_), Some(_)) => {
            validation_errors.insert(TestCaseValidationError::ConflictingInvocations);
            None
        }
        (None, None) => {
            validation_errors.insert(TestCaseValidationError::InvocationRequired);
            None
        }
    };

    if case_toml.expected_output.is_none() {
        validation_errors.insert(TestCaseValidationError::ExpectationRequired);
    }

    match (invocation, case_toml.expected_output) {
        (Some(invocation), Some(expected_output)) if validation_errors.is_empty() => {
            let test_case = TestCase::new(name, invocation, expected_output);
            Ok(match case_toml.description {
                Some(description) => test_case.with_description(description),
                None => test_case,
            })
        }
        _ => Err(validation_errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_case::Invocation;
    use indoc::indoc;

    #[test]
    fn test_parse_argument_and_shell_cases() {
        let content = indoc! {r#"
            [tests.help]
            description = "prints usage"
            arguments = ["--help"]
            expected_output = "Usage: arxc [options] <source_file>"

            [tests.shell_version]
            shell = '"$ARXC" --version | head -n 1'
            expected_output = "0.1.0"
        "#};

        let test_cases = parse_suite_str(content, &HarnessConfig::default()).unwrap();

        assert_eq!(
            test_cases,
            vec![
                TestCase::new(
                    "help",
                    Invocation::direct("../../out/arxc", ["--help"]),
                    "Usage: arxc [options] <source_file>"
                )
                .with_description("prints usage"),
                TestCase::new(
                    "shell_version",
                    Invocation::Shell {
                        script: String::from("\"$ARXC\" --version | head -n 1"),
                        env: vec![(String::from("ARXC"), String::from("../../out/arxc"))],
                    },
                    "0.1.0"
                ),
            ]
        );
    }

    #[test]
    fn test_empty_expected_output_is_allowed() {
        let content = indoc! {r#"
            [tests.runs]
            arguments = []
            expected_output = ""
        "#};

        let test_cases = parse_suite_str(content, &HarnessConfig::default()).unwrap();

        assert_eq!(test_cases.len(), 1);
        assert_eq!(test_cases[0].expected_substring, "");
    }

    #[test]
    fn test_validation_errors_are_collected_per_case() {
        let content = indoc! {r#"
            [tests.both]
            arguments = ["--help"]
            shell = "true"
            expected_output = "Usage"

            [tests.neither]

            [tests.ok]
            arguments = ["--version"]
            expected_output = "0.1.0"
        "#};

        let err = parse_suite_str(content, &HarnessConfig::default()).unwrap_err();

        let SuiteFileError::InvalidTestCases(errors) = err else {
            panic!("expected validation errors");
        };
        assert_eq!(
            errors,
            vec![
                (
                    String::from("both"),
                    BTreeSet::from([TestCaseValidationError::ConflictingInvocations])
                ),
                (
                    String::from("neither"),
                    BTreeSet::from([
                        TestCaseValidationError::InvocationRequired,
                        TestCaseValidationError::ExpectationRequired,
                    ])
                ),
            ]
        );
    }

    #[test]
    fn test_empty_shell_script_is_invalid() {
        let content = indoc! {r#"
            [tests.blank]
            shell = "  "
            expected_output = "x"
        "#};

        let err = parse_suite_str(content, &HarnessConfig::default()).unwrap_err();

        assert!(matches!(err, SuiteFileError::InvalidTestCases(_)));
    }

    #[test]
    fn test_unknown_field_is_a_parse_error() {
        let content = indoc! {r#"
            [tests.help]
            arguments = ["--help"]
            expected_stdout = "Usage"
        "#};

        let err = parse_suite_str(content, &HarnessConfig::default()).unwrap_err();

        assert!(matches!(err, SuiteFileError::FailedToParseSuiteFile(_)));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = parse_suite_file(
            Path::new("/nonexistent/cli.suite.toml"),
            &HarnessConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, SuiteFileError::FailedToReadFile(_)));
    }
}
