//! The two command-line contract points every `arxc` build must satisfy.

use crate::config::HarnessConfig;
use crate::test_case::TestCase;

pub const EXPECTED_VERSION: &str = "0.1.0";

pub fn usage_line(binary_name: &str) -> String {
    format!("Usage: {} [options] <source_file>", binary_name)
}

pub fn cases(config: &HarnessConfig) -> Vec<TestCase> {
    vec![
        TestCase::new(
            "help",
            config.compiler_invocation(["--help"]),
            usage_line(&config.binary_name),
        )
        .with_description("--help prints the usage line"),
        TestCase::new(
            "version",
            config.compiler_invocation(["--version"]),
            EXPECTED_VERSION,
        )
        .with_description("--version prints the semantic version"),
    ]
}
