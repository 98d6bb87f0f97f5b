use crate::process_runner::RunError;
use crate::test_case::TestCase;
use thiserror::Error;

/// Everything observed from one run of a command
#[derive(Debug)]
pub struct ExecutionResult {
    pub combined_output: String,
    /// Recorded for reporting only; it never decides the verdict
    pub exit_code: Option<i32>,
    pub exit_error: Option<RunError>,
}

/// Verdict for one evaluated test case
#[derive(Debug)]
pub struct CaseOutcome<'a> {
    pub case: &'a TestCase,
    pub verdict: Verdict,
    pub exit_code: Option<i32>,
}

impl CaseOutcome<'_> {
    pub fn passed(&self) -> bool {
        matches!(self.verdict, Verdict::Passed)
    }

    pub fn failure(&self) -> Option<&CaseFailure> {
        match &self.verdict {
            Verdict::Passed => None,
            Verdict::Failed(failure) => Some(failure),
        }
    }

    /// Human-readable reason for a failure, including the actual output
    pub fn diagnostic_message(&self) -> Option<String> {
        self.failure().map(ToString::to_string)
    }
}

#[derive(Debug)]
pub enum Verdict {
    Passed,
    Failed(CaseFailure),
}

#[derive(Debug, Error)]
pub enum CaseFailure {
    #[error("could not run command: {0}")]
    SpawnFailure(#[source] RunError),
    #[error("expected output not found. Got: {got}")]
    ContentMismatch { expected: String, got: String },
}
