use crate::process_runner;
use crate::test_case::TestCase;
use crate::test_result::{CaseFailure, CaseOutcome, ExecutionResult, Verdict};

/// Run `test_case` once and decide whether it passed
pub fn evaluate(test_case: &TestCase) -> CaseOutcome<'_> {
    let execution = process_runner::run(&test_case.invocation);
    judge(test_case, execution)
}

/// Derive the outcome of `test_case` from its single execution
pub fn judge(test_case: &TestCase, execution: ExecutionResult) -> CaseOutcome<'_> {
    let ExecutionResult {
        combined_output,
        exit_code,
        exit_error,
    } = execution;

    let verdict = match exit_error {
        Some(err) => Verdict::Failed(CaseFailure::SpawnFailure(err)),
        None => match check(&combined_output, &test_case.expected_substring) {
            Ok(()) => Verdict::Passed,
            Err(failure) => Verdict::Failed(failure),
        },
    };

    CaseOutcome {
        case: test_case,
        verdict,
        exit_code,
    }
}

/// Literal, case-sensitive containment. An empty expectation always matches.
pub fn check(output: &str, expected: &str) -> Result<(), CaseFailure> {
    if output.contains(expected) {
        Ok(())
    } else {
        Err(CaseFailure::ContentMismatch {
            expected: expected.to_owned(),
            got: output.to_owned(),
        })
    }
}
