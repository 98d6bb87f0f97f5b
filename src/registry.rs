use crate::builtin;
use crate::config::HarnessConfig;
use crate::matcher;
use crate::test_case::{Invocation, TestCase};
use crate::test_result::CaseOutcome;
use rayon::prelude::*;

/// The set of cases in one suite, bound to the compiler they run against
pub struct CaseRegistry {
    config: HarnessConfig,
    cases: Vec<TestCase>,
}

impl CaseRegistry {
    pub fn new(config: HarnessConfig) -> CaseRegistry {
        CaseRegistry {
            config,
            cases: vec![],
        }
    }

    /// Registry preloaded with the `--help` and `--version` cases
    pub fn with_builtin_cases(config: HarnessConfig) -> CaseRegistry {
        let mut registry = CaseRegistry::new(config);
        for test_case in builtin::cases(&registry.config) {
            registry.register(test_case);
        }
        registry
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn compiler_invocation<I, S>(&self, arguments: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.compiler_invocation(arguments)
    }

    /// Add a case. A case with the same name is replaced in place and returned.
    pub fn register(&mut self, test_case: TestCase) -> Option<TestCase> {
        match self.cases.iter_mut().find(|c| c.name == test_case.name) {
            Some(existing) => Some(std::mem::replace(existing, test_case)),
            None => {
                self.cases.push(test_case);
                None
            }
        }
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn get(&self, name: &str) -> Option<&TestCase> {
        self.cases.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn evaluate<'a>(&self, test_case: &'a TestCase) -> CaseOutcome<'a> {
        matcher::evaluate(test_case)
    }

    /// Evaluate every case exactly once
    ///
    /// A failing case never stops the run. `on_outcome` sees each outcome as
    /// soon as it is known, together with the case's registration index. The
    /// returned outcomes are in registration order either way.
    pub fn run_all<F>(&self, run_in_parallel: bool, on_outcome: F) -> Vec<CaseOutcome<'_>>
    where
        F: Fn(usize, &CaseOutcome<'_>) + Sync,
    {
        if run_in_parallel {
            self.cases
                .par_iter()
                .enumerate()
                .map(|(i, test_case)| evaluate_and_notify(i, test_case, &on_outcome))
                .collect()
        } else {
            self.cases
                .iter()
                .enumerate()
                .map(|(i, test_case)| evaluate_and_notify(i, test_case, &on_outcome))
                .collect()
        }
    }
}

fn evaluate_and_notify<'a, F>(index: usize, test_case: &'a TestCase, on_outcome: &F) -> CaseOutcome<'a>
where
    F: Fn(usize, &CaseOutcome<'_>),
{
    let outcome = matcher::evaluate(test_case);
    on_outcome(index, &outcome);
    outcome
}
