use crate::utils::string::quote_arg;
use itertools::Itertools;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// A named command paired with the text its output must contain
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub description: Option<String>,
    pub invocation: Invocation,
    pub expected_substring: String,
}

impl TestCase {
    pub fn new<N, E>(name: N, invocation: Invocation, expected_substring: E) -> TestCase
    where
        N: Into<String>,
        E: Into<String>,
    {
        TestCase {
            name: name.into(),
            description: None,
            invocation,
            expected_substring: expected_substring.into(),
        }
    }

    pub fn with_description<D>(mut self, description: D) -> TestCase
    where
        D: Into<String>,
    {
        self.description = Some(description.into());
        self
    }

    /// The command as it would be typed in a shell
    pub fn command_line(&self) -> String {
        self.invocation.to_string()
    }

    pub fn label(&self) -> String {
        match &self.description {
            Some(description) => format!("{} - {}", self.name, description),
            None => self.name.clone(),
        }
    }
}

/// How the child process is started
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    /// Spawn `program` with an argument vector. No shell is involved.
    Direct {
        program: PathBuf,
        arguments: Vec<String>,
    },
    /// Run `script` with `sh -c`, with `env` added to the environment.
    Shell {
        script: String,
        env: Vec<(String, String)>,
    },
}

impl Invocation {
    pub fn direct<P, I, S>(program: P, arguments: I) -> Invocation
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation::Direct {
            program: program.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn shell<S>(script: S) -> Invocation
    where
        S: Into<String>,
    {
        Invocation::Shell {
            script: script.into(),
            env: vec![],
        }
    }
}

impl Display for Invocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Invocation::Direct { program, arguments } => {
                let program = program.to_string_lossy();
                let words = std::iter::once(&*program)
                    .chain(arguments.iter().map(String::as_str))
                    .map(quote_arg)
                    .join(" ");
                write!(f, "{}", words)
            }
            Invocation::Shell { script, env: _ } => {
                write!(f, "{} -c {}", crate::process_runner::SHELL, quote_arg(script))
            }
        }
    }
}
