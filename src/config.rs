use crate::test_case::Invocation;
use std::path::{Path, PathBuf};

/// Root of the compiler tree, relative to where the harness lives (`testsuite/cli`)
pub const PROJECT_ROOT: &str = "../../";
/// Directory under the project root that holds build outputs
pub const OUTPUT_DIR: &str = "out/";
pub const BINARY_NAME: &str = "arxc";
/// Environment variable that shell cases use to find the compiler
pub const COMPILER_ENV_VAR: &str = "ARXC";

/// Where the compiler lives and how to start it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    pub project_root: PathBuf,
    pub output_dir: PathBuf,
    pub binary_name: String,
    /// Used instead of `project_root/output_dir/binary_name` when set
    pub compiler: Option<PathBuf>,
    /// Program that receives the compiler path as its first argument, e.g. `sh`
    pub interpreter: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            project_root: PathBuf::from(PROJECT_ROOT),
            output_dir: PathBuf::from(OUTPUT_DIR),
            binary_name: String::from(BINARY_NAME),
            compiler: None,
            interpreter: None,
        }
    }
}

impl HarnessConfig {
    pub fn new<P>(project_root: P) -> HarnessConfig
    where
        P: Into<PathBuf>,
    {
        HarnessConfig {
            project_root: project_root.into(),
            ..HarnessConfig::default()
        }
    }

    pub fn with_output_dir<P>(mut self, output_dir: P) -> HarnessConfig
    where
        P: Into<PathBuf>,
    {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_binary_name<S>(mut self, binary_name: S) -> HarnessConfig
    where
        S: Into<String>,
    {
        self.binary_name = binary_name.into();
        self
    }

    pub fn with_compiler<P>(mut self, compiler: P) -> HarnessConfig
    where
        P: Into<PathBuf>,
    {
        self.compiler = Some(compiler.into());
        self
    }

    pub fn with_interpreter<P>(mut self, interpreter: P) -> HarnessConfig
    where
        P: Into<PathBuf>,
    {
        self.interpreter = Some(interpreter.into());
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.project_root.join(&self.output_dir)
    }

    pub fn binary_path(&self) -> PathBuf {
        match &self.compiler {
            Some(compiler) => compiler.clone(),
            None => self.output_path().join(&self.binary_name),
        }
    }

    /// Run the compiler with `arguments`, through the interpreter if one is set
    pub fn compiler_invocation<I, S>(&self, arguments: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let arguments: Vec<String> = arguments.into_iter().map(Into::into).collect();

        match &self.interpreter {
            Some(interpreter) => {
                let binary_path = path_to_string(&self.binary_path());
                Invocation::direct(
                    interpreter.clone(),
                    std::iter::once(binary_path).chain(arguments),
                )
            }
            None => Invocation::direct(self.binary_path(), arguments),
        }
    }

    /// Run `script` with `sh -c`, with the compiler path in `$ARXC`
    pub fn shell_invocation<S>(&self, script: S) -> Invocation
    where
        S: Into<String>,
    {
        let compiler = match &self.interpreter {
            Some(interpreter) => format!(
                "{} {}",
                path_to_string(interpreter),
                path_to_string(&self.binary_path())
            ),
            None => path_to_string(&self.binary_path()),
        };

        Invocation::Shell {
            script: script.into(),
            env: vec![(String::from(COMPILER_ENV_VAR), compiler)],
        }
    }
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
