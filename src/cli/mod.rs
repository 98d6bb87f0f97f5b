pub mod error;
pub mod file;

use arxc_conformance::config::{self, HarnessConfig};
use arxc_conformance::test_runner::{ReportConfig, ReportFormat};
use arxc_conformance::utils::file as file_utils;
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

pub fn parse() -> Args {
    Args::parse()
}

/// Conformance tests for the arxc command line
#[derive(Parser)]
#[clap(bin_name = "arxc-conformance")]
pub struct Args {
    /// Root of the compiler tree
    #[arg(long, default_value = config::PROJECT_ROOT)]
    pub project_root: PathBuf,

    /// Directory below the project root containing the compiler
    #[arg(long, default_value = config::OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// File name of the compiler binary
    #[arg(long, default_value = config::BINARY_NAME)]
    pub binary_name: String,

    /// Path or name of the compiler, replacing the three options above
    #[arg(long)]
    pub compiler: Option<String>,

    /// Program to start the compiler with, e.g. `sh` for a script
    #[arg(long)]
    pub interpreter: Option<PathBuf>,

    /// Extra suite files, directories or glob patterns
    #[arg(long = "suite")]
    pub suites: Vec<String>,

    /// Options: summary, tap
    #[arg(long, default_value = "summary")]
    pub output_format: OutputFormat,

    /// Show all tests in summary, regardless of test status
    #[arg(long)]
    pub show_all_tests: bool,

    /// Run tests in parallel
    #[arg(long)]
    pub run_tests_in_parallel: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn harness_config(&self) -> HarnessConfig {
        let mut harness_config = HarnessConfig::new(&self.project_root)
            .with_output_dir(&self.output_dir)
            .with_binary_name(&self.binary_name);

        if let Some(compiler) = &self.compiler {
            harness_config = harness_config.with_compiler(self.resolve_compiler(compiler));
        }

        if let Some(interpreter) = &self.interpreter {
            harness_config = harness_config.with_interpreter(interpreter);
        }

        harness_config
    }

    // A bare name is looked up in the project root, then PATH. Unresolved names
    // are kept so the failure shows up as a failed case.
    fn resolve_compiler(&self, compiler: &str) -> PathBuf {
        if self.interpreter.is_some() || file_utils::is_path_like(compiler) {
            return PathBuf::from(compiler);
        }

        file_utils::find_executable_path(compiler, &self.project_root)
            .unwrap_or_else(|_| PathBuf::from(compiler))
    }

    pub fn report_config(&self, number_of_tests: usize) -> ReportConfig {
        let format = match self.output_format {
            OutputFormat::Summary => ReportFormat::Summary {
                show_all_tests: self.show_all_tests,
            },
            OutputFormat::Tap => ReportFormat::Tap,
        };

        ReportConfig {
            number_of_tests,
            format,
        }
    }
}

#[derive(Clone)]
pub enum OutputFormat {
    Summary,
    Tap,
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(format: &str) -> Result<Self, Self::Err> {
        match format {
            "summary" => Ok(Self::Summary),
            "tap" => Ok(Self::Tap),
            _ => Err("Invalid output format"),
        }
    }
}
