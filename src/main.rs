mod cli;

use arxc_conformance::registry::CaseRegistry;
use arxc_conformance::suite_file;
use arxc_conformance::test_runner;
use std::env;
use std::process::ExitCode;

const EXIT_FAILED_TESTS: u8 = 1;
const EXIT_INVALID_CONFIG: u8 = 2;

fn main() -> ExitCode {
    let args = cli::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let current_dir = match env::current_dir() {
        Ok(current_dir) => current_dir,
        Err(err) => {
            cli::error::print_message("Failed to get current directory", &err.to_string());
            return ExitCode::from(EXIT_INVALID_CONFIG);
        }
    };

    let mut registry = CaseRegistry::with_builtin_cases(args.harness_config());

    let suite_files = match cli::file::expand_suite_paths(&args.suites, &current_dir) {
        Ok(suite_files) => suite_files,
        Err(err) => {
            cli::error::print_message("Failed to locate suite files", &err.to_string());
            return ExitCode::from(EXIT_INVALID_CONFIG);
        }
    };

    let mut any_invalid_suite_files = false;
    for source_file in &suite_files {
        let source_path = source_file.to_logical_path(&current_dir);
        match suite_file::parse_suite_file(&source_path, registry.config()) {
            Ok(test_cases) => {
                for test_case in test_cases {
                    registry.register(test_case);
                }
            }
            Err(err) => {
                cli::error::print_suite_file_error(source_file, &err);
                any_invalid_suite_files = true;
            }
        }
    }

    if any_invalid_suite_files {
        return ExitCode::from(EXIT_INVALID_CONFIG);
    }

    let report_config = args.report_config(registry.len());
    let outcomes =
        test_runner::run_test_cases(&report_config, &registry, args.run_tests_in_parallel);

    if test_runner::all_passed(&outcomes) {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_FAILED_TESTS)
    }
}
