use arxc_conformance::formats::tree;
use arxc_conformance::formats::tree::Tree::{self, Leaf, Node};
use arxc_conformance::suite_file::{SuiteFileError, TestCaseValidationError};
use relative_path::RelativePathBuf;
use std::collections::BTreeSet;

pub fn print_suite_file_error(source_file: &RelativePathBuf, error: &SuiteFileError) {
    let errors = match error {
        SuiteFileError::FailedToReadFile(_) => vec![str_to_tree("❌ Failed to read file")],
        SuiteFileError::FailedToParseSuiteFile(err) => vec![Node(
            String::from("❌ Failed to parse suite file"),
            vec![Leaf(err.to_string().lines().map(String::from).collect())],
        )],
        SuiteFileError::InvalidTestCases(validation_errors) => {
            vec![Node(
                String::from("Validation errors"),
                validation_errors_map(validation_errors),
            )]
        }
    };

    print_tree(Node(suite_heading(source_file), errors));
}

pub fn print_message(heading: &str, msg: &str) {
    print_tree(Node(heading.to_owned(), vec![str_to_tree(msg)]));
}

fn print_tree(tree: Tree) {
    let content = tree::draw_tree(&tree).unwrap_or_else(|_| String::from("Failed to draw tree\n"));

    eprint!("{}", content); // Already contains newline
    eprintln!()
}

fn suite_heading(source_file: &RelativePathBuf) -> String {
    format!("📋 {}", source_file)
}

fn validation_errors_map(
    validation_errors: &[(String, BTreeSet<TestCaseValidationError>)],
) -> Vec<Tree> {
    validation_errors
        .iter()
        .map(|(name, errs)| {
            Node(
                name.clone(),
                errs.iter()
                    .map(|err| str_to_tree(&format!("❌ {}", err.message())))
                    .collect(),
            )
        })
        .collect()
}

fn str_to_tree(msg: &str) -> Tree {
    Leaf(vec![msg.to_owned()])
}
