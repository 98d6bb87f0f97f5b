use crate::ascii_tree;
pub use crate::ascii_tree::Tree::{self, Leaf, Node};
use crate::test_result::{CaseFailure, CaseOutcome};
use crate::utils::string;
use std::fmt::Error;

pub fn draw_tree(tree: &Tree) -> Result<String, Error> {
    let mut output = String::new();
    ascii_tree::write_tree(&mut output, tree)?;
    Ok(output)
}

pub fn text_block(content: &str) -> String {
    let prefixed_content = string::indent_with("│ ", content);

    if content.ends_with('\n') {
        format!("╭\n{}╰", prefixed_content)
    } else {
        format!("╭\n{}\n╰ (No newline at end)", prefixed_content)
    }
}

// OUTCOME FORMATTING

pub fn tree_from_outcome(outcome: &CaseOutcome) -> Vec<Tree> {
    let mut categories = vec![Node(
        String::from("Command"),
        vec![Leaf(vec![outcome.case.command_line()])],
    )];

    match outcome.failure() {
        None => {}
        Some(CaseFailure::SpawnFailure(err)) => {
            categories.push(Node(
                String::from("Failed to run command"),
                vec![Leaf(vec![err.to_string()])],
            ));
        }
        Some(CaseFailure::ContentMismatch { expected, got }) => {
            categories.push(Node(
                String::from("Expected output not found"),
                show_containment(expected, got),
            ));
        }
    }

    if let Some(exit_code) = outcome.exit_code {
        if !outcome.passed() {
            categories.push(Node(
                String::from("Exit code (not checked)"),
                vec![Leaf(vec![exit_code.to_string()])],
            ));
        }
    }

    categories
}

fn show_containment(expected: &str, got: &str) -> Vec<Tree> {
    let expected_lines = string_to_lines(&format!("Expected to contain\n{}", text_block(expected)));
    let got_lines = string_to_lines(&format!("Got\n{}", text_block(got)));

    vec![Leaf(expected_lines), Leaf(got_lines)]
}

fn string_to_lines(str: &str) -> Vec<String> {
    str.lines().map(|x| x.to_owned()).collect()
}

// TESTS
