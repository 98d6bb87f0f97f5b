use crate::utils::string;

pub fn print_version() {
    println!("TAP version 14")
}

pub fn print_plan(start: usize, end: usize) {
    println!("{}..{}", start, end)
}

pub fn print_ok(test_number: usize, message: &str, indent_level: usize) {
    println!(
        "ok     {:>indent$} - {}",
        test_number,
        message,
        indent = indent_level
    )
}

pub fn print_not_ok(test_number: usize, message: &str, diagnostics: &str, indent_level: usize) {
    println!(
        "not ok {:>indent$} - {}",
        test_number,
        message,
        indent = indent_level
    );
    if !diagnostics.is_empty() {
        print_diagnostics(diagnostics)
    }
}

pub fn print_diagnostics(diagnostics: &str) {
    println!("{}", diagnostics_block(diagnostics));
}

/// YAML block for a failed test, indented two spaces below the test line
pub fn diagnostics_block(diagnostics: &str) -> String {
    let code_block = format!("---\n{}\n...", diagnostics.trim_end_matches('\n'));
    string::indent_lines(&code_block, 2)
}

/// A YAML key with a literal block scalar value
pub fn yaml_literal(key: &str, value: &str) -> String {
    format!("{}: |\n{}", key, string::indent_lines(value, 2))
}
