use itertools::Itertools;

pub fn indent_lines(input: &str, indent_level: usize) -> String {
    indent_with(&" ".repeat(indent_level), input)
}

/// Prefix every line in `input` with `prefix`
///
/// A trailing newline is kept but does not start a new prefixed line.
pub fn indent_with(prefix: &str, input: &str) -> String {
    let body = input.strip_suffix('\n').unwrap_or(input);

    let mut output = body
        .split('\n')
        .map(|line| format!("{}{}", prefix, line))
        .join("\n");

    if input.ends_with('\n') {
        output.push('\n')
    }

    output
}

/// Quote a single argument for display in a command line
///
/// Only used for reporting. Commands are never passed through a shell.
pub fn quote_arg(arg: &str) -> String {
    let is_plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c));

    if is_plain {
        arg.to_owned()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
