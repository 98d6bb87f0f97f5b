// Adapted from the crates.io package: ascii_tree v0.1.1
// Original author: d.maetzke@bpressure.net
// License: MIT

//! Write an ascii tree

use std::fmt;
use std::fmt::Write;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree {
    Node(String, Vec<Tree>),
    Leaf(Vec<String>),
}

const EMPTY: &str = "   ";
const EDGE: &str = "└─ ";
const PIPE: &str = "│  ";
const BRANCH: &str = "├─ ";

/// writes a tree in an ascii tree to the writer
pub fn write_tree(f: &mut dyn Write, tree: &Tree) -> fmt::Result {
    write_tree_element(f, tree, &[])
}

// `level` holds, per depth, how many siblings remain including this one
fn write_tree_element(f: &mut dyn Write, tree: &Tree, level: &[usize]) -> fmt::Result {
    let mut continuation = String::new();
    for (pos, remaining) in level.iter().enumerate() {
        let is_own_row = pos + 1 == level.len();
        let is_last_sibling = *remaining == 1;

        let marker = match (is_last_sibling, is_own_row) {
            (true, true) => EDGE,
            (true, false) => EMPTY,
            (false, true) => BRANCH,
            (false, false) => PIPE,
        };
        f.write_str(marker)?;
        continuation.push_str(if is_last_sibling { EMPTY } else { PIPE });
    }

    match tree {
        Tree::Node(title, children) => {
            writeln!(f, "{}", title)?;
            for (i, child) in children.iter().enumerate() {
                let mut next_level = level.to_vec();
                next_level.push(children.len() - i);
                write_tree_element(f, child, &next_level)?;
            }
        }
        Tree::Leaf(lines) => {
            for (i, line) in lines.iter().enumerate() {
                if i == 0 {
                    writeln!(f, "{}", line)?
                } else {
                    writeln!(f, "{}{}", continuation, line)?
                }
            }
        }
    }

    Ok(())
}
