//! Conformance harness for the `arxc` compiler command line.
//!
//! A [`registry::CaseRegistry`] holds named test cases. Each case runs the
//! compiler once through the [`process_runner`] and passes when the combined
//! output contains the case's expected substring.

pub mod ascii_tree;
pub mod builtin;
pub mod config;
pub mod formats;
pub mod matcher;
pub mod process_runner;
pub mod registry;
pub mod suite_file;
pub mod test_case;
pub mod test_result;
pub mod test_runner;
pub mod utils;
