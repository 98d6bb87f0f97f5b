#![allow(dead_code)]

use arxc_conformance::config::HarnessConfig;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Behaves like a healthy `arxc` build for `--help` and `--version`
pub const FAKE_ARXC: &str = r#"
case "$1" in
  --help)
    echo "Usage: arxc [options] <source_file>"
    echo ""
    echo "  -o, --output    Output file"
    ;;
  --version)
    echo "arxc version 0.1.0"
    ;;
  *)
    echo "arxc: unknown option '$1'" 1>&2
    exit 1
    ;;
esac
"#;

/// Creates `<root>/out/arxc` from `script`
///
/// The script is run through `sh`, so it never has to be executable.
pub fn fake_project(script: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_compiler(dir.path(), script);
    dir
}

pub fn write_compiler(project_root: &Path, script: &str) {
    let out_dir = project_root.join("out");
    fs::create_dir_all(&out_dir).unwrap();
    fs::write(out_dir.join("arxc"), script).unwrap();
}

pub fn fake_config(project_root: &Path) -> HarnessConfig {
    HarnessConfig::new(project_root)
        .with_output_dir("out")
        .with_interpreter("sh")
}
