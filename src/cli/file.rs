use arxc_conformance::suite_file::SUITE_FILE_SUFFIX;
use arxc_conformance::utils::file as file_utils;
use relative_path::RelativePathBuf;
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

/// Expand `--suite` arguments into suite files, relative to `current_dir`
///
/// Directories are searched recursively for `*.suite.toml`. A pattern that
/// matches nothing is kept as-is so that reading it reports the problem.
pub fn expand_suite_paths(
    patterns: &[String],
    current_dir: &Path,
) -> Result<BTreeSet<RelativePathBuf>, LocateFileError> {
    let mut files = BTreeSet::new();

    for pattern in patterns {
        let found_suite_files = locate_suite_files(pattern)?;

        if found_suite_files.is_empty() {
            if let Some(path) = file_utils::relative_to(Path::new(pattern), current_dir) {
                files.insert(path);
            }
        }

        for found_suite_file in found_suite_files {
            if let Some(path) = file_utils::relative_to(&found_suite_file, current_dir) {
                files.insert(path);
            }
        }
    }

    Ok(files)
}

#[derive(Debug)]
pub enum LocateFileError {
    InvalidPattern(glob::PatternError),
    InvalidEntry(glob::GlobError),
}

impl Display for LocateFileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern(err) => write!(f, "Invalid suite pattern: {}", err),
            Self::InvalidEntry(err) => write!(f, "Failed to read suite path: {}", err),
        }
    }
}

fn locate_suite_files(pattern: &str) -> Result<Vec<PathBuf>, LocateFileError> {
    let mut output = vec![];

    let entries = glob::glob(pattern).map_err(LocateFileError::InvalidPattern)?;
    for entry in entries {
        let e = entry.map_err(LocateFileError::InvalidEntry)?;
        if e.is_file() {
            output.push(e);
        } else if e.is_dir() {
            let search_path = e.join(format!("**/*{}", SUITE_FILE_SUFFIX));
            if let Some(search_path) = search_path.to_str() {
                let found_suite_files = locate_suite_files(search_path)?;
                output.extend(found_suite_files);
            }
        }
    }

    Ok(output)
}
