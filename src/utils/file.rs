use relative_path::RelativePathBuf;
use std::path::{Path, PathBuf};

/// Find absolute path to executable
///
/// First looks for executable in local directory (`in_dir`).
/// Otherwise, looks for executable in PATH.
pub fn find_executable_path<P>(binary_name: &str, in_dir: P) -> Result<PathBuf, which::Error>
where
    P: AsRef<Path>,
{
    let paths = in_dir.as_ref().as_os_str();

    // Search local directory
    let mut local_executables = which::which_in_global(binary_name, Some(paths))?;
    if let Some(path) = local_executables.next() {
        return Ok(path);
    }

    // Search PATH
    which::which(binary_name)
}

/// Whether `program` names a file rather than something to look up in PATH
pub fn is_path_like(program: &str) -> bool {
    program.contains(std::path::MAIN_SEPARATOR) || program.contains('/')
}

/// Express `path` relative to `base`, if possible
pub fn relative_to(path: &Path, base: &Path) -> Option<RelativePathBuf> {
    if path.is_relative() {
        RelativePathBuf::from_path(path).ok()
    } else {
        let path_diff = pathdiff::diff_paths(path, base)?;
        RelativePathBuf::from_path(path_diff).ok()
    }
}
