#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::glob;
use which::which;

/// A glob utility function to find paths to files with certain extension
///
/// * `extension`: the file extension to find paths for
/// * `search_depth`: how many folders deep to search for
/// * `root_dir`: the root directory where search starts
pub fn find_files(extension: &str, search_depth: i8, root_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut pattern = root_dir.to_path_buf();

    for _ in 0..search_depth {
        pattern.push("**");
    }

    pattern.push(format!("*.{extension}"));
    let pattern = pattern
        .to_str()
        .context("Could not convert root_dir to string")?
        .to_string();

    Ok(glob(&pattern)
        .context("Could not create glob")?
        .filter_map(Result::ok)
        .collect())
}

/// Counts image files under `root_dir`, searching a couple of levels deep.
/// Lookup failures count as zero matches; screenshots are an artifact check,
/// not a reason to fail a submission.
pub fn count_images(root_dir: &Path) -> usize {
    ["png", "jpg", "jpeg", "webp"]
        .iter()
        .map(|ext| find_files(ext, 2, root_dir).map(|v| v.len()).unwrap_or(0))
        .sum()
}

/// Finds the page-audit CLI: an explicit override first, then `lighthouse` on
/// the path, then `npx lighthouse`. Returns the program and the argument
/// prefix to place before the audit arguments.
pub fn audit_command(override_path: Option<&Path>) -> Option<(OsString, Vec<OsString>)> {
    if let Some(path) = override_path {
        return Some((path.as_os_str().to_owned(), vec![]));
    }

    if let Ok(path) = which("lighthouse") {
        return Some((path.into_os_string(), vec![]));
    }

    which("npx")
        .ok()
        .map(|path| (path.into_os_string(), vec![OsString::from("lighthouse")]))
}

/// Truncates `text` to at most `max` characters, appending a marker when
/// anything was cut.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(max).collect();
    truncated.push_str("...[TRUNCATED]");
    truncated
}
