#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// One student's artifact set for one lab task, the unit of grading.
/// Immutable once discovered; a submission lives for exactly one grading
/// pass.
#[derive(Debug, Clone)]
pub struct Submission {
    /// Top-level group directory the submission was discovered under.
    group:   String,
    /// Student identifier, taken from the directory name.
    student: String,
    /// Task identifier, e.g. `task_01`.
    task:    String,
    /// Relative path the submission was discovered as.
    rel:     String,
    /// Absolute root of the submission.
    root:    PathBuf,
}

impl Submission {
    /// Parses a `{group}/{student}/{task}` path relative to `repo_root` into
    /// a submission.
    pub fn from_path(repo_root: &Path, rel: &str) -> Result<Self> {
        let mut parts = rel.split('/').filter(|p| !p.is_empty());
        let (group, student, task) = match (parts.next(), parts.next(), parts.next()) {
            (Some(g), Some(s), Some(t)) => (g, s, t),
            _ => bail!("submission path `{rel}` is not shaped {{group}}/{{student}}/{{task}}"),
        };
        if parts.next().is_some() {
            bail!("submission path `{rel}` has trailing components");
        }

        Ok(Self {
            group:   group.to_string(),
            student: student.to_string(),
            task:    task.to_string(),
            rel:     rel.trim_matches('/').to_string(),
            root:    repo_root.join(group).join(student).join(task),
        })
    }

    /// Returns the group directory name.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Returns the student identifier.
    pub fn student(&self) -> &str {
        &self.student
    }

    /// Returns the task identifier.
    pub fn task(&self) -> &str {
        &self.task
    }

    /// Returns the relative path the submission was discovered as.
    pub fn rel_path(&self) -> &str {
        &self.rel
    }

    /// Returns the absolute submission root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the directory holding the submission's sources.
    pub fn source_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    /// Returns the directory holding the submission's documentation.
    pub fn doc_dir(&self) -> PathBuf {
        self.root.join("doc")
    }

    /// Returns the path of the primary markup file.
    pub fn markup_path(&self) -> PathBuf {
        self.source_dir().join("index.html")
    }

    /// Returns the path of the primary stylesheet.
    pub fn stylesheet_path(&self) -> PathBuf {
        self.source_dir().join("styles.css")
    }

    /// Returns the path of the documentation report.
    pub fn doc_path(&self) -> PathBuf {
        self.doc_dir().join("readme.md")
    }

    /// Reads the primary markup file, if it exists and is readable.
    pub fn read_markup(&self) -> Option<String> {
        std::fs::read_to_string(self.markup_path()).ok()
    }

    /// Reads the primary stylesheet, if it exists and is readable.
    pub fn read_stylesheet(&self) -> Option<String> {
        std::fs::read_to_string(self.stylesheet_path()).ok()
    }

    /// Reads the documentation report, if it exists and is readable.
    pub fn read_doc(&self) -> Option<String> {
        std::fs::read_to_string(self.doc_path()).ok()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::Submission;

    #[test]
    fn parses_the_three_path_components() {
        let submission =
            Submission::from_path(Path::new("/repo"), "students/alice/task_01").unwrap();
        assert_eq!(submission.group(), "students");
        assert_eq!(submission.student(), "alice");
        assert_eq!(submission.task(), "task_01");
        assert_eq!(submission.markup_path(), Path::new("/repo/students/alice/task_01/src/index.html"));
        assert_eq!(submission.doc_path(), Path::new("/repo/students/alice/task_01/doc/readme.md"));
    }

    #[test]
    fn tolerates_surrounding_slashes() {
        let submission =
            Submission::from_path(Path::new("/repo"), "/students/alice/task_01/").unwrap();
        assert_eq!(submission.rel_path(), "students/alice/task_01");
    }

    #[test]
    fn rejects_short_paths() {
        assert!(Submission::from_path(Path::new("/repo"), "students/alice").is_err());
        assert!(Submission::from_path(Path::new("/repo"), "").is_err());
    }

    #[test]
    fn rejects_trailing_components() {
        assert!(Submission::from_path(Path::new("/repo"), "students/alice/task_01/src").is_err());
    }
}
