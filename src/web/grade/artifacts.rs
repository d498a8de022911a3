#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::sync::OnceLock;

use regex::Regex;

use crate::{util::count_images, web::Submission};

/// Minimum number of screenshots expected alongside the documentation.
const MIN_SCREENSHOTS: usize = 3;

/// What the documentation/publication inspection learned about a submission.
#[derive(Debug, Clone, Default)]
pub struct ArtifactFacts {
    /// Whether `doc/readme.md` exists.
    pub has_report:      bool,
    /// Whether the report links a published page.
    pub has_publication: bool,
    /// Whether every expected artifact is present.
    pub ok:              bool,
    /// Missing artifacts, for the report.
    pub issues:          Vec<String>,
}

/// Matches links to the usual static publication hosts.
fn publication_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)(github\.io|netlify|vercel)").expect("host pattern"))
}

/// Inspects the submission's documentation directory: the report itself, a
/// publication link, and audit screenshots.
pub fn inspect_artifacts(submission: &Submission) -> ArtifactFacts {
    let doc = submission.read_doc();
    let has_report = doc.is_some();
    let doc_text = doc.unwrap_or_default();

    let mut issues = vec![];
    if !has_report {
        issues.push("missing doc/readme.md report".to_string());
    }

    let has_publication = publication_pattern().is_match(&doc_text);
    if !has_publication {
        issues.push("no publication link in the report".to_string());
    }

    let mentions_audit = doc_text.to_ascii_lowercase().contains("lighthouse");
    let screenshots = count_images(&submission.doc_dir());
    if !mentions_audit || screenshots < MIN_SCREENSHOTS {
        issues.push("missing audit/breakpoint screenshots".to_string());
    }

    ArtifactFacts {
        has_report,
        has_publication,
        ok: issues.is_empty(),
        issues,
    }
}
