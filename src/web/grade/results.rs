#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use bon::Builder;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A structured result of one static check category: its sub-score plus
/// human-readable issue strings. Findings are pure, deterministic functions
/// of the submission's text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Category name, e.g. `semantics`.
    pub category: String,
    /// Sub-score earned, already clamped to the category ceiling.
    pub score:    u32,
    /// Issues found, empty when the category is clean.
    pub issues:   Vec<String>,
}

/// Outcome of the external page audit. Scores are bounded to `[0, 100]`; a
/// failed or unavailable audit carries zeros and a reason, never an error the
/// caller has to handle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditResult {
    /// Lighthouse accessibility category score.
    pub accessibility:  u32,
    /// Lighthouse best-practices category score.
    pub best_practices: u32,
    /// Why the audit produced no real scores, when it could not run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error:          Option<String>,
}

impl AuditResult {
    /// Builds a zero-valued result recording why the audit was unavailable.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            accessibility:  0,
            best_practices: 0,
            error:          Some(reason.into()),
        }
    }
}

/// One category line in a score breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Category key, e.g. `responsive`.
    pub key:   String,
    /// Points earned in the category.
    pub score: u32,
}

impl CategoryScore {
    /// Creates a breakdown line.
    pub fn new(key: &str, score: u32) -> Self {
        Self {
            key: key.to_string(),
            score,
        }
    }
}

#[derive(Tabled, Clone, Debug, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
/// A struct to store one submission's grading results and display them.
/// Produced once per submission; immutable thereafter.
pub struct GradeResult {
    #[tabled(rename = "Student")]
    /// * `student`: the student identifier
    pub student:         String,
    #[tabled(rename = "Task")]
    /// * `task`: the task identifier
    pub task:            String,
    #[tabled(rename = "Score")]
    /// * `score`: final score, clamped to `[0, 100]`
    pub score:           u32,
    #[tabled(skip)]
    /// * `raw_score`: pre-clamp total; bonuses can push this above 100
    pub raw_score:       u32,
    #[tabled(skip)]
    /// * `bonus`: bonus subtotal included in the raw score, capped
    pub bonus:           u32,
    #[tabled(skip)]
    /// * `details`: per-category breakdown
    pub details:         Vec<CategoryScore>,
    #[tabled(skip)]
    /// * `bonuses`: names of detected bonus features
    pub bonuses:         Vec<String>,
    #[tabled(skip)]
    /// * `audit`: the dynamic audit outcome
    pub audit:           AuditResult,
    #[tabled(rename = "Report")]
    /// * `has_report`: whether the documentation report was present
    pub has_report:      bool,
    #[tabled(rename = "Published")]
    /// * `has_publication`: whether a publication link was found
    pub has_publication: bool,
    #[tabled(skip)]
    /// * `report_path`: where the rendered per-submission report was written
    pub report_path:     PathBuf,
}
