#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Advisory LLM reviewer adapter.
pub mod advisory;
/// Documentation and publication artifact checks.
pub mod artifacts;
/// Dynamic Lighthouse audit adapter.
pub mod audit;
/// Bonus feature detection.
pub mod bonus;
/// The HTML/CSS lab rubric.
pub mod html_css;
/// Per-submission Markdown report rendering.
pub mod report;
/// Responsive-coverage and focus-visibility inspection.
pub mod responsive;
/// Shared grade result types.
pub mod results;
/// Score aggregation with per-category caps.
pub mod score;
/// Semantic-structure inspection.
pub mod semantics;

pub use advisory::{ADVISORY_UNAVAILABLE, request_review};
pub use artifacts::{ArtifactFacts, inspect_artifacts};
pub use audit::run_audit;
pub use bonus::detect_bonuses;
pub use html_css::HtmlCssRubric;
pub use report::{ReportInputs, render_submission_report};
pub use responsive::{
    BreakpointThresholds, StylesheetFacts, inspect_stylesheet, responsive_finding,
};
pub use results::{AuditResult, CategoryScore, Finding, GradeResult};
pub use score::{ScoreParts, Tally, aggregate};
pub use semantics::{SemanticsPolicy, inspect_semantics, markup_is_well_formed};
