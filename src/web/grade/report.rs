#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use itertools::Itertools;

use super::{
    artifacts::ArtifactFacts,
    responsive::StylesheetFacts,
    results::{AuditResult, Finding},
    score::Tally,
};
use crate::web::Submission;

/// Everything the per-submission Markdown report is rendered from.
pub struct ReportInputs<'a> {
    /// The graded submission.
    pub submission:   &'a Submission,
    /// Aggregated totals and breakdown.
    pub tally:        &'a Tally,
    /// The semantics finding.
    pub semantics:    &'a Finding,
    /// Stylesheet facts.
    pub sheet:        &'a StylesheetFacts,
    /// Documentation artifact facts.
    pub artifacts:    &'a ArtifactFacts,
    /// The dynamic audit outcome.
    pub audit:        &'a AuditResult,
    /// Detected bonus feature names.
    pub bonuses:      &'a [String],
    /// Whether the markup parsed without structural errors.
    pub markup_valid: bool,
    /// Advisory reviewer text, when available.
    pub advisory:     Option<&'a str>,
}

/// Renders the detailed per-submission report. Every submission gets one,
/// even in worst-case failure, so "no feedback" never happens silently.
pub fn render_submission_report(inputs: &ReportInputs<'_>) -> String {
    let ReportInputs {
        submission,
        tally,
        semantics,
        sheet,
        artifacts,
        audit,
        bonuses,
        markup_valid,
        advisory,
    } = inputs;

    let semantics_line = if semantics.issues.is_empty() {
        "OK".to_string()
    } else {
        format!("issues ({})", semantics.issues.iter().join("; "))
    };
    let artifacts_line = if artifacts.ok {
        "OK".to_string()
    } else {
        artifacts.issues.iter().join("; ")
    };
    let audit_line = match &audit.error {
        Some(reason) => format!("unavailable ({reason})"),
        None => format!("A11y {}, Best Practices {}", audit.accessibility, audit.best_practices),
    };

    let mut lines = vec![
        format!("# Report for {}/{}", submission.student(), submission.task()),
        format!(
            "- Total: {} / 100 (raw: {}, bonus +{})",
            tally.score, tally.raw_score, tally.bonus
        ),
        format!("- Lighthouse: {audit_line}"),
        format!("- Semantics: {semantics_line}"),
        format!(
            "- Responsive: breakpoints={}, flex={}, grid={}",
            sheet.breakpoints_ok, sheet.has_flex, sheet.has_grid
        ),
        format!("- Accessibility: focus={}", sheet.has_focus),
        format!(
            "- Markup validity: {}",
            if *markup_valid { "OK" } else { "structural errors" }
        ),
        format!("- Artifacts: {artifacts_line}"),
        format!(
            "- Publication: {}",
            if artifacts.has_publication { "yes" } else { "no" }
        ),
        format!(
            "- Bonuses: {}",
            if bonuses.is_empty() {
                "—".to_string()
            } else {
                bonuses.iter().join(", ")
            }
        ),
        format!("- Advisory: {}", advisory.unwrap_or(super::advisory::ADVISORY_UNAVAILABLE)),
    ];

    lines.push(String::new());
    lines.push("## Breakdown".to_string());
    for category in &tally.details {
        lines.push(format!("- {}: {}", category.key, category.score));
    }

    lines.join("\n")
}
