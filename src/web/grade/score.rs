#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::{
    bonus::{BONUS_ADAPTIVE_IMAGES, BONUS_DARK_THEME, BONUS_WEB_VITALS},
    responsive::StylesheetFacts,
    results::{AuditResult, CategoryScore, Finding},
};

/// Ceiling of the semantics category.
pub const CAP_SEMANTICS: u32 = 20;
/// Ceiling of the responsive category.
pub const CAP_RESPONSIVE: u32 = 25;
/// Ceiling of the accessibility category.
pub const CAP_A11Y: u32 = 20;
/// Ceiling of the quality category.
pub const CAP_QUALITY: u32 = 15;
/// Ceiling of the project/artifacts category.
pub const CAP_PROJECT: u32 = 10;
/// Ceiling of the report/publication category.
pub const CAP_REPORT: u32 = 10;
/// Ceiling of the bonus subtotal.
pub const CAP_BONUS: u32 = 10;
/// Ceiling of the raw (pre-final-clamp) total.
pub const CAP_RAW: u32 = 110;

/// Everything the aggregator folds into one score.
pub struct ScoreParts<'a> {
    /// The semantics finding.
    pub semantics:       &'a Finding,
    /// Stylesheet facts backing the responsive and focus checks.
    pub sheet:           &'a StylesheetFacts,
    /// Points earned in the responsive category.
    pub responsive:      &'a Finding,
    /// The dynamic audit outcome.
    pub audit:           &'a AuditResult,
    /// Whether the markup parsed without structural errors.
    pub markup_valid:    bool,
    /// Whether the required source files were present.
    pub files_ok:        bool,
    /// Whether the documentation artifacts were complete.
    pub artifacts_ok:    bool,
    /// Whether the documentation report exists.
    pub has_report:      bool,
    /// Whether a publication link was found.
    pub has_publication: bool,
    /// Detected bonus feature names.
    pub bonuses:         &'a [String],
    /// Best-practices threshold for quality credit.
    pub bp_min:          u32,
}

/// The aggregated totals plus the per-category breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    /// Final score, clamped to `[0, 100]`.
    pub score:     u32,
    /// Raw total before the final clamp, itself bounded by `CAP_RAW`.
    pub raw_score: u32,
    /// Bonus subtotal included in the raw total.
    pub bonus:     u32,
    /// Per-category breakdown.
    pub details:   Vec<CategoryScore>,
}

/// Clamps a category sub-score to its declared ceiling.
fn capped(score: u32, cap: u32) -> u32 {
    score.min(cap)
}

/// Deterministic weighted-sum scoring: every category is clamped to its own
/// ceiling, the bonus subtotal is capped independently, and the grand total
/// is clamped last. The raw total is preserved for transparency.
pub fn aggregate(parts: &ScoreParts<'_>) -> Tally {
    let mut details = vec![];
    let mut total: u32 = 0;

    let semantics = capped(parts.semantics.score, CAP_SEMANTICS);
    total += semantics;
    details.push(CategoryScore::new("semantics", semantics));

    let responsive = capped(parts.responsive.score, CAP_RESPONSIVE);
    total += responsive;
    details.push(CategoryScore::new("responsive", responsive));

    let mut a11y = 0;
    if parts.sheet.has_focus {
        a11y += 6;
    }
    a11y += (parts.audit.accessibility.min(100) * 14) / 100;
    let a11y = capped(a11y, CAP_A11Y);
    total += a11y;
    details.push(CategoryScore::new("a11y", a11y));

    let mut quality = 0;
    if parts.audit.best_practices >= parts.bp_min {
        quality += 8;
    }
    if parts.markup_valid {
        quality += 7;
    }
    let quality = capped(quality, CAP_QUALITY);
    total += quality;
    details.push(CategoryScore::new("quality", quality));

    let mut project = 0;
    if parts.files_ok {
        project += 4;
    }
    if parts.artifacts_ok {
        project += 6;
    }
    let project = capped(project, CAP_PROJECT);
    total += project;
    details.push(CategoryScore::new("project", project));

    let mut report = 0;
    if parts.has_publication {
        report += 5;
    }
    if parts.has_report {
        report += 5;
    }
    let report = capped(report, CAP_REPORT);
    total += report;
    details.push(CategoryScore::new("report", report));

    let mut bonus = 0;
    for name in parts.bonuses {
        bonus += match name.as_str() {
            BONUS_DARK_THEME => 3,
            BONUS_ADAPTIVE_IMAGES => 3,
            BONUS_WEB_VITALS => 4,
            _ => 0,
        };
    }
    let bonus = capped(bonus, CAP_BONUS);
    total += bonus;

    let raw_score = total.min(CAP_RAW);
    Tally {
        score: raw_score.min(100),
        raw_score,
        bonus,
        details,
    }
}
