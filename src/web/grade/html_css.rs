#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::json;

use super::{
    advisory::request_review,
    artifacts::inspect_artifacts,
    audit::run_audit,
    bonus::detect_bonuses,
    report::{ReportInputs, render_submission_report},
    responsive::{inspect_stylesheet, responsive_finding},
    results::{AuditResult, GradeResult},
    score::{ScoreParts, aggregate},
    semantics::{inspect_semantics, markup_is_well_formed},
};
use crate::{
    config::CheckContext,
    rubric::Rubric,
    web::Submission,
};

/// The rubric for the first lab: semantic HTML, responsive CSS,
/// accessibility, quality, project artifacts, and bonus features.
pub struct HtmlCssRubric;

impl HtmlCssRubric {
    /// Rubric description forwarded to the advisory reviewer.
    fn advisory_rubric() -> serde_json::Value {
        json!({
            "semantics": ["landmarks", "headings"],
            "accessibility": ["labels", "focus"],
            "responsive": ["breakpoints", "flex-grid"],
            "bonuses": ["dark_theme", "adaptive_images", "web_vitals"],
        })
    }
}

#[async_trait]
impl Rubric for HtmlCssRubric {
    fn id(&self) -> &'static str {
        "task_01"
    }

    fn title(&self) -> &'static str {
        "Lab 01: HTML/CSS fundamentals"
    }

    fn can_handle(&self, task: &str) -> bool {
        task == self.id()
    }

    async fn grade(&self, submission: &Submission, ctx: &CheckContext) -> Result<GradeResult> {
        let config = &ctx.config;
        let markup = submission.read_markup();
        let stylesheet = submission.read_stylesheet();
        let doc = submission.read_doc().unwrap_or_default();
        let files_ok = markup.is_some() && stylesheet.is_some();

        let semantics = inspect_semantics(markup.as_deref(), &config.semantics);
        let sheet = inspect_stylesheet(stylesheet.as_deref(), &config.breakpoints);
        let responsive = responsive_finding(&sheet);
        let artifacts = inspect_artifacts(submission);
        let bonuses = detect_bonuses(markup.as_deref(), stylesheet.as_deref());
        let markup_valid = markup_is_well_formed(markup.as_deref());

        let out_dir = config
            .out_root
            .join(submission.student())
            .join(submission.task());
        std::fs::create_dir_all(&out_dir)
            .with_context(|| format!("Could not create {}", out_dir.display()))?;

        // Without sources there is nothing to serve; the audit-dependent
        // categories score zero with an explicit reason.
        let audit = if files_ok {
            run_audit(&submission.source_dir(), "index.html", &out_dir, &config.audit).await
        } else {
            AuditResult::unavailable("missing source files")
        };

        let advisory = match (&config.advisory, &markup) {
            (Some(advisory_config), Some(html)) => {
                request_review(
                    advisory_config,
                    &ctx.http,
                    submission.task(),
                    Self::advisory_rubric(),
                    html,
                    stylesheet.as_deref().unwrap_or(""),
                    &doc,
                )
                .await
            }
            _ => None,
        };

        let tally = aggregate(&ScoreParts {
            semantics:       &semantics,
            sheet:           &sheet,
            responsive:      &responsive,
            audit:           &audit,
            markup_valid,
            files_ok,
            artifacts_ok:    artifacts.ok,
            has_report:      artifacts.has_report,
            has_publication: artifacts.has_publication,
            bonuses:         &bonuses,
            bp_min:          config.bp_min,
        });

        let report = render_submission_report(&ReportInputs {
            submission,
            tally: &tally,
            semantics: &semantics,
            sheet: &sheet,
            artifacts: &artifacts,
            audit: &audit,
            bonuses: &bonuses,
            markup_valid,
            advisory: advisory.as_deref(),
        });
        let report_path = out_dir.join("report.md");
        std::fs::write(&report_path, report)
            .with_context(|| format!("Could not write {}", report_path.display()))?;

        Ok(GradeResult::builder()
            .student(submission.student())
            .task(submission.task())
            .score(tally.score)
            .raw_score(tally.raw_score)
            .bonus(tally.bonus)
            .details(tally.details)
            .bonuses(bonuses)
            .audit(audit)
            .has_report(artifacts.has_report)
            .has_publication(artifacts.has_publication)
            .report_path(report_path)
            .build())
    }
}
