#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use anyhow::{Context, Result};
use futures::StreamExt;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tabled::{
    Table,
    settings::{Panel, Style},
};

use crate::{
    config::{CheckConfig, CheckContext},
    rubric::RubricRegistry,
    web::{Submission, grade::GradeResult},
};

/// A submission that could not be graded, with the reason it was set aside.
/// Skips are always explicit; a submission is never silently scored zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedSubmission {
    /// The submission path as provided.
    pub path:   String,
    /// Why it was skipped.
    pub reason: String,
}

/// Ordered results of one orchestrator invocation.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Grade results in input order.
    pub results: Vec<GradeResult>,
    /// Submissions that were set aside, with reasons.
    pub skipped: Vec<SkippedSubmission>,
}

/// Runs one grading batch: resolves each submission path to its rubric,
/// grades with bounded parallelism, and emits the per-run artifacts. Failure
/// of one submission demotes it to a skipped entry and the run continues;
/// only a misconfigured rubric table aborts.
pub async fn run_check(config: CheckConfig) -> Result<RunSummary> {
    let registry = RubricRegistry::with_defaults()?;
    let parallelism = config.jobs.max(1);
    let ctx = CheckContext::new(config)?;

    let mut skipped = vec![];
    let mut jobs = vec![];

    for path in &ctx.config.paths {
        if !path
            .trim_start_matches('/')
            .starts_with(&format!("{}/", ctx.config.group_root))
        {
            skipped.push(SkippedSubmission {
                path:   path.clone(),
                reason: format!("outside the `{}` group root", ctx.config.group_root),
            });
            continue;
        }

        let submission = match Submission::from_path(&ctx.config.repo_root, path) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("Skipping `{path}`: {e}");
                skipped.push(SkippedSubmission {
                    path:   path.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if let Some(only) = &ctx.config.only {
            if submission.task() != only {
                continue;
            }
        }

        match registry.resolve(submission.task()) {
            Some(rubric) => jobs.push((submission, rubric)),
            None => {
                tracing::warn!("No rubric for {}, skipping.", submission.task());
                skipped.push(SkippedSubmission {
                    path:   path.clone(),
                    reason: format!("no rubric registered for `{}`", submission.task()),
                });
            }
        }
    }

    if jobs.is_empty() && skipped.is_empty() {
        tracing::info!("No student task paths provided.");
        return Ok(RunSummary {
            results: vec![],
            skipped,
        });
    }

    // Submissions are independent: inspectors are pure and every audit gets
    // its own ephemeral port, so grading can proceed in parallel while the
    // result order stays the input order.
    let graded: Vec<(String, Result<GradeResult>)> =
        futures::stream::iter(jobs.into_iter().map(|(submission, rubric)| {
            let ctx = &ctx;
            async move {
                let path = submission.rel_path().to_string();
                let result = rubric.grade(&submission, ctx).await;
                (path, result)
            }
        }))
        .buffered(parallelism)
        .collect()
        .await;

    let mut results = vec![];
    for (path, result) in graded {
        match result {
            Ok(grade) => results.push(grade),
            Err(e) => {
                tracing::warn!("Grading `{path}` failed: {e:#}");
                skipped.push(SkippedSubmission {
                    path,
                    reason: format!("{e:#}"),
                });
            }
        }
    }

    let summary = RunSummary { results, skipped };
    write_outputs(&ctx.config, &summary)?;

    if !summary.results.is_empty() {
        eprintln!(
            "{}",
            Table::new(&summary.results)
                .with(Panel::header("Automated lab checks"))
                .with(Style::modern())
        );
    }

    Ok(summary)
}

/// Writes the batch Markdown summary and the machine-readable grade
/// collection, overwriting both idempotently.
fn write_outputs(config: &CheckConfig, summary: &RunSummary) -> Result<()> {
    std::fs::create_dir_all(&config.out_root)
        .with_context(|| format!("Could not create {}", config.out_root.display()))?;

    let summary_path = config.out_root.join("summary.md");
    std::fs::write(&summary_path, render_summary(&config.repo_root, summary))
        .with_context(|| format!("Could not write {}", summary_path.display()))?;

    let grades_path = config.out_root.join("grades.json");
    let grades = serde_json::to_string_pretty(&summary.results)
        .context("Could not serialize grade results")?;
    std::fs::write(&grades_path, grades)
        .with_context(|| format!("Could not write {}", grades_path.display()))?;

    Ok(())
}

/// Renders the batch Markdown digest.
fn render_summary(repo_root: &Path, summary: &RunSummary) -> String {
    let mut lines = vec!["## Automated lab checks".to_string(), String::new()];

    for result in &summary.results {
        let report_rel = result
            .report_path
            .strip_prefix(repo_root)
            .unwrap_or(&result.report_path);

        lines.push(format!("### {}/{}", result.student, result.task));
        lines.push(format!("- Total: {} / 100", result.score));
        lines.push(format!(
            "- Lighthouse: A11y {}, Best Practices {}",
            result.audit.accessibility, result.audit.best_practices
        ));
        lines.push(format!(
            "- Publication: {}",
            if result.has_publication { "yes" } else { "no" }
        ));
        lines.push(format!(
            "- Bonuses: {}",
            if result.bonuses.is_empty() {
                "—".to_string()
            } else {
                result.bonuses.iter().join(", ")
            }
        ));
        lines.push(format!(
            "- Report: {}",
            if result.has_report { "yes" } else { "no" }
        ));
        lines.push(format!("[Detailed report](/{})", report_rel.display()));
        lines.push(String::new());
    }

    if !summary.skipped.is_empty() {
        lines.push("## Skipped".to_string());
        for skip in &summary.skipped {
            lines.push(format!("- `{}` — {}", skip.path, skip.reason));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
