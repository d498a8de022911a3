#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{ffi::OsString, path::Path};

use anyhow::{Context, Result};

use super::results::AuditResult;
use crate::{config::AuditConfig, process::run_capture, serve::StaticServer, util::audit_command};

/// Runs the external Lighthouse audit against a submission served from a
/// throwaway local file server. Every failure mode (missing CLI, crash,
/// timeout, unparsable report) degrades to a zero-valued result; a dynamic
/// audit failure is always local to the submission, never fatal to the run.
pub async fn run_audit(
    serve_dir: &Path,
    entry: &str,
    out_dir: &Path,
    config: &AuditConfig,
) -> AuditResult {
    if !config.enabled {
        return AuditResult::unavailable("audit disabled");
    }

    match try_audit(serve_dir, entry, out_dir, config).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("Page audit failed: {e:#}");
            AuditResult::unavailable(format!("{e:#}"))
        }
    }
}

/// The fallible audit body. The server guard is dropped on every exit path,
/// which tears the server down whether the audit succeeded, crashed, or
/// timed out.
async fn try_audit(
    serve_dir: &Path,
    entry: &str,
    out_dir: &Path,
    config: &AuditConfig,
) -> Result<AuditResult> {
    let (program, mut args) = audit_command(config.command.as_deref())
        .context("No lighthouse binary found on the path (lighthouse or npx)")?;

    let server = StaticServer::start(serve_dir.to_path_buf()).await?;
    let url = server.url_for(entry);
    let report_path = out_dir.join("lighthouse.json");

    args.extend([
        OsString::from(url),
        OsString::from("--only-categories=accessibility,best-practices"),
        OsString::from("--output=json"),
        OsString::from(format!("--output-path={}", report_path.display())),
        OsString::from("--quiet"),
        OsString::from("--chrome-flags=--headless --no-sandbox"),
    ]);

    let collected = run_capture(&program, &args, None, config.timeout).await?;
    if !collected.status.success() {
        anyhow::bail!(
            "lighthouse exited with {}: {}",
            collected.status,
            String::from_utf8_lossy(&collected.stderr)
        );
    }

    let report = std::fs::read_to_string(&report_path)
        .with_context(|| format!("Could not read {}", report_path.display()))?;
    parse_report(&report)
}

/// Extracts the two category scores from a Lighthouse JSON report, as
/// integers in `[0, 100]`.
fn parse_report(report: &str) -> Result<AuditResult> {
    let report: serde_json::Value =
        serde_json::from_str(report).context("Lighthouse emitted unparsable JSON")?;

    let score_of = |category: &str| -> u32 {
        let score = report["categories"][category]["score"]
            .as_f64()
            .unwrap_or(0.0);
        ((score * 100.0).round() as i64).clamp(0, 100) as u32
    };

    Ok(AuditResult {
        accessibility:  score_of("accessibility"),
        best_practices: score_of("best-practices"),
        error:          None,
    })
}
