#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::{AdvisoryConfig, SOURCE_TRUNCATE, SUMMARY_TRUNCATE},
    util::truncate_chars,
};

/// Placeholder rendered when no advisory text is available.
pub const ADVISORY_UNAVAILABLE: &str = "—";

/// Request body for one advisory review.
#[derive(Serialize)]
struct AdvisoryRequest {
    /// Task identifier being reviewed.
    task:   String,
    /// Rubric description the reviewer should grade against.
    rubric: Value,
    /// Truncated submission sources.
    code:   CodePayload,
    /// Truncated documentation text.
    doc:    String,
}

/// Submission source text forwarded to the reviewer.
#[derive(Serialize)]
struct CodePayload {
    /// The markup source.
    html: String,
    /// The stylesheet source.
    css:  String,
}

/// Sends one submission to the advisory analysis service and returns its
/// free-text summary. Advisory feedback is cosmetic: any transport error,
/// non-2xx status, or malformed body degrades to `None` and never reaches
/// the numeric score.
pub async fn request_review(
    config: &AdvisoryConfig,
    client: &Client,
    task: &str,
    rubric: Value,
    html: &str,
    css: &str,
    doc: &str,
) -> Option<String> {
    let body = AdvisoryRequest {
        task: task.to_string(),
        rubric,
        code: CodePayload {
            html: truncate_chars(html, SOURCE_TRUNCATE),
            css:  truncate_chars(css, SOURCE_TRUNCATE),
        },
        doc: truncate_chars(doc, SOURCE_TRUNCATE),
    };

    let url = format!("{}/v1/analyze", config.endpoint.trim_end_matches('/'));
    let response = match client
        .post(&url)
        .bearer_auth(&config.api_key)
        .timeout(config.timeout)
        .json(&body)
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!("Advisory request failed: {e}");
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::warn!("Advisory service answered {}", response.status());
        return None;
    }

    let payload: Value = match response.json().await {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("Advisory service returned a malformed body: {e}");
            return None;
        }
    };

    match payload.get("summary").and_then(Value::as_str) {
        Some(summary) => Some(summary.to_string()),
        // Keep something human-readable even when the shape is unexpected.
        None => Some(truncate_chars(&payload.to_string(), SUMMARY_TRUNCATE)),
    }
}
