#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use bon::Builder;
use reqwest::Client;

use crate::web::grade::{responsive::BreakpointThresholds, semantics::SemanticsPolicy};

/// Maximum number of characters of each source file forwarded to the advisory
/// reviewer.
pub const SOURCE_TRUNCATE: usize = 10_000;

/// Maximum number of characters of a fallback advisory payload rendered into
/// a report.
pub const SUMMARY_TRUNCATE: usize = 500;

/// Advisory reviewer endpoint and credential, usually loaded from the
/// environment.
#[derive(Debug, Clone)]
pub struct AdvisoryConfig {
    /// Base URL of the advisory analysis service.
    pub endpoint: String,
    /// Bearer token used to authenticate advisory requests.
    pub api_key:  String,
    /// Deadline for one advisory request.
    pub timeout:  Duration,
}

impl AdvisoryConfig {
    /// Builds an advisory configuration from environment variables; returns
    /// `None` if the endpoint or credential is missing.
    pub fn from_env() -> Option<Self> {
        let endpoint = std::env::var("WEBLAB_ADVISORY_ENDPOINT").ok()?.trim().to_owned();
        let api_key = std::env::var("WEBLAB_ADVISORY_KEY").ok()?.trim().to_owned();

        if endpoint.is_empty() || api_key.is_empty() {
            return None;
        }

        Some(Self {
            endpoint,
            api_key,
            timeout: read_timeout_secs("WEBLAB_ADVISORY_TIMEOUT_SECS", 30),
        })
    }
}

/// Settings for the dynamic Lighthouse audit.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Whether the audit runs at all; when disabled the audit-dependent score
    /// categories are zero.
    pub enabled: bool,
    /// Deadline for one audit CLI invocation.
    pub timeout: Duration,
    /// Explicit path to the audit binary, overriding `PATH` lookup.
    pub command: Option<PathBuf>,
}

impl AuditConfig {
    /// Builds the audit configuration from environment variables, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            enabled: true,
            timeout: read_timeout_secs("WEBLAB_AUDIT_TIMEOUT_SECS", 120),
            command: std::env::var("WEBLAB_LIGHTHOUSE").ok().map(PathBuf::from),
        }
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Everything one `weblab check` run needs, assembled from CLI arguments and
/// the environment and passed down explicitly.
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct CheckConfig {
    /// Student task paths relative to `repo_root`, shaped
    /// `{group}/{student}/{task}`.
    pub paths:       Vec<String>,
    /// Repository root all submission paths are resolved against.
    #[builder(default = default_repo_root())]
    pub repo_root:   PathBuf,
    /// Directory reports, the summary, and the grade collection are written
    /// under. Overwritten idempotently on each run.
    #[builder(default = PathBuf::from("out"))]
    pub out_root:    PathBuf,
    /// Top-level directory submissions must live under.
    #[builder(default = String::from("students"))]
    pub group_root:  String,
    /// When set, grade only submissions for this task identifier.
    pub only:        Option<String>,
    /// Minimum Lighthouse accessibility score considered acceptable.
    #[builder(default = 90)]
    pub a11y_min:    u32,
    /// Minimum Lighthouse best-practices score required for quality credit.
    #[builder(default = 90)]
    pub bp_min:      u32,
    /// Upper bound on concurrently graded submissions.
    #[builder(default = 1)]
    pub jobs:        usize,
    /// Dynamic audit settings.
    #[builder(default)]
    pub audit:       AuditConfig,
    /// Advisory reviewer settings, if the service is configured.
    pub advisory:    Option<AdvisoryConfig>,
    /// Semantic-structure inspection policy.
    #[builder(default)]
    pub semantics:   SemanticsPolicy,
    /// Responsive breakpoint tier thresholds.
    #[builder(default)]
    pub breakpoints: BreakpointThresholds,
}

/// Returns the current directory, or `.` when it cannot be determined.
fn default_repo_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Shared state handed to every rubric during a run.
pub struct CheckContext {
    /// The run configuration.
    pub config: CheckConfig,
    /// Shared reqwest HTTP client reused across advisory calls.
    pub http:   Client,
}

impl CheckContext {
    /// Wraps a run configuration together with a shared HTTP client.
    pub fn new(config: CheckConfig) -> Result<Self> {
        let http = Client::builder()
            // Avoid macOS dynamic store lookups that fail in sandboxed environments.
            .no_proxy()
            .build()
            .context("Failed to construct shared HTTP client")?;

        Ok(Self { config, http })
    }
}

/// Parses an environment variable into a `Duration`, falling back to
/// `default_secs` when parsing fails or the variable is missing.
fn read_timeout_secs(env: &str, default_secs: u64) -> Duration {
    std::env::var(env)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(default_secs))
}
