use std::{path::PathBuf, time::Duration};

use weblab::{config::AuditConfig, web::grade::audit::run_audit};

/// Creates a fresh scratch directory for one test.
fn scratch_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{prefix}-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[tokio::test]
async fn disabled_audit_reports_why_it_did_not_run() {
    let dir = scratch_dir("weblab-audit");
    let config = AuditConfig {
        enabled: false,
        timeout: Duration::from_secs(5),
        command: None,
    };

    let result = run_audit(&dir, "index.html", &dir, &config).await;
    assert_eq!(result.accessibility, 0);
    assert_eq!(result.best_practices, 0);
    assert_eq!(result.error.as_deref(), Some("audit disabled"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn missing_audit_binary_degrades_to_zeros() {
    let dir = scratch_dir("weblab-audit");
    std::fs::write(dir.join("index.html"), "<html><body>hi</body></html>").unwrap();

    let config = AuditConfig {
        enabled: true,
        timeout: Duration::from_secs(5),
        command: Some(PathBuf::from("/nonexistent/lighthouse-binary")),
    };

    // The static file server is spun up and torn down even though the audit
    // command cannot be spawned.
    let result = run_audit(&dir, "index.html", &dir, &config).await;
    assert_eq!(result.accessibility, 0);
    assert_eq!(result.best_practices, 0);
    assert!(result.error.is_some(), "failure reason must be recorded");

    let _ = std::fs::remove_dir_all(&dir);
}
