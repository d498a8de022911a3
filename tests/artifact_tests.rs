use std::path::PathBuf;

use weblab::web::{Submission, grade::inspect_artifacts};

/// Creates a fresh scratch submission and returns the repo root and the
/// parsed submission.
fn scratch_submission() -> (PathBuf, Submission) {
    let root = std::env::temp_dir().join(format!("weblab-artifacts-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(root.join("students/alice/task_01/doc")).unwrap();
    let submission = Submission::from_path(&root, "students/alice/task_01").unwrap();
    (root, submission)
}

#[test]
fn complete_artifacts_are_ok() {
    let (root, submission) = scratch_submission();
    std::fs::write(
        submission.doc_path(),
        "# Lab report\nDeployed at https://alice.github.io/lab\nLighthouse scores attached.",
    )
    .unwrap();
    for name in ["narrow.png", "medium.png", "wide.png"] {
        std::fs::write(submission.doc_dir().join(name), b"png").unwrap();
    }

    let facts = inspect_artifacts(&submission);
    assert!(facts.has_report);
    assert!(facts.has_publication);
    assert!(facts.ok, "issues: {:?}", facts.issues);

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn missing_report_is_every_issue_at_once() {
    let (root, submission) = scratch_submission();

    let facts = inspect_artifacts(&submission);
    assert!(!facts.has_report);
    assert!(!facts.has_publication);
    assert!(!facts.ok);
    assert_eq!(facts.issues.len(), 3);

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn report_without_publication_link_is_flagged() {
    let (root, submission) = scratch_submission();
    std::fs::write(submission.doc_path(), "# Lab report\nNo link here.").unwrap();

    let facts = inspect_artifacts(&submission);
    assert!(facts.has_report);
    assert!(!facts.has_publication);
    assert!(facts.issues.iter().any(|i| i.contains("publication")));

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn too_few_screenshots_are_flagged() {
    let (root, submission) = scratch_submission();
    std::fs::write(
        submission.doc_path(),
        "Deployed on https://lab.netlify.app with lighthouse results.",
    )
    .unwrap();
    std::fs::write(submission.doc_dir().join("only-one.png"), b"png").unwrap();

    let facts = inspect_artifacts(&submission);
    assert!(facts.has_publication);
    assert!(!facts.ok);
    assert!(facts.issues.iter().any(|i| i.contains("screenshots")));

    let _ = std::fs::remove_dir_all(&root);
}
