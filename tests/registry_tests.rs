use anyhow::Result;
use async_trait::async_trait;
use weblab::{
    config::CheckContext,
    rubric::{Rubric, RubricError, RubricRegistry},
    web::{Submission, grade::GradeResult},
};

/// A rubric that claims a fixed set of tasks and never actually grades.
struct StubRubric {
    id:     &'static str,
    claims: &'static [&'static str],
}

#[async_trait]
impl Rubric for StubRubric {
    fn id(&self) -> &'static str {
        self.id
    }

    fn title(&self) -> &'static str {
        "stub rubric"
    }

    fn can_handle(&self, task: &str) -> bool {
        self.claims.contains(&task)
    }

    async fn grade(&self, _submission: &Submission, _ctx: &CheckContext) -> Result<GradeResult> {
        unreachable!("stub rubrics are never graded in these tests")
    }
}

#[test]
fn defaults_resolve_the_first_lab() {
    let registry = RubricRegistry::with_defaults().unwrap();
    let rubric = registry.resolve("task_01").expect("task_01 must resolve");
    assert_eq!(rubric.id(), "task_01");
}

#[test]
fn unknown_tasks_resolve_to_nothing() {
    let registry = RubricRegistry::with_defaults().unwrap();
    assert!(registry.resolve("task_99").is_none());
}

#[test]
fn duplicate_ids_are_rejected_at_registration() {
    let mut registry = RubricRegistry::new();
    registry
        .register(Box::new(StubRubric {
            id:     "task_07",
            claims: &["task_07"],
        }))
        .unwrap();

    let duplicate = registry.register(Box::new(StubRubric {
        id:     "task_07",
        claims: &["task_08"],
    }));

    assert!(matches!(duplicate, Err(RubricError::DuplicateId(id)) if id == "task_07"));
    assert_eq!(registry.iter().count(), 1);
}

#[test]
fn overlapping_claims_resolve_to_the_first_registered() {
    let mut registry = RubricRegistry::new();
    registry
        .register(Box::new(StubRubric {
            id:     "first",
            claims: &["task_05"],
        }))
        .unwrap();
    registry
        .register(Box::new(StubRubric {
            id:     "second",
            claims: &["task_05", "task_06"],
        }))
        .unwrap();

    assert_eq!(registry.resolve("task_05").unwrap().id(), "first");
    assert_eq!(registry.resolve("task_06").unwrap().id(), "second");
}

#[test]
fn iteration_preserves_registration_order() {
    let mut registry = RubricRegistry::new();
    for id in ["a", "b", "c"] {
        registry
            .register(Box::new(StubRubric { id, claims: &[] }))
            .unwrap();
    }

    let ids: Vec<_> = registry.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}
