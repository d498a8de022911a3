#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::Result;
use async_trait::async_trait;

use crate::{
    config::CheckContext,
    web::{Submission, grade::GradeResult},
};

/// An error in the rubric table itself. This is the one error class that
/// aborts a run: it means the pipeline is misconfigured, not that a
/// submission is bad.
#[derive(thiserror::Error, Debug)]
pub enum RubricError {
    /// Two rubrics were registered under the same identifier.
    #[error("duplicate rubric id `{0}` registered")]
    DuplicateId(String),
}

/// Task-specific grading logic: a capability test plus the grading operation
/// for one submission.
#[async_trait]
pub trait Rubric: Send + Sync {
    /// Stable identifier of this rubric.
    fn id(&self) -> &'static str;

    /// Human-readable title, shown in listings.
    fn title(&self) -> &'static str;

    /// Returns true if this rubric can grade the given task.
    fn can_handle(&self, task: &str) -> bool;

    /// Grades one submission. An `Err` here indicates a pipeline problem;
    /// bad submission content must degrade to a zeroed `GradeResult` instead.
    async fn grade(&self, submission: &Submission, ctx: &CheckContext) -> Result<GradeResult>;
}

/// A statically-registered table of rubrics, validated at startup so that a
/// malformed registration fails the run before any grading happens.
pub struct RubricRegistry {
    /// Registered rubrics, in registration order.
    rubrics: Vec<Box<dyn Rubric>>,
}

impl RubricRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { rubrics: vec![] }
    }

    /// Builds the registry with every built-in rubric registered.
    pub fn with_defaults() -> Result<Self, RubricError> {
        let mut registry = Self::new();
        registry.register(Box::new(crate::web::grade::HtmlCssRubric))?;
        Ok(registry)
    }

    /// Registers a rubric, rejecting duplicate identifiers.
    pub fn register(&mut self, rubric: Box<dyn Rubric>) -> Result<(), RubricError> {
        if self.rubrics.iter().any(|r| r.id() == rubric.id()) {
            return Err(RubricError::DuplicateId(rubric.id().to_string()));
        }
        self.rubrics.push(rubric);
        Ok(())
    }

    /// Resolves the rubric for a task. When several rubrics claim the same
    /// task, the first registered wins and a warning is logged; when none
    /// does, the caller is expected to skip the submission with a reason.
    pub fn resolve(&self, task: &str) -> Option<&dyn Rubric> {
        let mut claimers = self.rubrics.iter().filter(|r| r.can_handle(task));
        let first = claimers.next()?;

        if let Some(second) = claimers.next() {
            tracing::warn!(
                "Both `{}` and `{}` claim task `{task}`; using the first registered.",
                first.id(),
                second.id()
            );
        }

        Some(first.as_ref())
    }

    /// Iterates over the registered rubrics in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Rubric> {
        self.rubrics.iter().map(Box::as_ref)
    }
}

impl Default for RubricRegistry {
    fn default() -> Self {
        Self::new()
    }
}
