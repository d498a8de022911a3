//! # weblab
//!
//! A batch autograder for student front-end lab submissions. Given a list of
//! `{group}/{student}/{task}` paths it resolves each task to a registered
//! rubric, runs static markup/stylesheet inspections, an optional Lighthouse
//! audit against a throwaway local file server, and an optional advisory LLM
//! review, then writes per-submission reports plus a batch summary and a
//! machine-readable grade collection.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Run-wide configuration and environment-backed settings
pub mod config;
/// Subprocess invocation helpers with bounded deadlines
pub mod process;
/// Rubric trait and the statically-registered rubric table
pub mod rubric;
/// Batch orchestration: discovery, grading, and summary emission
pub mod run;
/// Throwaway static file server used by the dynamic audit
pub mod serve;
/// Utility functions for convenience
pub mod util;
/// Markup/stylesheet analysis and per-task grading components
pub mod web;

/// Defined for convenience
type Dict = std::collections::HashMap<String, String>;
