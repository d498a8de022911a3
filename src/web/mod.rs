#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Front-end submission analysis: parsing, static inspection, dynamic audit,
//! and the task rubrics built on top of them.

/// Static and dynamic grading components plus the per-task rubrics
pub mod grade;
/// Tree-sitter wrapper over the HTML and CSS grammars
pub mod parser;
/// Tree-sitter query strings
pub mod queries;
/// The submission data model
pub mod submission;

pub use parser::{Element, Language, Parser};
pub use submission::Submission;
