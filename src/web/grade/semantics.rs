#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::HashSet;

use super::results::Finding;
use crate::web::{Language, Parser, queries};

/// Policy for the semantic-structure inspection: which landmarks are
/// required, the category ceiling, and the per-issue penalty.
#[derive(Debug, Clone)]
pub struct SemanticsPolicy {
    /// Landmark elements every page must carry.
    pub landmarks: Vec<String>,
    /// Category ceiling the penalties subtract from.
    pub ceiling:   u32,
    /// Points lost per issue.
    pub penalty:   u32,
}

impl Default for SemanticsPolicy {
    fn default() -> Self {
        Self {
            landmarks: ["header", "nav", "main", "footer"]
                .into_iter()
                .map(String::from)
                .collect(),
            ceiling:   20,
            penalty:   4,
        }
    }
}

/// Inspects markup for structural and accessibility properties: required
/// landmarks, a single top-level heading, alternative text on images, and
/// label associations on form controls. Pure over the submission text; a
/// missing file or unqueryable parse degrades to explicit issues, never an
/// error.
pub fn inspect_semantics(markup: Option<&str>, policy: &SemanticsPolicy) -> Finding {
    let Some(markup) = markup else {
        return Finding {
            category: "semantics".to_string(),
            score:    0,
            issues:   vec!["missing src/index.html".to_string()],
        };
    };

    let mut issues = vec![];

    let parser = Parser::new(markup.to_string(), Language::Markup).ok();
    let tag_counts = parser
        .as_ref()
        .and_then(|p| p.query(queries::TAG_QUERY).ok())
        .unwrap_or_default();
    let tags: Vec<String> = tag_counts
        .into_iter()
        .filter_map(|m| m.get("name").map(|n| n.to_ascii_lowercase()))
        .collect();

    for landmark in &policy.landmarks {
        if !tags.iter().any(|t| t == landmark) {
            issues.push(format!("missing <{landmark}> landmark"));
        }
    }

    if !tags.iter().any(|t| t == "section" || t == "article") {
        issues.push("no <section> or <article> regions".to_string());
    }

    let h1_count = tags.iter().filter(|t| t.as_str() == "h1").count();
    if h1_count != 1 {
        issues.push(format!("expected exactly one <h1>, found {h1_count}"));
    }

    if let Some(parser) = parser.as_ref() {
        issues.extend(inspect_elements(parser));
    }

    let score = policy
        .ceiling
        .saturating_sub(policy.penalty.saturating_mul(issues.len() as u32));

    Finding {
        category: "semantics".to_string(),
        score,
        issues,
    }
}

/// Element-level checks that need attributes: image alternative text and
/// form-control labelling.
fn inspect_elements(parser: &Parser) -> Vec<String> {
    let elements = parser.elements();
    let mut issues = vec![];

    let label_targets: HashSet<&str> = elements
        .iter()
        .filter(|e| e.name == "label")
        .filter_map(|e| e.attr("for"))
        .collect();

    for element in &elements {
        match element.name.as_str() {
            "img" => {
                // An empty alt is treated the same as a missing one.
                if element.attr("alt").map(str::is_empty).unwrap_or(true) {
                    issues.push("<img> without alt text".to_string());
                }
            }
            "input" | "select" | "textarea" => {
                let labelled = element.has_attr("aria-label")
                    || element.has_attr("aria-labelledby")
                    || element
                        .attr("id")
                        .map(|id| label_targets.contains(id))
                        .unwrap_or(false);
                if !labelled {
                    issues.push(format!(
                        "<{}> without an associated label or accessible name",
                        element.name
                    ));
                }
            }
            _ => {}
        }
    }

    issues
}

/// Returns true when the markup parses without structural errors. Used as a
/// quality signal; missing sources count as not well formed.
pub fn markup_is_well_formed(markup: Option<&str>) -> bool {
    markup
        .and_then(|m| Parser::new(m.to_string(), Language::Markup).ok())
        .map(|p| p.is_well_formed())
        .unwrap_or(false)
}
