#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::sync::OnceLock;

use itertools::Itertools;
use regex::Regex;

use super::results::Finding;
use crate::web::{Language, Parser, queries};

/// Viewport-width thresholds that decide which tier a declared breakpoint
/// belongs to.
#[derive(Debug, Clone, Copy)]
pub struct BreakpointThresholds {
    /// Largest `max-width` still counted as the narrow/mobile tier.
    pub narrow_max: u32,
    /// Lower bound of the medium/tablet tier.
    pub medium_min: u32,
    /// Upper bound of the medium/tablet tier.
    pub medium_max: u32,
    /// Smallest `min-width` counted as the wide/desktop tier.
    pub wide_min:   u32,
}

impl Default for BreakpointThresholds {
    fn default() -> Self {
        Self {
            narrow_max: 600,
            medium_min: 601,
            medium_max: 1024,
            wide_min:   1025,
        }
    }
}

/// Everything the stylesheet inspection learns about one submission.
#[derive(Debug, Clone, Default)]
pub struct StylesheetFacts {
    /// Whether all three breakpoint tiers are covered.
    pub breakpoints_ok: bool,
    /// Narrow/mobile tier coverage.
    pub has_narrow:     bool,
    /// Medium/tablet tier coverage.
    pub has_medium:     bool,
    /// Wide/desktop tier coverage.
    pub has_wide:       bool,
    /// Whether any flexible-box layout declaration exists.
    pub has_flex:       bool,
    /// Whether any grid layout declaration exists.
    pub has_grid:       bool,
    /// Whether any focus-state selector exists.
    pub has_focus:      bool,
    /// Distinct media-query condition strings, for reporting.
    pub conditions:     Vec<String>,
}

/// Matches `min-width`/`max-width` conditions with a pixel value. The unit
/// capture distinguishes `px` from em/rem widths, which use a different
/// scale and must not be read as pixel counts.
fn width_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(min|max)-width\s*:\s*(\d+)(?:\.\d+)?\s*(px)?").expect("width pattern")
    })
}

/// Inspects a stylesheet for breakpoint coverage, flex/grid layout use, and
/// focus-state styling. Tolerant of malformed input: tree-sitter recovers
/// from errors and anything unparsable simply yields no matches.
pub fn inspect_stylesheet(css: Option<&str>, thresholds: &BreakpointThresholds) -> StylesheetFacts {
    let Some(css) = css else {
        return StylesheetFacts::default();
    };

    let Ok(parser) = Parser::new(css.to_string(), Language::Stylesheet) else {
        return StylesheetFacts::default();
    };

    let mut facts = StylesheetFacts::default();

    let conditions: Vec<String> = parser
        .query(queries::MEDIA_QUERY)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|m| m.get("media").map(|text| media_condition(text)))
        .filter(|c| !c.is_empty())
        .unique()
        .collect();

    for condition in &conditions {
        for capture in width_pattern().captures_iter(condition) {
            let is_min = capture[1].eq_ignore_ascii_case("min");
            let Ok(px) = capture[2].parse::<u32>() else {
                continue;
            };
            // Only pixel widths map onto the tier thresholds; a unitless 0
            // is the one conventional exception.
            if capture.get(3).is_none() && px != 0 {
                continue;
            }
            classify_width(is_min, px, thresholds, &mut facts);
        }
    }
    facts.conditions = conditions;
    facts.breakpoints_ok = facts.has_narrow && facts.has_medium && facts.has_wide;

    for declaration in parser.query(queries::DECLARATION_QUERY).unwrap_or_default() {
        let property = declaration.get("property").map(String::as_str).unwrap_or("");
        let text = declaration
            .get("declaration")
            .map(String::as_str)
            .unwrap_or("");
        if property.eq_ignore_ascii_case("display") {
            if text.contains("flex") {
                facts.has_flex = true;
            }
            if text.contains("grid") {
                facts.has_grid = true;
            }
        }
    }

    facts.has_focus = parser
        .query(queries::PSEUDO_CLASS_QUERY)
        .unwrap_or_default()
        .iter()
        .filter_map(|m| m.get("selector"))
        .any(|s| s.contains("focus"));

    facts
}

/// Extracts the condition part of a media statement, cutting the rule block.
fn media_condition(media_text: &str) -> String {
    let head = match media_text.find('{') {
        Some(index) => &media_text[..index],
        None => media_text,
    };
    head.trim_start_matches("@media")
        .split_whitespace()
        .join(" ")
}

/// Buckets one declared width condition into a breakpoint tier.
fn classify_width(
    is_min: bool,
    px: u32,
    thresholds: &BreakpointThresholds,
    facts: &mut StylesheetFacts,
) {
    if (!is_min && px <= thresholds.narrow_max) || (is_min && px == 0) {
        facts.has_narrow = true;
    }
    if px >= thresholds.medium_min && px <= thresholds.medium_max {
        facts.has_medium = true;
    }
    if is_min && px >= thresholds.wide_min {
        facts.has_wide = true;
    }
}

/// Folds the stylesheet facts into the responsive category finding. Each
/// satisfied condition contributes a fixed point value; there is no partial
/// credit within a condition.
pub fn responsive_finding(facts: &StylesheetFacts) -> Finding {
    let mut score = 0;
    let mut issues = vec![];

    if facts.breakpoints_ok {
        score += 12;
    } else {
        let mut missing = vec![];
        if !facts.has_narrow {
            missing.push("narrow");
        }
        if !facts.has_medium {
            missing.push("medium");
        }
        if !facts.has_wide {
            missing.push("wide");
        }
        issues.push(format!("breakpoint tiers not covered: {}", missing.join(", ")));
    }

    if facts.has_flex {
        score += 6;
    } else {
        issues.push("no flexbox layout declarations".to_string());
    }

    if facts.has_grid {
        score += 7;
    } else {
        issues.push("no grid layout declarations".to_string());
    }

    Finding {
        category: "responsive".to_string(),
        score,
        issues,
    }
}
