#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::web::{Element, Language, Parser};

/// Bonus feature identifier: a dark theme driven by `prefers-color-scheme`.
pub const BONUS_DARK_THEME: &str = "dark_theme";
/// Bonus feature identifier: responsive image sources.
pub const BONUS_ADAPTIVE_IMAGES: &str = "adaptive_images";
/// Bonus feature identifier: web-vitals friendly loading hints.
pub const BONUS_WEB_VITALS: &str = "web_vitals";

/// Detects optional bonus features in the submission sources. Bonuses only
/// ever add points; absence is not an issue.
pub fn detect_bonuses(markup: Option<&str>, css: Option<&str>) -> Vec<String> {
    let mut bonuses = vec![];

    if css.map(|c| c.contains("prefers-color-scheme")).unwrap_or(false) {
        bonuses.push(BONUS_DARK_THEME.to_string());
    }

    let elements = markup
        .and_then(|m| Parser::new(m.to_string(), Language::Markup).ok())
        .map(|p| p.elements())
        .unwrap_or_default();

    if has_adaptive_images(&elements) {
        bonuses.push(BONUS_ADAPTIVE_IMAGES.to_string());
    }
    if has_web_vitals_hints(&elements) {
        bonuses.push(BONUS_WEB_VITALS.to_string());
    }

    bonuses
}

/// True when the page uses `<picture>` or `srcset` image sources.
fn has_adaptive_images(elements: &[Element]) -> bool {
    elements.iter().any(|e| {
        e.name == "picture" || (matches!(e.name.as_str(), "img" | "source") && e.has_attr("srcset"))
    })
}

/// True when the page carries lazy loading, preconnect/preload hints, or
/// explicit image dimensions.
fn has_web_vitals_hints(elements: &[Element]) -> bool {
    let has_lazy = elements
        .iter()
        .any(|e| e.name == "img" && e.attr("loading") == Some("lazy"));
    let has_preconnect = elements.iter().any(|e| {
        e.name == "link" && matches!(e.attr("rel"), Some("preconnect") | Some("preload"))
    });
    let has_dimensions = elements
        .iter()
        .any(|e| e.name == "img" && e.has_attr("width") && e.has_attr("height"));

    has_lazy || has_preconnect || has_dimensions
}
