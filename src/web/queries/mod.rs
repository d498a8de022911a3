//! Tree-sitter query strings used by the markup and stylesheet inspectors.

/// Tree-sitter query that returns every element tag name in markup
/// * `name`: the tag name, from start tags and self-closing tags
pub const TAG_QUERY: &str = include_str!("tags.scm");

/// Tree-sitter query that returns every media rule in a stylesheet
/// * `media`: the whole `@media` statement, conditions and block
pub const MEDIA_QUERY: &str = include_str!("media.scm");

/// Tree-sitter query that returns every property declaration
/// * `property`: the property name
/// * `declaration`: the whole declaration text
pub const DECLARATION_QUERY: &str = include_str!("declarations.scm");

/// Tree-sitter query that returns every pseudo-class selector
/// * `selector`: the selector text, e.g. `:focus-visible`
pub const PSEUDO_CLASS_QUERY: &str = include_str!("pseudo_classes.scm");
