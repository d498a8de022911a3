#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Formatter;

use anyhow::{Context, Result, anyhow};
use tree_sitter::{Query, QueryCursor, StreamingIterator, Tree};

use crate::Dict;

/// The grammars the inspectors parse submissions with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// HTML sources.
    Markup,
    /// CSS sources.
    Stylesheet,
}

impl Language {
    /// Returns the compiled tree-sitter grammar for this language.
    fn grammar(self) -> tree_sitter::Language {
        match self {
            Language::Markup => tree_sitter_html::LANGUAGE.into(),
            Language::Stylesheet => tree_sitter_css::LANGUAGE.into(),
        }
    }
}

/// An element found in parsed markup: its tag name plus attributes. Attribute
/// values are `None` for bare attributes like `<input required>`.
#[derive(Debug, Clone)]
pub struct Element {
    /// Lowercased tag name.
    pub name:  String,
    /// Attribute name/value pairs in source order.
    pub attrs: Vec<(String, Option<String>)>,
}

impl Element {
    /// Returns the value of the named attribute, if present with a value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref())
    }

    /// Returns true if the named attribute is present at all.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
    }
}

#[derive(Clone)]
/// A struct that wraps a tree-sitter parser object and source code
pub struct Parser {
    /// the source code being parsed
    code: String,
    /// the parse tree
    tree: Option<Tree>,
    /// the tree-sitter grammar in use
    lang: tree_sitter::Language,
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, _: &mut Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

impl Parser {
    /// Returns a new parser object
    ///
    /// * `source_code`: the source code to be parsed
    /// * `lang`: which grammar to parse it with
    pub fn new(source_code: String, lang: Language) -> Result<Self> {
        let mut parser = tree_sitter::Parser::new();
        let language = lang.grammar();

        parser
            .set_language(&language)
            .with_context(|| format!("Failed to load {lang:?} grammar"))?;
        let tree = parser
            .parse(source_code.as_str(), None)
            .ok_or_else(|| anyhow!("Error parsing {lang:?} source"))?;

        Ok(Self {
            code: source_code,
            tree: Some(tree),
            lang: language,
        })
    }

    /// A getter for parser's source code
    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    /// Returns true if the parse tree contains no syntax errors. Submissions
    /// are adversarial-quality, so this is a scoring signal, never a failure.
    pub fn is_well_formed(&self) -> bool {
        self.tree
            .as_ref()
            .map(|t| !t.root_node().has_error())
            .unwrap_or(false)
    }

    /// Applies a tree sitter query and returns the result as a collection of
    /// HashMaps
    ///
    /// * `q`: the tree-sitter query to be applied
    pub fn query(&self, q: &str) -> Result<Vec<Dict>> {
        let mut results = vec![];
        let tree = self
            .tree
            .as_ref()
            .context("Treesitter could not parse code")?;

        let query = Query::new(&self.lang, q)
            .with_context(|| format!("Failed to compile tree-sitter query: {q}"))?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), self.code.as_bytes());
        let mut capture_indices = Vec::new();

        for name in query.capture_names() {
            let index = query
                .capture_index_for_name(name)
                .ok_or_else(|| anyhow!("Capture name {name} has no index associated."))?;
            capture_indices.push((index, name.to_string()));
        }

        while let Some(m) = matches.next() {
            let mut result = Dict::new();

            for (index, name) in &capture_indices {
                let value = match m.captures.iter().find(|c| c.index == *index) {
                    Some(v) => v,
                    None => continue,
                };

                let value = value
                    .node
                    .utf8_text(self.code.as_bytes())
                    .with_context(|| {
                        format!(
                            "Cannot match query result indices with source code for capture name: \
                             {name}."
                        )
                    })?;

                result.insert(name.clone(), value.to_string());
            }
            results.push(result);
        }

        Ok(results)
    }

    /// Collects every element in parsed markup, in document order. Returns an
    /// empty collection for stylesheet parsers and for trees the walk cannot
    /// inspect.
    pub fn elements(&self) -> Vec<Element> {
        let Some(tree) = self.tree.as_ref() else {
            return vec![];
        };

        let mut elements = vec![];
        collect_elements(tree.root_node(), self.code.as_bytes(), &mut elements);
        elements
    }
}

/// Walks the markup tree with an explicit worklist and records every start or
/// self-closing tag together with its attributes. Iterative so that
/// arbitrarily deep nesting in student markup cannot exhaust the stack.
fn collect_elements(root: tree_sitter::Node<'_>, source: &[u8], out: &mut Vec<Element>) {
    let mut pending = vec![root];

    while let Some(node) = pending.pop() {
        if matches!(node.kind(), "start_tag" | "self_closing_tag") {
            let mut name = String::new();
            let mut attrs = vec![];

            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                match child.kind() {
                    "tag_name" => {
                        name = child
                            .utf8_text(source)
                            .unwrap_or_default()
                            .to_ascii_lowercase();
                    }
                    "attribute" => {
                        if let Some(attr) = read_attribute(child, source) {
                            attrs.push(attr);
                        }
                    }
                    _ => {}
                }
            }

            if !name.is_empty() {
                out.push(Element { name, attrs });
            }
        }

        // Pushed in reverse so popping keeps document order.
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            pending.push(child);
        }
    }
}

/// Reads one attribute node into a name/value pair.
fn read_attribute(node: tree_sitter::Node<'_>, source: &[u8]) -> Option<(String, Option<String>)> {
    let mut name = None;
    let mut value = None;

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "attribute_name" => {
                name = child.utf8_text(source).ok().map(|s| s.to_ascii_lowercase());
            }
            "attribute_value" => {
                value = child.utf8_text(source).ok().map(|s| s.to_string());
            }
            "quoted_attribute_value" => {
                let mut inner = child.walk();
                for grandchild in child.children(&mut inner) {
                    if grandchild.kind() == "attribute_value" {
                        value = grandchild.utf8_text(source).ok().map(|s| s.to_string());
                    }
                }
                // An empty quoted value has no attribute_value node.
                value = value.or_else(|| Some(String::new()));
            }
            _ => {}
        }
    }

    name.map(|n| (n, value))
}
