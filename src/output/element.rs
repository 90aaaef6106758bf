//! Element type - the core building block of transformer output.

use crate::attr::{PropValue, Properties};

use super::OutputNode;

// =============================================================================
// Element
// =============================================================================

/// Output element: tag name, properties and ordered children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// HTML tag name
    pub tag: String,
    /// Element properties
    pub properties: Properties,
    /// Child nodes
    pub children: Vec<OutputNode>,
}

impl Element {
    /// Create an element with no properties or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            properties: Properties::new(),
            children: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder API
    // ─────────────────────────────────────────────────────────────────────────

    /// Set a property (builder pattern).
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.properties.set(name, value);
        self
    }

    /// Append a child element (builder pattern).
    pub fn child(mut self, elem: Element) -> Self {
        self.children.push(elem.into());
        self
    }

    /// Append a text child (builder pattern).
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.children.push(OutputNode::text(value));
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Get a property value by name.
    pub fn get_prop(&self, name: &str) -> Option<&PropValue> {
        self.properties.get(name)
    }

    /// Get the `class` property as a string.
    pub fn class(&self) -> Option<&str> {
        self.properties.get_str("class")
    }

    /// Iterate over child element references.
    pub fn children_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(OutputNode::as_element)
    }

    /// Find the first element (self included) matching the predicate, depth-first.
    pub fn find<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        Self::find_in(self, &predicate)
    }

    fn find_in<'a, F>(elem: &'a Element, predicate: &F) -> Option<&'a Element>
    where
        F: Fn(&Element) -> bool,
    {
        if predicate(elem) {
            return Some(elem);
        }
        elem.children_elements()
            .find_map(|child| Self::find_in(child, predicate))
    }

    /// Find the first element whose `class` equals `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.find(|e| e.class() == Some(class))
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                OutputNode::Text(t) => buf.push_str(&t.value),
                OutputNode::Element(e) => e.collect_text(buf),
                OutputNode::Comment(_) => {}
            }
        }
    }
}
