//! Output nodes produced by transformers.
//!
//! This is the replacement markup a transformer hands back: hast-shaped
//! elements, text and comments. It is deliberately separate from the input
//! document tree in [`crate::node`].

mod builder;
mod element;

pub use builder::{Child, h};
pub use element::Element;

/// Text content node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub value: String,
}

impl Text {
    /// Create a new text node
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// HTML comment node (kept from parsed embed fragments)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comment {
    pub value: String,
}

/// Output node - element, text or comment.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputNode {
    Element(Box<Element>),
    Text(Text),
    Comment(Comment),
}

impl OutputNode {
    /// Create a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(Text::new(value))
    }

    /// Check if this is an element node.
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Get as element reference.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as text reference.
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Element> for OutputNode {
    fn from(elem: Element) -> Self {
        Self::Element(Box::new(elem))
    }
}

impl From<Text> for OutputNode {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}
