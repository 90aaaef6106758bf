//! Text node type
//!
//! Literal text content in the document tree.

use crate::span::Position;

// =============================================================================
// Text
// =============================================================================

/// Text content node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    /// Text content, exactly as parsed
    pub value: String,
    pub position: Option<Position>,
}

impl Text {
    /// Create a new text node
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            position: None,
        }
    }

    /// Check if text content is empty
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Check if text is only whitespace
    pub fn is_whitespace(&self) -> bool {
        self.value.trim().is_empty()
    }
}
