//! Link node and its embed extension record.

use crate::attr::Properties;
use crate::output::OutputNode;
use crate::span::Position;

use super::{Children, Node, Text};

// =============================================================================
// RenderOverride
// =============================================================================

/// Replacement shape committed by the transformer that claimed a link.
///
/// Renderers use it in place of the default anchor while the link keeps its
/// own `url` and `position`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOverride {
    /// Tag name to render instead of `a`
    pub tag_name: String,
    /// Pre-existing link properties merged with the transformer's
    pub properties: Properties,
    /// Body to render instead of the link's own children
    pub children: Vec<OutputNode>,
}

// =============================================================================
// LinkData
// =============================================================================

/// Extension record owned by a link node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkData {
    /// Tag name requested by an earlier stage; anything but `a` opts out of embedding
    pub hint: Option<String>,
    /// Properties set by earlier stages
    pub properties: Properties,
    /// Output slot, set at most once per resolution pass
    pub render: Option<RenderOverride>,
}

impl LinkData {
    /// Check if the hint is compatible with a plain anchor.
    pub fn renders_as_anchor(&self) -> bool {
        self.hint.as_deref().is_none_or(|hint| hint == "a")
    }

    /// Commit a transformer's output, merging `properties` over the existing bag.
    pub fn commit(&mut self, tag_name: String, properties: Properties, children: Vec<OutputNode>) {
        let mut merged = self.properties.clone();
        merged.merge(properties);
        self.render = Some(RenderOverride {
            tag_name,
            properties: merged,
            children,
        });
    }
}

// =============================================================================
// Link
// =============================================================================

/// Link node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Link {
    /// Destination, exactly as parsed
    pub url: String,
    pub title: Option<String>,
    pub children: Children,
    pub data: LinkData,
    pub position: Option<Position>,
}

impl Link {
    /// Create a link with no children.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Create a link whose only child is its own URL, as an autolink parses.
    pub fn autolink(url: impl Into<String>) -> Self {
        let url = url.into();
        Self::new(url.clone()).child(Node::text(url))
    }

    /// Append a child (builder pattern).
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Attach a source position.
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the tag-name hint (builder pattern).
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.data.hint = Some(hint.into());
        self
    }

    /// Structural part of the bare-link check.
    ///
    /// True iff the hint allows an anchor and the only child is a text node
    /// whose value equals `url` verbatim. The parent check (sole child of a
    /// paragraph) is done by the traversal in [`super::Root`].
    pub fn is_bare(&self) -> bool {
        if !self.data.renders_as_anchor() || self.children.len() != 1 {
            return false;
        }
        matches!(&self.children[0], Node::Text(Text { value, .. }) if *value == self.url)
    }

    /// Check if a transformer has claimed this link.
    pub fn is_embedded(&self) -> bool {
        self.data.render.is_some()
    }

    /// Line the link starts on, if known.
    pub fn line(&self) -> Option<usize> {
        self.position.as_ref().map(Position::start_line)
    }
}
