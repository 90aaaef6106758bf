//! Document tree types.
//!
//! A small mdast-shaped tree: only paragraphs and links carry structure the
//! embed engine inspects; everything else is an [`Other`] node with a free
//! `kind` so any parser's output can be represented without loss of order.
//!
//! # Key Features
//!
//! - `Link` owns a typed [`LinkData`] extension instead of an untyped bag
//! - `Root` provides traversal and the bare-link collection used by the engine
//! - Positions are carried through verbatim for diagnostics

mod document;
mod link;
mod text;

pub use document::Root;
pub use link::{Link, LinkData, RenderOverride};
pub use text::Text;

use smallvec::SmallVec;

use crate::attr::{PropValue, Properties};
use crate::span::Position;

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 8]>;

/// Paragraph node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub children: Children,
    pub position: Option<Position>,
}

impl Paragraph {
    /// Create a paragraph from children.
    pub fn new(children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            children: children.into_iter().collect(),
            position: None,
        }
    }

    /// Attach a source position.
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

/// Any node kind the engine does not inspect (heading, emphasis, code, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Other {
    /// Node type discriminant, e.g. `"heading"`
    pub kind: String,
    /// Literal value for leaf kinds such as inline code
    pub value: Option<String>,
    /// Kind-specific fields: heading `depth`, list `ordered`, code `lang`, ...
    pub properties: Properties,
    pub children: Children,
    pub position: Option<Position>,
}

impl Other {
    /// Create a parent node of `kind`.
    pub fn new(kind: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            kind: kind.into(),
            value: None,
            properties: Properties::new(),
            children: children.into_iter().collect(),
            position: None,
        }
    }

    /// Create a literal leaf of `kind`.
    pub fn literal(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: Some(value.into()),
            properties: Properties::new(),
            children: Children::new(),
            position: None,
        }
    }

    /// Set a kind-specific field (builder pattern).
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.properties.set(name, value);
        self
    }
}

/// Node in a document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Paragraph(Box<Paragraph>),
    Link(Box<Link>),
    Text(Text),
    Other(Box<Other>),
}

impl Node {
    // Generates for each variant (paragraph -> Paragraph, etc.):
    //   - is_xxx(&self) -> bool
    //   - as_xxx(&self) -> Option<&Type>
    //   - as_xxx_mut(&mut self) -> Option<&mut Type>
    impl_enum_accessors!(paragraph, link, text, other);

    /// Create a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(Text::new(value))
    }

    /// Node type discriminant (`"paragraph"`, `"link"`, `"text"` or the
    /// `Other` kind).
    pub fn kind(&self) -> &str {
        match self {
            Self::Paragraph(_) => "paragraph",
            Self::Link(_) => "link",
            Self::Text(_) => "text",
            Self::Other(o) => &o.kind,
        }
    }

    /// Child nodes, if this node kind has any.
    pub fn children(&self) -> Option<&Children> {
        match self {
            Self::Paragraph(p) => Some(&p.children),
            Self::Link(l) => Some(&l.children),
            Self::Other(o) => Some(&o.children),
            Self::Text(_) => None,
        }
    }

    /// Mutable child nodes, if this node kind has any.
    pub fn children_mut(&mut self) -> Option<&mut Children> {
        match self {
            Self::Paragraph(p) => Some(&mut p.children),
            Self::Link(l) => Some(&mut l.children),
            Self::Other(o) => Some(&mut o.children),
            Self::Text(_) => None,
        }
    }

    /// Source position of the node.
    pub fn position(&self) -> Option<&Position> {
        match self {
            Self::Paragraph(p) => p.position.as_ref(),
            Self::Link(l) => l.position.as_ref(),
            Self::Text(t) => t.position.as_ref(),
            Self::Other(o) => o.position.as_ref(),
        }
    }
}

impl From<Paragraph> for Node {
    fn from(p: Paragraph) -> Self {
        Self::Paragraph(Box::new(p))
    }
}

impl From<Link> for Node {
    fn from(l: Link) -> Self {
        Self::Link(Box::new(l))
    }
}

impl From<Text> for Node {
    fn from(t: Text) -> Self {
        Self::Text(t)
    }
}

impl From<Other> for Node {
    fn from(o: Other) -> Self {
        Self::Other(Box::new(o))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_accessors() {
        let mut node = Node::from(Link::autolink("https://example.com"));
        assert!(node.is_link());
        assert!(!node.is_text());
        assert_eq!(node.kind(), "link");
        assert_eq!(node.as_link().map(|l| l.url.as_str()), Some("https://example.com"));

        if let Some(link) = node.as_link_mut() {
            link.title = Some("Example".into());
        }
        assert_eq!(node.as_link().and_then(|l| l.title.as_deref()), Some("Example"));
    }

    #[test]
    fn test_other_kind_and_children() {
        let node = Node::from(Other::new("emphasis", [Node::text("hi")]));
        assert_eq!(node.kind(), "emphasis");
        assert_eq!(node.children().map(|c| c.len()), Some(1));
        assert!(Node::text("x").children().is_none());
    }
}
