//! Conversion from markdown-rs mdast to the document tree.
//!
//! Paragraphs, links and text map to their typed nodes; every other mdast
//! node becomes an [`Other`] carrying its type name, literal value and
//! children, so document order and positions survive the round trip.

use ::markdown::mdast;
use ::markdown::unist;
use ::markdown::ParseOptions;

use crate::attr::Properties;
use crate::error::{EmbedError, EmbedResult};
use crate::node::{Children, Link, Node, Other, Paragraph, Root, Text};
use crate::span::{Point, Position};

/// Parse GitHub-flavored markdown into a document tree.
pub fn from_markdown(source: &str) -> EmbedResult<Root> {
    let mdast = ::markdown::to_mdast(source, &ParseOptions::gfm()).map_err(|e| EmbedError::Markdown(e.to_string()))?;
    Ok(from_mdast(&mdast))
}

/// Convert an mdast tree. A non-root node becomes the single child of the root.
pub fn from_mdast(node: &mdast::Node) -> Root {
    match node {
        mdast::Node::Root(root) => Root {
            children: convert_children(&root.children),
            position: root.position.as_ref().map(convert_position),
        },
        other => Root::new([convert_node(other)]),
    }
}

fn convert_children(children: &[mdast::Node]) -> Children {
    children.iter().map(convert_node).collect()
}

fn convert_node(node: &mdast::Node) -> Node {
    let position = node.position().map(convert_position);
    match node {
        mdast::Node::Paragraph(p) => Paragraph {
            children: convert_children(&p.children),
            position,
        }
        .into(),
        mdast::Node::Link(l) => Link {
            url: l.url.clone(),
            title: l.title.clone(),
            children: convert_children(&l.children),
            position,
            ..Link::default()
        }
        .into(),
        mdast::Node::Text(t) => Text {
            value: t.value.clone(),
            position,
        }
        .into(),
        other => Other {
            kind: kind_of(other).to_string(),
            value: literal_of(other).map(str::to_owned),
            properties: properties_of(other),
            children: other.children().map(|c| convert_children(c)).unwrap_or_default(),
            position,
        }
        .into(),
    }
}

fn convert_position(position: &unist::Position) -> Position {
    Position::new(
        Point::new(position.start.line, position.start.column, position.start.offset),
        Point::new(position.end.line, position.end.column, position.end.offset),
    )
}

fn literal_of(node: &mdast::Node) -> Option<&str> {
    match node {
        mdast::Node::InlineCode(n) => Some(&n.value),
        mdast::Node::InlineMath(n) => Some(&n.value),
        mdast::Node::Code(n) => Some(&n.value),
        mdast::Node::Math(n) => Some(&n.value),
        mdast::Node::Html(n) => Some(&n.value),
        mdast::Node::Toml(n) => Some(&n.value),
        mdast::Node::Yaml(n) => Some(&n.value),
        _ => None,
    }
}

/// Fields the renderer needs beyond kind and value.
fn properties_of(node: &mdast::Node) -> Properties {
    let mut props = Properties::new();
    match node {
        mdast::Node::Heading(h) => props.set("depth", h.depth),
        mdast::Node::List(l) => {
            props.set("ordered", l.ordered);
            props.set("start", l.start);
        }
        mdast::Node::Code(c) => props.set("lang", c.lang.as_deref()),
        mdast::Node::Image(i) => {
            props.set("src", i.url.as_str());
            props.set("alt", i.alt.as_str());
            props.set("title", i.title.as_deref());
        }
        _ => {}
    }
    props
}

/// mdast `type` name of a node.
fn kind_of(node: &mdast::Node) -> &'static str {
    match node {
        mdast::Node::Root(_) => "root",
        mdast::Node::Blockquote(_) => "blockquote",
        mdast::Node::FootnoteDefinition(_) => "footnoteDefinition",
        mdast::Node::List(_) => "list",
        mdast::Node::ListItem(_) => "listItem",
        mdast::Node::Toml(_) => "toml",
        mdast::Node::Yaml(_) => "yaml",
        mdast::Node::Break(_) => "break",
        mdast::Node::InlineCode(_) => "inlineCode",
        mdast::Node::InlineMath(_) => "inlineMath",
        mdast::Node::Delete(_) => "delete",
        mdast::Node::Emphasis(_) => "emphasis",
        mdast::Node::Strong(_) => "strong",
        mdast::Node::FootnoteReference(_) => "footnoteReference",
        mdast::Node::Html(_) => "html",
        mdast::Node::Image(_) => "image",
        mdast::Node::ImageReference(_) => "imageReference",
        mdast::Node::LinkReference(_) => "linkReference",
        mdast::Node::Code(_) => "code",
        mdast::Node::Math(_) => "math",
        mdast::Node::Heading(_) => "heading",
        mdast::Node::Table(_) => "table",
        mdast::Node::TableRow(_) => "tableRow",
        mdast::Node::TableCell(_) => "tableCell",
        mdast::Node::ThematicBreak(_) => "thematicBreak",
        mdast::Node::Definition(_) => "definition",
        mdast::Node::Paragraph(_) => "paragraph",
        mdast::Node::Link(_) => "link",
        mdast::Node::Text(_) => "text",
        // MDX constructs are not enabled by the GFM options
        _ => "mdx",
    }
}
