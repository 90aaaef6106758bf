//! HTML Rendering
//!
//! Renders document trees, including committed embeds, to HTML strings.
//! `Other` nodes map to the element of their mdast kind (`heading` with
//! `depth` 2 renders as `<h2>`, an ordered `list` as `<ol>`).

use std::borrow::Cow;

use crate::attr::{PropValue, Properties};
use crate::node::{Link, Node, Other, Root};
use crate::output::{Element, OutputNode};

// =============================================================================
// RenderConfig
// =============================================================================

/// Configuration for HTML rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Close void elements as `<br />` instead of `<br>`.
    pub self_closing: bool,
    /// Emit `html` literals from the source verbatim instead of escaping them.
    pub raw_html: bool,
}

impl RenderConfig {
    /// XHTML-style void elements, escaped source HTML.
    pub const XHTML: Self = Self {
        self_closing: true,
        raw_html: false,
    };

    /// HTML5 void elements, escaped source HTML.
    pub const HTML: Self = Self {
        self_closing: false,
        raw_html: false,
    };

    /// Create a new config.
    pub fn new(self_closing: bool, raw_html: bool) -> Self {
        Self { self_closing, raw_html }
    }

    /// Pass source HTML through unescaped (builder pattern).
    pub fn with_raw_html(mut self, raw_html: bool) -> Self {
        self.raw_html = raw_html;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::XHTML
    }
}

// =============================================================================
// Document Rendering
// =============================================================================

/// Render a document to HTML string.
pub fn render_root(root: &Root, config: &RenderConfig) -> String {
    let mut output = String::new();
    for child in &root.children {
        render_node(child, config, &mut output);
    }
    output
}

/// Render transformer output to HTML string.
pub fn render_nodes(nodes: &[OutputNode], config: &RenderConfig) -> String {
    let mut output = String::new();
    for node in nodes {
        render_output(node, config, &mut output);
    }
    output
}

fn render_node(node: &Node, config: &RenderConfig, output: &mut String) {
    match node {
        Node::Paragraph(p) => {
            output.push_str("<p>");
            for child in &p.children {
                render_node(child, config, output);
            }
            output.push_str("</p>");
        }
        Node::Link(link) => render_link(link, config, output),
        Node::Text(text) => output.push_str(&escape_html(&text.value)),
        Node::Other(other) => render_other(other, config, output),
    }
}

/// Render an mdast node with its usual HTML element.
///
/// Frontmatter and definitions produce nothing. Kinds without an element
/// render their literal value or their children.
fn render_other(other: &Other, config: &RenderConfig, output: &mut String) {
    let value = other.value.as_deref().unwrap_or_default();
    match other.kind.as_str() {
        "html" if config.raw_html => output.push_str(value),
        "yaml" | "toml" | "definition" | "footnoteDefinition" => {}
        "inlineCode" => {
            output.push_str("<code>");
            output.push_str(&escape_html(value));
            close_tag("code", output);
        }
        "code" => {
            let class = other.properties.get_str("lang").map(|lang| format!("language-{lang}"));
            output.push_str("<pre>");
            open_tag("code", &Properties::new().with("class", class), output);
            output.push('>');
            output.push_str(&escape_html(value));
            output.push_str("</code></pre>");
        }
        "break" => {
            open_tag("br", &Properties::new(), output);
            close_void(config, output);
        }
        "thematicBreak" => {
            open_tag("hr", &Properties::new(), output);
            close_void(config, output);
        }
        "image" => {
            let props = &other.properties;
            let attrs = Properties::new()
                .with("src", props.get_str("src"))
                .with("alt", props.get_str("alt").unwrap_or_default())
                .with("title", props.get_str("title"));
            open_tag("img", &attrs, output);
            close_void(config, output);
        }
        _ => match element_of(other) {
            Some((tag, attrs)) => {
                open_tag(&tag, &attrs, output);
                output.push('>');
                for child in &other.children {
                    render_node(child, config, output);
                }
                close_tag(&tag, output);
            }
            None if other.value.is_some() => output.push_str(&escape_html(value)),
            None => {
                for child in &other.children {
                    render_node(child, config, output);
                }
            }
        },
    }
}

/// Element and attributes for container kinds.
fn element_of(other: &Other) -> Option<(Cow<'static, str>, Properties)> {
    let props = &other.properties;
    let tag = match other.kind.as_str() {
        "heading" => {
            let depth = match props.get("depth") {
                Some(PropValue::Integer(depth)) => (*depth).clamp(1, 6),
                _ => 1,
            };
            return Some((Cow::Owned(format!("h{depth}")), Properties::new()));
        }
        "list" if props.get("ordered") == Some(&PropValue::Bool(true)) => {
            let start = match props.get("start") {
                Some(PropValue::Integer(start)) if *start != 1 => Some(*start),
                _ => None,
            };
            return Some((Cow::Borrowed("ol"), Properties::new().with("start", start)));
        }
        "list" => "ul",
        "listItem" => "li",
        "blockquote" => "blockquote",
        "emphasis" => "em",
        "strong" => "strong",
        "delete" => "del",
        "table" => "table",
        "tableRow" => "tr",
        "tableCell" => "td",
        _ => return None,
    };
    Some((Cow::Borrowed(tag), Properties::new()))
}

/// Render a link, honoring a committed embed.
fn render_link(link: &Link, config: &RenderConfig, output: &mut String) {
    let mut attrs = Properties::new().with("href", link.url.as_str()).with("title", link.title.as_deref());

    match &link.data.render {
        Some(embed) => {
            attrs.merge(embed.properties.clone());
            open_tag(&embed.tag_name, &attrs, output);
            if is_void_element(&embed.tag_name) {
                close_void(config, output);
                return;
            }
            output.push('>');
            for child in &embed.children {
                render_output(child, config, output);
            }
            close_tag(&embed.tag_name, output);
        }
        None => {
            attrs.merge(link.data.properties.clone());
            open_tag("a", &attrs, output);
            output.push('>');
            for child in &link.children {
                render_node(child, config, output);
            }
            close_tag("a", output);
        }
    }
}

/// Render an element to HTML.
fn render_element(elem: &Element, config: &RenderConfig, output: &mut String) {
    open_tag(&elem.tag, &elem.properties, output);

    // Void elements
    if is_void_element(&elem.tag) {
        close_void(config, output);
        return;
    }

    output.push('>');
    for child in &elem.children {
        render_output(child, config, output);
    }
    close_tag(&elem.tag, output);
}

fn render_output(node: &OutputNode, config: &RenderConfig, output: &mut String) {
    match node {
        OutputNode::Element(elem) => render_element(elem, config, output),
        OutputNode::Text(text) => output.push_str(&escape_html(&text.value)),
        OutputNode::Comment(comment) => {
            output.push_str("<!--");
            output.push_str(&comment.value);
            output.push_str("-->");
        }
    }
}

fn open_tag(tag: &str, attrs: &Properties, output: &mut String) {
    output.push('<');
    output.push_str(tag);
    render_attrs(attrs, output);
}

fn close_void(config: &RenderConfig, output: &mut String) {
    output.push_str(if config.self_closing { " />" } else { ">" });
}

fn close_tag(tag: &str, output: &mut String) {
    output.push_str("</");
    output.push_str(tag);
    output.push('>');
}

/// Render attributes to HTML. `null` and `false` are omitted; `true` is a bare attribute.
fn render_attrs(attrs: &Properties, output: &mut String) {
    for (name, value) in attrs.iter() {
        let Some(text) = value.to_attr_value() else {
            continue;
        };
        output.push(' ');
        output.push_str(name);
        if *value != PropValue::Bool(true) {
            output.push_str("=\"");
            output.push_str(&escape_attr(&text));
            output.push('"');
        }
    }
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape attribute value special characters.
fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Check if element is a void element (self-closing).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Paragraph;

    fn paragraph(link: Link) -> Root {
        Root::new([Node::from(Paragraph::new([link.into()]))])
    }

    #[test]
    fn test_render_plain_link() {
        let root = paragraph(Link::autolink("https://example.com/?a=1&b=2"));
        assert_eq!(
            render_root(&root, &RenderConfig::default()),
            "<p><a href=\"https://example.com/?a=1&amp;b=2\">https://example.com/?a=1&amp;b=2</a></p>"
        );
    }

    #[test]
    fn test_render_embedded_link() {
        let mut link = Link::autolink("https://www.youtube.com/watch?v=jNQXAC9IVRw");
        link.data.commit(
            "div".into(),
            props! { "class" => "oembed-video", "href" => PropValue::Null },
            vec![h!("iframe", props! { "width" => "200", "allowfullscreen" => true }).into()],
        );

        assert_eq!(
            render_root(&paragraph(link), &RenderConfig::default()),
            "<p><div class=\"oembed-video\"><iframe width=\"200\" allowfullscreen></iframe></div></p>"
        );
    }

    #[test]
    fn test_render_void_elements() {
        let nodes = vec![OutputNode::from(h!("img", props! { "src" => "a.png", "alt" => "a \"b\"", "hidden" => false }))];
        assert_eq!(render_nodes(&nodes, &RenderConfig::default()), "<img src=\"a.png\" alt=\"a &quot;b&quot;\" />");
        assert_eq!(render_nodes(&nodes, &RenderConfig::HTML), "<img src=\"a.png\" alt=\"a &quot;b&quot;\">");
    }

    #[test]
    fn test_render_other_nodes() {
        let root = Root::new([
            Node::from(Other::new("heading", [Node::text("Title")]).with_property("depth", 2)),
            Node::from(Other::literal("html", "<hr>")),
            Node::from(Paragraph::new([Other::literal("inlineCode", "a < b").into()])),
        ]);

        assert_eq!(
            render_root(&root, &RenderConfig::default()),
            "<h2>Title</h2>&lt;hr&gt;<p><code>a &lt; b</code></p>"
        );
        assert_eq!(
            render_root(&root, &RenderConfig::default().with_raw_html(true)),
            "<h2>Title</h2><hr><p><code>a &lt; b</code></p>"
        );
    }

    #[test]
    fn test_render_block_structure() {
        let item = |text: &str| Node::from(Other::new("listItem", [Node::text(text)]));
        let root = Root::new([
            Node::from(Other::new("blockquote", [Node::from(Paragraph::new([Other::new("emphasis", [Node::text("quoted")]).into()]))])),
            Node::from(Other::new("list", [item("a"), item("b")]).with_property("ordered", true).with_property("start", 3)),
            Node::from(Other::new("list", [item("c")]).with_property("ordered", false)),
            Node::from(Other::literal("code", "x < y").with_property("lang", "rust")),
            Node::from(Other::new("thematicBreak", [])),
            Node::from(Other::literal("yaml", "title: hidden")),
        ]);

        assert_eq!(
            render_root(&root, &RenderConfig::HTML),
            "<blockquote><p><em>quoted</em></p></blockquote>\
             <ol start=\"3\"><li>a</li><li>b</li></ol>\
             <ul><li>c</li></ul>\
             <pre><code class=\"language-rust\">x &lt; y</code></pre>\
             <hr>"
        );
    }

    #[test]
    fn test_render_image() {
        let image = Other::new("image", [])
            .with_property("src", "a.png")
            .with_property("alt", "A & B")
            .with_property("title", PropValue::Null);
        let root = Root::new([Node::from(Paragraph::new([image.into()]))]);
        assert_eq!(
            render_root(&root, &RenderConfig::default()),
            "<p><img src=\"a.png\" alt=\"A &amp; B\" /></p>"
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }
}
