//! HTML fragment parsing into output nodes.
//!
//! Uses scraper (html5ever) in fragment mode, so stray `<html>`/`<body>`
//! wrappers never appear in the result.

use scraper::{ElementRef, Html, Node as HtmlNode};

use crate::attr::Properties;
use crate::output::{Comment, Element, OutputNode};

/// Parse an HTML fragment into output nodes, in source order.
pub fn parse_fragment(html: &str) -> Vec<OutputNode> {
    let fragment = Html::parse_fragment(html);
    convert_children(fragment.root_element())
}

fn convert_children(parent: ElementRef<'_>) -> Vec<OutputNode> {
    parent
        .children()
        .filter_map(|child| match child.value() {
            HtmlNode::Element(_) => ElementRef::wrap(child).map(|element| OutputNode::from(convert_element(element))),
            HtmlNode::Text(text) => Some(OutputNode::text(text.text.to_string())),
            HtmlNode::Comment(comment) => Some(OutputNode::Comment(Comment {
                value: comment.comment.to_string(),
            })),
            // Doctype and processing instructions cannot appear in a fragment body
            _ => None,
        })
        .collect()
}

fn convert_element(element: ElementRef<'_>) -> Element {
    let value = element.value();
    let properties: Properties = value.attrs().collect();
    Element {
        tag: value.name().to_string(),
        properties,
        children: convert_children(element),
    }
}
