//! Root node and traversal utilities
//!
//! The root container for document trees, with query and traversal APIs.

use crate::span::Position;

use super::{Children, Link, Node};

// =============================================================================
// Root
// =============================================================================

/// Root document container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Root {
    pub children: Children,
    pub position: Option<Position>,
}

impl Root {
    /// Create a root from top-level nodes
    pub fn new(children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            children: children.into_iter().collect(),
            position: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query API
    // ─────────────────────────────────────────────────────────────────────────

    /// Iterate over all links (depth-first, document order)
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        NodeIterator::new(&self.children).filter_map(Node::as_link)
    }

    /// Find first link matching predicate
    pub fn find_link<F>(&self, predicate: F) -> Option<&Link>
    where
        F: Fn(&Link) -> bool,
    {
        self.links().find(|link| predicate(link))
    }

    /// Count links in document
    pub fn link_count(&self) -> usize {
        self.links().count()
    }

    /// Count nodes in document (root excluded)
    pub fn node_count(&self) -> usize {
        NodeIterator::new(&self.children).count()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutable traversal API
    // ─────────────────────────────────────────────────────────────────────────

    /// Visit all links with a closure (mutable)
    pub fn for_each_link_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Link),
    {
        Self::visit_links_mut(&mut self.children, &mut f);
    }

    fn visit_links_mut<F>(children: &mut Children, f: &mut F)
    where
        F: FnMut(&mut Link),
    {
        for child in children.iter_mut() {
            if let Node::Link(link) = child {
                f(link);
            }
            if let Some(grandchildren) = child.children_mut() {
                Self::visit_links_mut(grandchildren, f);
            }
        }
    }

    /// Collect every bare link in document order.
    ///
    /// A link qualifies when it is the only child of a paragraph and
    /// [`Link::is_bare`] holds. The returned borrows are disjoint, so each can
    /// be mutated independently by a concurrent task.
    pub fn bare_links_mut(&mut self) -> Vec<&mut Link> {
        let mut links = Vec::new();
        Self::collect_bare_links(&mut self.children, false, &mut links);
        links
    }

    fn collect_bare_links<'a>(children: &'a mut Children, in_paragraph: bool, out: &mut Vec<&'a mut Link>) {
        let sole_child = in_paragraph && children.len() == 1;
        for child in children.iter_mut() {
            if sole_child && matches!(child, Node::Link(link) if link.is_bare()) {
                if let Node::Link(link) = child {
                    out.push(link);
                }
                continue;
            }
            match child {
                Node::Paragraph(paragraph) => {
                    Self::collect_bare_links(&mut paragraph.children, true, out);
                }
                other => {
                    if let Some(grandchildren) = other.children_mut() {
                        Self::collect_bare_links(grandchildren, false, out);
                    }
                }
            }
        }
    }
}

// =============================================================================
// NodeIterator - depth-first node traversal
// =============================================================================

/// Depth-first iterator over nodes
pub struct NodeIterator<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> NodeIterator<'a> {
    fn new(children: &'a Children) -> Self {
        Self {
            stack: children.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for NodeIterator<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order so they're visited left-to-right
        if let Some(children) = node.children() {
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Other, Paragraph};

    fn bare(url: &str) -> Node {
        Paragraph::new([Link::autolink(url).into()]).into()
    }

    #[test]
    fn test_bare_links_in_document_order() {
        let mut root = Root::new([
            bare("https://a.example/"),
            Other::new("blockquote", [bare("https://b.example/")]).into(),
            bare("https://c.example/"),
        ]);

        let urls: Vec<_> = root.bare_links_mut().into_iter().map(|l| l.url.clone()).collect();
        assert_eq!(urls, ["https://a.example/", "https://b.example/", "https://c.example/"]);
    }

    #[test]
    fn test_bare_links_mut_reach_nested_links() {
        let mut root = Root::new([
            Other::new("list", [Other::new("listItem", [bare("https://a.example/")]).into()]).into(),
            Paragraph::new([Link::new("https://b.example/").child(Node::text("b")).into()]).into(),
            bare("https://c.example/"),
        ]);

        for link in root.bare_links_mut() {
            link.title = Some("bare".into());
        }

        let titled: Vec<_> = root.links().filter(|l| l.title.is_some()).map(|l| l.url.as_str()).collect();
        assert_eq!(titled, ["https://a.example/", "https://c.example/"]);
    }

    #[test]
    fn test_link_sharing_paragraph_is_skipped() {
        let mut root = Root::new([Paragraph::new([
            Node::text("according to "),
            Link::autolink("https://example.com").into(),
        ])
        .into()]);

        assert!(root.bare_links_mut().is_empty());
        assert_eq!(root.link_count(), 1);
    }

    #[test]
    fn test_link_outside_paragraph_is_skipped() {
        let mut root = Root::new([
            Link::autolink("https://example.com").into(),
            Other::new("heading", [Link::autolink("https://example.com").into()]).into(),
        ]);
        assert!(root.bare_links_mut().is_empty());
    }

    #[test]
    fn test_labelled_link_is_skipped() {
        let mut root = Root::new([Paragraph::new([Link::new("https://example.com")
            .child(Node::text("example"))
            .into()])
        .into()]);
        assert!(root.bare_links_mut().is_empty());
    }

    #[test]
    fn test_iterators() {
        let mut root = Root::new([bare("https://a.example/"), bare("https://b.example/")]);
        assert_eq!(root.node_count(), 6); // 2 × (paragraph + link + text)
        assert!(root.find_link(|l| l.url.contains("b.example")).is_some());

        root.for_each_link_mut(|l| l.title = Some("t".into()));
        assert!(root.links().all(|l| l.title.as_deref() == Some("t")));
    }
}
