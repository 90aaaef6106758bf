//! Element builder.
//!
//! [`h`] normalizes loosely-typed children: strings become text nodes and
//! absent children (`None`) are dropped instead of rendered empty.

use crate::attr::Properties;

use super::{Element, OutputNode, Text};

/// A child passed to [`h`]; `Child(None)` is filtered out.
#[derive(Debug, Clone, PartialEq)]
pub struct Child(pub Option<OutputNode>);

impl From<OutputNode> for Child {
    fn from(node: OutputNode) -> Self {
        Self(Some(node))
    }
}

impl From<Element> for Child {
    fn from(elem: Element) -> Self {
        Self(Some(elem.into()))
    }
}

impl From<Text> for Child {
    fn from(text: Text) -> Self {
        Self(Some(text.into()))
    }
}

impl From<&str> for Child {
    fn from(value: &str) -> Self {
        Self(Some(OutputNode::text(value)))
    }
}

impl From<String> for Child {
    fn from(value: String) -> Self {
        Self(Some(OutputNode::text(value)))
    }
}

impl From<&String> for Child {
    fn from(value: &String) -> Self {
        Self(Some(OutputNode::text(value.as_str())))
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self(None), Into::into)
    }
}

/// Create an element from a tag, properties and children.
pub fn h<C>(tag: impl Into<String>, properties: Properties, children: impl IntoIterator<Item = C>) -> Element
where
    C: Into<Child>,
{
    Element {
        tag: tag.into(),
        properties,
        children: children
            .into_iter()
            .filter_map(|child| child.into().0)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_h_wraps_strings_and_drops_none() {
        let description: Option<String> = None;
        let elem = h!(
            "div",
            props! { "class" => "card" },
            "title",
            description.map(|d| h!("p", props!(), d)),
            Some(h!("span"))
        );

        assert_eq!(elem.tag, "div");
        assert_eq!(elem.class(), Some("card"));
        assert_eq!(elem.children.len(), 2);
        assert_eq!(elem.children[0], OutputNode::text("title"));
        assert_eq!(elem.children[1].as_element().map(|e| e.tag.as_str()), Some("span"));
    }

    #[test]
    fn test_h_keeps_empty_strings() {
        let elem = h("p", Properties::new(), [""]);
        assert_eq!(elem.children, vec![OutputNode::text("")]);
    }
}
