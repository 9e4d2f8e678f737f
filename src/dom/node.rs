use ego_tree::NodeRef;
use scraper::{Html, Node};

/// A node handle borrowed from a parsed `scraper` document
pub type HtmlNode<'a> = NodeRef<'a, Node>;

/// Coarse node classification used by the search predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    /// Comments, doctypes, the document and fragment roots
    Other,
}

/// Read-only view of a first-child/next-sibling tree.
///
/// Handles are cheap to copy and never outlive the tree that owns them. The
/// tree is assumed to be finite and acyclic and must not change while a
/// search is running.
pub trait DomNode: Copy {
    fn kind(&self) -> NodeKind;

    /// Local tag name, `None` unless the node is an element
    fn tag_name(&self) -> Option<&str>;

    /// Attribute pairs in document order; keys may repeat
    fn attributes(&self) -> impl Iterator<Item = (&str, &str)>;

    /// Character data, `None` unless the node is a text node
    fn text(&self) -> Option<&str>;

    fn first_child(&self) -> Option<Self>;

    fn next_sibling(&self) -> Option<Self>;

    fn children(&self) -> Children<Self> {
        Children {
            next: self.first_child(),
        }
    }

    fn is_element(&self, tag: &str) -> bool {
        self.kind() == NodeKind::Element && self.tag_name() == Some(tag)
    }

    /// True when any `class` attribute equals `class` exactly.
    ///
    /// The attribute value is compared as one opaque string, so
    /// `class="a b"` does not match `"a"`.
    fn has_class(&self, class: &str) -> bool {
        self.attributes()
            .any(|(key, value)| key == "class" && value == class)
    }
}

/// Iterator over the direct children of a node, left to right
#[derive(Debug, Clone)]
pub struct Children<N> {
    next: Option<N>,
}

impl<N: DomNode> Iterator for Children<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.next?;
        self.next = current.next_sibling();
        Some(current)
    }
}

impl DomNode for HtmlNode<'_> {
    fn kind(&self) -> NodeKind {
        match self.value() {
            Node::Element(_) => NodeKind::Element,
            Node::Text(_) => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }

    fn tag_name(&self) -> Option<&str> {
        self.value().as_element().map(|element| element.name())
    }

    fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.value()
            .as_element()
            .map(|element| element.attrs())
            .into_iter()
            .flatten()
    }

    fn text(&self) -> Option<&str> {
        self.value().as_text().map(|text| &**text)
    }

    fn first_child(&self) -> Option<Self> {
        NodeRef::first_child(self)
    }

    fn next_sibling(&self) -> Option<Self> {
        NodeRef::next_sibling(self)
    }
}

/// Root of a parsed document, the node every search usually starts from
pub fn document_root(document: &Html) -> HtmlNode<'_> {
    document.tree.root()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_and_tag_names() {
        let document = Html::parse_fragment(r#"<p class="lead">Hi<!-- note --></p>"#);
        let root = document_root(&document);
        assert_eq!(root.kind(), NodeKind::Other);
        assert_eq!(root.tag_name(), None);

        let p = document
            .root_element()
            .children()
            .find(|node| node.is_element("p"))
            .unwrap();
        assert_eq!(p.kind(), NodeKind::Element);
        assert!(p.has_class("lead"));
        assert!(!p.has_class("lea"));

        let kinds: Vec<_> = DomNode::children(&p).map(|node| node.kind()).collect();
        assert_eq!(kinds, vec![NodeKind::Text, NodeKind::Other]);
        assert_eq!(DomNode::first_child(&p).unwrap().text(), Some("Hi"));
    }

    #[test]
    fn test_class_match_is_exact() {
        let document = Html::parse_fragment(r#"<ul class="wprm-recipe-ingredients extra"></ul>"#);
        let ul = document
            .root_element()
            .children()
            .find(|node| node.is_element("ul"))
            .unwrap();
        assert!(ul.has_class("wprm-recipe-ingredients extra"));
        assert!(!ul.has_class("wprm-recipe-ingredients"));
    }

    #[test]
    fn test_attributes_of_non_element_are_empty() {
        let document = Html::parse_fragment("plain text");
        let text = document
            .root_element()
            .children()
            .find(|node| node.kind() == NodeKind::Text)
            .unwrap();
        assert_eq!(text.attributes().count(), 0);
        assert_eq!(text.text(), Some("plain text"));
    }
}
