use super::node::{DomNode, NodeKind};
use super::visitor::{traverse, Visit};

/// First node under and including `root`, in pre-order, that satisfies
/// `predicate`.
///
/// The search stops at the first hit; later siblings and subtrees are never
/// examined.
pub fn find_first<N, P>(root: N, mut predicate: P) -> Option<N>
where
    N: DomNode,
    P: FnMut(N) -> bool,
{
    if predicate(root) {
        return Some(root);
    }

    let mut pending: Vec<N> = root.first_child().into_iter().collect();
    while let Some(node) = pending.pop() {
        if predicate(node) {
            return Some(node);
        }
        pending.extend(node.next_sibling());
        pending.extend(node.first_child());
    }

    None
}

/// Element named `tag` whose `class` attribute is exactly `class`
pub fn has_tag_and_class<N: DomNode>(node: N, tag: &str, class: &str) -> bool {
    node.is_element(tag) && node.has_class(class)
}

/// Returns the first element underneath and including `root` with the given
/// tag name and class value (as written in the HTML).
pub fn get_element_with_class<N: DomNode>(root: N, tag: &str, class: &str) -> Option<N> {
    find_first(root, |node| has_tag_and_class(node, tag, class))
}

/// Returns the first text node underneath and including `root`
pub fn get_text_node<N: DomNode>(root: N) -> Option<N> {
    find_first(root, |node| node.kind() == NodeKind::Text)
}

/// All character data under `root` joined in document order, with runs of
/// whitespace collapsed to one space and the ends trimmed.
pub fn text_content<N: DomNode>(root: N) -> String {
    let mut raw = String::new();
    for node in traverse(root, |node| Visit::new(node.kind() == NodeKind::Text, false)) {
        raw.push_str(node.text().unwrap_or_default());
    }
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
