use super::node::DomNode;

/// Decision returned by a [`traverse`] matcher for one node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visit {
    /// Append the node to the result
    pub keep: bool,
    /// Do not descend into the node's children
    pub stop: bool,
}

impl Visit {
    pub const fn new(keep: bool, stop: bool) -> Self {
        Self { keep, stop }
    }

    /// Neither keep nor prune; keep walking down
    pub const fn descend() -> Self {
        Self::new(false, false)
    }

    pub const fn keep() -> Self {
        Self::new(true, false)
    }

    /// Keep the node and skip everything below it
    pub const fn keep_and_stop() -> Self {
        Self::new(true, true)
    }
}

/// Walk the tree under `root` in pre-order and collect the nodes the matcher
/// keeps.
///
/// A node is visited before its children and children left to right. `stop`
/// only prunes the subtree of the node it was returned for; siblings and the
/// rest of the tree are still visited. The walk uses an explicit stack so
/// nesting depth is bounded by memory, not by the call stack.
pub fn traverse<N, F>(root: N, mut matcher: F) -> Vec<N>
where
    N: DomNode,
    F: FnMut(N) -> Visit,
{
    let mut kept = Vec::new();

    let visit = matcher(root);
    if visit.keep {
        kept.push(root);
    }
    if visit.stop {
        return kept;
    }

    // The root's own siblings are outside the walk, so only its children seed
    // the stack.
    let mut pending: Vec<N> = root.first_child().into_iter().collect();
    while let Some(node) = pending.pop() {
        let visit = matcher(node);
        if visit.keep {
            kept.push(node);
        }
        pending.extend(node.next_sibling());
        if !visit.stop {
            pending.extend(node.first_child());
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::{document_root, NodeKind};
    use scraper::Html;

    fn label<N: DomNode>(node: N) -> String {
        match node.kind() {
            NodeKind::Element => node.tag_name().unwrap_or_default().to_string(),
            NodeKind::Text => format!("#{}", node.text().unwrap_or_default()),
            NodeKind::Other => "?".to_string(),
        }
    }

    #[test]
    fn test_descend_visits_every_node_in_pre_order() {
        let document = Html::parse_fragment("<div><p>a</p><p>b<i>c</i></p></div><span>d</span>");
        let mut seen = Vec::new();
        let kept = traverse(document_root(&document), |node| {
            seen.push(label(node));
            Visit::descend()
        });

        assert!(kept.is_empty());
        assert_eq!(
            seen,
            vec!["?", "html", "div", "p", "#a", "p", "#b", "i", "#c", "span", "#d"]
        );
    }

    #[test]
    fn test_stop_on_root_visits_no_descendants() {
        let document = Html::parse_fragment("<div><p>a</p></div>");
        let root = document_root(&document);

        let mut visits = 0;
        let kept = traverse(root, |_| {
            visits += 1;
            Visit::keep_and_stop()
        });
        assert_eq!(visits, 1);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id(), root.id());

        let kept = traverse(root, |_| Visit::new(false, true));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_stop_only_prunes_current_subtree() {
        let document =
            Html::parse_fragment("<div><p>skip me</p><p>keep me</p></div><p>and me</p>");
        let mut first_p = true;
        let kept = traverse(document_root(&document), |node| {
            if node.kind() == NodeKind::Text {
                return Visit::keep();
            }
            if node.is_element("p") && first_p {
                first_p = false;
                return Visit::new(false, true);
            }
            Visit::descend()
        });

        let texts: Vec<_> = kept.iter().filter_map(|node| node.text()).collect();
        assert_eq!(texts, vec!["keep me", "and me"]);
    }

    #[test]
    fn test_root_siblings_are_not_visited() {
        let document = Html::parse_fragment("<p>one</p><p>two</p>");
        let first = document
            .root_element()
            .children()
            .find(|node| node.is_element("p"))
            .unwrap();

        let kept = traverse(first, |node| Visit::new(node.kind() == NodeKind::Text, false));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].text(), Some("one"));
    }
}
