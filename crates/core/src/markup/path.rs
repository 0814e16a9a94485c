//! Positional path language over markup trees.

use super::MarkupNode;

/// One directional move over a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStep {
    /// Descend to the node's first child.
    FirstChild,
    /// Advance to the node's next sibling.
    NextSibling,
}

/// Walk a fixed path from a reference node.
///
/// Returns `None` when the tree runs out of children or siblings before the
/// path is exhausted. That is a navigation failure, not a defect: the page
/// layout the paths were derived from is assumed stable, not guaranteed.
pub fn resolve_path<'a, N: MarkupNode<'a>>(start: N, path: &[PathStep]) -> Option<N> {
    let mut node = start;
    for step in path {
        node = match step {
            PathStep::FirstChild => node.first_child()?,
            PathStep::NextSibling => node.next_sibling()?,
        };
    }
    Some(node)
}

/// Depth-first search for the first node of the given kind.
///
/// Children are explored before siblings, so "first" means first in
/// document order, matching how a reader scans the page source.
pub fn find_by_kind<'a, N: MarkupNode<'a>>(node: N, kind: &str) -> Option<N> {
    if node.kind() == kind {
        return Some(node);
    }
    if let Some(found) = node.first_child().and_then(|child| find_by_kind(child, kind)) {
        return Some(found);
    }
    node.next_sibling()
        .and_then(|sibling| find_by_kind(sibling, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{NodeSpec, StaticTree};
    use PathStep::{FirstChild, NextSibling};

    fn sample_tree() -> StaticTree {
        // root -> (a -> (text "one"), b -> (c))
        StaticTree::build(
            NodeSpec::element("root")
                .child(NodeSpec::element("a").child(NodeSpec::text("one")))
                .child(NodeSpec::element("b").child(NodeSpec::element("c"))),
        )
    }

    #[test]
    fn test_resolve_empty_path_is_identity() {
        let tree = sample_tree();
        let node = resolve_path(tree.root(), &[]).unwrap();
        assert_eq!(node.kind(), "root");
    }

    #[test]
    fn test_resolve_descends_and_advances() {
        let tree = sample_tree();
        let text = resolve_path(tree.root(), &[FirstChild, FirstChild]).unwrap();
        assert_eq!(text.kind(), "one");

        let c = resolve_path(tree.root(), &[FirstChild, NextSibling, FirstChild]).unwrap();
        assert_eq!(c.kind(), "c");
    }

    #[test]
    fn test_resolve_runs_off_the_tree() {
        let tree = sample_tree();
        assert!(resolve_path(tree.root(), &[FirstChild, NextSibling, NextSibling]).is_none());
        assert!(resolve_path(tree.root(), &[NextSibling]).is_none());
    }

    #[test]
    fn test_find_by_kind_prefers_children_over_siblings() {
        // Both a subtree child and a later sibling carry the marker; the
        // child must win.
        let tree = StaticTree::build(
            NodeSpec::element("root")
                .child(NodeSpec::element("wrap").child(NodeSpec::element("hit").attr("which", "child")))
                .child(NodeSpec::element("hit").attr("which", "sibling")),
        );
        let found = find_by_kind(tree.root(), "hit").unwrap();
        assert_eq!(found.attr("which"), Some("child"));
    }

    #[test]
    fn test_find_by_kind_missing() {
        let tree = sample_tree();
        assert!(find_by_kind(tree.root(), "tbody").is_none());
    }
}
