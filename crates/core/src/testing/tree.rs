//! An arena-backed markup tree built from nested node specs.

use crate::markup::MarkupNode;

/// Declarative description of one node and its subtree.
#[derive(Debug, Clone)]
pub struct NodeSpec {
    kind: String,
    attrs: Vec<(String, String)>,
    children: Vec<NodeSpec>,
}

impl NodeSpec {
    /// An element node with the given name.
    pub fn element(name: &str) -> Self {
        Self {
            kind: name.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A text node. Its kind reports the literal text, like the parser's
    /// text nodes do.
    pub fn text(text: &str) -> Self {
        Self {
            kind: text.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    /// Append a child subtree.
    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }
}

struct StaticNodeData {
    kind: String,
    attrs: Vec<(String, String)>,
    first_child: Option<usize>,
    next_sibling: Option<usize>,
}

/// An immutable tree whose shape is exactly what was specified.
pub struct StaticTree {
    nodes: Vec<StaticNodeData>,
}

impl StaticTree {
    /// Flatten a node description into an arena tree.
    pub fn build(root: NodeSpec) -> Self {
        let mut nodes = Vec::new();
        flatten(root, &mut nodes);
        Self { nodes }
    }

    /// Handle to the root node.
    pub fn root(&self) -> StaticNode<'_> {
        StaticNode { tree: self, index: 0 }
    }
}

fn flatten(spec: NodeSpec, nodes: &mut Vec<StaticNodeData>) -> usize {
    let index = nodes.len();
    nodes.push(StaticNodeData {
        kind: spec.kind,
        attrs: spec.attrs,
        first_child: None,
        next_sibling: None,
    });

    let mut previous: Option<usize> = None;
    for child in spec.children {
        let child_index = flatten(child, nodes);
        match previous {
            None => nodes[index].first_child = Some(child_index),
            Some(prev) => nodes[prev].next_sibling = Some(child_index),
        }
        previous = Some(child_index);
    }

    index
}

/// A lightweight node handle into a [`StaticTree`].
#[derive(Clone, Copy)]
pub struct StaticNode<'a> {
    tree: &'a StaticTree,
    index: usize,
}

impl<'a> StaticNode<'a> {
    fn data(&self) -> &'a StaticNodeData {
        &self.tree.nodes[self.index]
    }
}

impl<'a> MarkupNode<'a> for StaticNode<'a> {
    fn kind(&self) -> &'a str {
        &self.data().kind
    }

    fn first_child(&self) -> Option<Self> {
        self.data().first_child.map(|index| StaticNode {
            tree: self.tree,
            index,
        })
    }

    fn next_sibling(&self) -> Option<Self> {
        self.data().next_sibling.map(|index| StaticNode {
            tree: self.tree,
            index,
        })
    }

    fn attr(&self, name: &str) -> Option<&'a str> {
        self.data()
            .attrs
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }
}
