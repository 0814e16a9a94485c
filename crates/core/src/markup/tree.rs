//! Read-only view over any parsed markup tree.

use scraper::node::Node;

/// A node in a navigable markup tree.
///
/// Mirrors the shape every DOM-ish parse tree exposes: a kind, sibling and
/// child links, and attributes on element nodes. The extractor only ever
/// reads through this trait, so it can run against the real HTML parser's
/// tree or against a hand-built one in tests.
///
/// `kind` is the element name for element nodes and the literal text for
/// text nodes; anything else (document roots, comments, doctypes) reports
/// an empty kind and is simply never matched by the extractor.
pub trait MarkupNode<'a>: Copy {
    /// Element name, or literal text content for text nodes.
    fn kind(&self) -> &'a str;

    /// First child in document order, if any.
    fn first_child(&self) -> Option<Self>;

    /// Next sibling in document order, if any.
    fn next_sibling(&self) -> Option<Self>;

    /// Attribute value, element nodes only.
    fn attr(&self, name: &str) -> Option<&'a str>;
}

impl<'a> MarkupNode<'a> for ego_tree::NodeRef<'a, Node> {
    fn kind(&self) -> &'a str {
        match self.value() {
            Node::Element(element) => element.name(),
            Node::Text(text) => &**text,
            _ => "",
        }
    }

    fn first_child(&self) -> Option<Self> {
        ego_tree::NodeRef::first_child(self)
    }

    fn next_sibling(&self) -> Option<Self> {
        ego_tree::NodeRef::next_sibling(self)
    }

    fn attr(&self, name: &str) -> Option<&'a str> {
        match self.value() {
            Node::Element(element) => element.attr(name),
            _ => None,
        }
    }
}
