//! Generic markup-tree navigation.
//!
//! The search result page carries no stable element ids or class names
//! worth trusting, so extraction works purely positionally: a node is
//! reached from a reference node by a fixed sequence of first-child /
//! next-sibling moves. This module provides the tree abstraction those
//! moves run against and the tiny path language itself.

mod path;
mod tree;

pub use path::{find_by_kind, resolve_path, PathStep};
pub use tree::MarkupNode;
