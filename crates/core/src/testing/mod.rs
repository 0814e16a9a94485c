//! Test support: hand-built markup trees with a known exact shape.
//!
//! The HTML parser is free to normalize documents (implicit tbody, foster
//! parenting, entity decoding), which makes it a poor tool for testing the
//! positional navigation itself. `StaticTree` is a tree that contains
//! exactly the nodes it was built from, nothing more.

mod tree;

pub use tree::{NodeSpec, StaticNode, StaticTree};

pub mod fixtures;
