//! depgraph core: graph data model for files, symbols, libraries and artifacts

pub mod graph;
pub mod model;


#[cfg(test)]
pub mod test_utils;

pub use graph::Graph;
pub use model::{Edge, EdgeType, Node, NodeRelationship, NodeType, Relationships};
