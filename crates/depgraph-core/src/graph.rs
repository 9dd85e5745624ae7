//! The graph document: nodes, grouped edges and the build it belongs to

use crate::model::*;
use serde::{Deserialize, Serialize};

/// A fully materialized dependency graph.
///
/// Holds both the normalized edge groups and, on each node, the
/// denormalized neighbor lists. Neither view is derived from the other.
/// Sequence order is the declaration order of the source document.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default, deserialize_with = "null_as_default")]
    pub edges: Vec<Edge>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<Node>,
    /// Set by whoever loads the graph. Any `id` in an input document is ignored.
    #[serde(rename = "id", skip_deserializing, skip_serializing_if = "String::is_empty")]
    pub build_id: String,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("build_id", &self.build_id)
            .field("node_count", &self.nodes.len())
            .field("edge_count", &self.edges.len())
            .finish()
    }
}

impl Graph {
    pub fn new(build_id: impl Into<String>) -> Self {
        Graph {
            edges: Vec::new(),
            nodes: Vec::new(),
            build_id: build_id.into(),
        }
    }

    /// Decode a graph document. The build id is left empty.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        let graph: Graph = serde_json::from_slice(bytes)?;
        tracing::debug!(
            "Decoded graph document: {} nodes, {} edge groups",
            graph.nodes.len(),
            graph.edges.len()
        );
        Ok(graph)
    }

    /// Encode back into the document schema, including `id` when set.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edge groups (not individual targets).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Find a node by name (first match).
    pub fn find_node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Get all nodes of a specific type, in declaration order.
    pub fn nodes_of_type<'a>(&'a self, node_type: &'a NodeType) -> impl Iterator<Item = &'a Node> {
        self.nodes.iter().filter(move |n| n.node_type() == node_type)
    }

    /// Edge groups whose source node has the given name.
    pub fn edges_from<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Edge> {
        self.edges.iter().filter(move |e| e.from_node.name == name)
    }
}
