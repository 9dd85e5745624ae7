//! Test fixtures for the graph model

use crate::model::*;

/// The smallest useful document: one file node, no edges.
pub const SINGLE_NODE_DOC: &str =
    r#"{"nodes":[{"id":"a.go","index":0,"node":{"type":"file"}}],"edges":[]}"#;

/// A document exercising every wire field, with an `id` that must be ignored.
pub const FULL_DOC: &str = r#"{
    "id": "from-the-document",
    "edges": [
        {
            "type": "library",
            "from_node": {"index": 2, "id": "libfoo.a"},
            "to_node": [
                {"index": 3, "id": "libbar.a"},
                {"index": 1, "id": "libbaz.a"},
                {"index": 3, "id": "libbar.a"}
            ]
        },
        {
            "type": "file",
            "from_node": {"index": 0, "id": "src/main.cpp"},
            "to_node": [{"index": 9, "id": "src/missing.h"}]
        }
    ],
    "nodes": [
        {
            "id": "src/main.cpp",
            "index": 0,
            "node": {
                "_files": ["src/util.h", "src/main.h"],
                "_dependent_files": [],
                "_libs": ["libfoo.a"],
                "_dependent_libs": null,
                "type": "file"
            }
        },
        {
            "id": "libbaz.a",
            "index": 1,
            "node": {"_dependent_libs": ["libfoo.a"], "type": "library"}
        },
        {
            "id": "libfoo.a",
            "index": 2,
            "node": {"_libs": ["libbar.a", "libbaz.a"], "type": "library"}
        },
        {
            "id": "mongo::Status",
            "index": 3,
            "node": {"type": "symbol"}
        },
        {
            "id": "mongod",
            "index": 4,
            "node": {"_libs": ["libfoo.a"], "type": "artifact"}
        }
    ]
}"#;

/// Build a graph by hand that matches the shape of [`FULL_DOC`]'s first edge.
pub fn library_fan_out() -> crate::Graph {
    let mut graph = crate::Graph::new("fixture");
    let foo = Node::new("libfoo.a", 0, NodeType::Library);
    let bar = Node::new("libbar.a", 1, NodeType::Library);
    graph.edges.push(Edge {
        edge_type: EdgeType::Library,
        from_node: foo.as_relationship(),
        to_nodes: vec![bar.as_relationship()],
    });
    graph.nodes.push(foo);
    graph.nodes.push(bar);
    graph
}
