//! Core data structures for the dependency graph
//!
//! Field names on the Rust side follow Rust conventions; the wire keys are
//! fixed by the producer of the graph document and are mapped with serde
//! renames.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Category of a graph participant.
///
/// Encoded on the wire as a lowercase string. Values the producer emits
/// that are not one of the known categories are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeType {
    Symbol,
    File,
    Library,
    Artifact,
    Other(String),
}

/// Kind of relationship an edge group represents.
///
/// Mirrors [`NodeType`]: the category of the nodes on the receiving end.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EdgeType {
    Symbol,
    File,
    Library,
    Artifact,
    Other(String),
}

macro_rules! string_category {
    ($ty:ident, $expecting:literal) => {
        impl $ty {
            /// Wire representation of this category.
            pub fn as_str(&self) -> &str {
                match self {
                    $ty::Symbol => "symbol",
                    $ty::File => "file",
                    $ty::Library => "library",
                    $ty::Artifact => "artifact",
                    $ty::Other(raw) => raw,
                }
            }

            /// Map a wire string onto a category. Never fails.
            pub fn from_wire(raw: &str) -> Self {
                match raw {
                    "symbol" => $ty::Symbol,
                    "file" => $ty::File,
                    "library" => $ty::Library,
                    "artifact" => $ty::Artifact,
                    other => $ty::Other(other.to_string()),
                }
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                $ty::Other(String::new())
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct CategoryVisitor;

                impl<'de> Visitor<'de> for CategoryVisitor {
                    type Value = $ty;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str($expecting)
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                        Ok($ty::from_wire(v))
                    }
                }

                deserializer.deserialize_str(CategoryVisitor)
            }
        }
    };
}

string_category!(NodeType, "a node type string");
string_category!(EdgeType, "an edge type string");

/// Reference to a node by index and name. Plain data, not a pointer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRelationship {
    #[serde(rename = "index", default, deserialize_with = "null_as_default")]
    pub graph_id: i64,
    #[serde(rename = "id", default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl NodeRelationship {
    pub fn new(graph_id: i64, name: impl Into<String>) -> Self {
        Self {
            graph_id,
            name: name.into(),
        }
    }
}

/// Denormalized neighbor names of a node, split by relationship kind.
///
/// These lists are an independent view supplied by the producer. They are
/// not derived from, nor checked against, the graph's edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationships {
    /// Libraries that depend on this node.
    #[serde(rename = "_dependent_libs", default, deserialize_with = "null_as_default")]
    pub dependent_libraries: Vec<String>,
    /// Libraries this node depends on.
    #[serde(rename = "_libs", default, deserialize_with = "null_as_default")]
    pub libraries: Vec<String>,
    /// Files this node depends on.
    #[serde(rename = "_files", default, deserialize_with = "null_as_default")]
    pub files: Vec<String>,
    /// Files that depend on this node.
    #[serde(rename = "_dependent_files", default, deserialize_with = "null_as_default")]
    pub dependent_files: Vec<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub node_type: NodeType,
}

/// A single participant in the graph: a symbol, file, library or artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "id", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "index", default, deserialize_with = "null_as_default")]
    pub graph_id: i64,
    #[serde(rename = "node", default, deserialize_with = "null_as_default")]
    pub relationships: Relationships,
}

impl Node {
    pub fn new(name: impl Into<String>, graph_id: i64, node_type: NodeType) -> Self {
        Self {
            name: name.into(),
            graph_id,
            relationships: Relationships {
                node_type,
                ..Relationships::default()
            },
        }
    }

    pub fn node_type(&self) -> &NodeType {
        &self.relationships.node_type
    }

    /// This node as a reference value usable inside an [`Edge`].
    pub fn as_relationship(&self) -> NodeRelationship {
        NodeRelationship::new(self.graph_id, self.name.clone())
    }
}

/// One grouped relationship: a single source fanning out to many targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub edge_type: EdgeType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub from_node: NodeRelationship,
    #[serde(rename = "to_node", default, deserialize_with = "null_as_default")]
    pub to_nodes: Vec<NodeRelationship>,
}

/// Missing and `null` fields both decode to the zero value; the producer
/// emits `null` for unset lists and objects. Values of the wrong shape
/// still fail.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
