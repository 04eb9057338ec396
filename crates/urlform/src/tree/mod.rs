//! Generic output tree built by the encoder and flattened into form text.

mod mutate;
mod path;

pub use mutate::{read, write};
pub use path::{CodingPath, Segment};

use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Final textual form of a primitive.
    Scalar(String),
    Sequence(Vec<Node>),
    Record(IndexMap<String, Node>),
}

impl Node {
    pub fn empty_record() -> Self {
        Node::Record(IndexMap::new())
    }

    pub fn empty_sequence() -> Self {
        Node::Sequence(Vec::new())
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Record(entries) => Some(entries),
            _ => None,
        }
    }

    /// Shape name used in diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            Node::Scalar(_) => "scalar",
            Node::Sequence(_) => "sequence",
            Node::Record(_) => "record",
        }
    }

    /// Number of scalar leaves reachable from this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Scalar(_) => 1,
            Node::Sequence(items) => items.iter().map(Node::leaf_count).sum(),
            Node::Record(entries) => entries.values().map(Node::leaf_count).sum(),
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::empty_record()
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Scalar(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Scalar(s)
    }
}
