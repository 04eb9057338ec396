//! Serde front end: walks any `Serialize` value and records every scalar it
//! meets at its coordinate inside one shared [`Node`] tree.
//!
//! Objects get a [`KeyedEncoder`], sequences a [`SequentialEncoder`], and
//! scalars land through a write-once [`SingleValueEncoder`]. All of them hold
//! a reborrow of the same `&mut Node`, so nesting follows the value's own
//! depth-first traversal.

mod containers;
mod map_key;
mod single_value;

pub use containers::{KeyedEncoder, SequentialEncoder};
pub use single_value::SingleValueEncoder;

use serde::Serialize;

use crate::options::{BoolEncoding, Options};
use crate::tree::{CodingPath, Node};
use crate::Result;

/// Builds the output tree for `value`.
///
/// The tree starts as an empty record; a bare scalar or sequence replaces it,
/// which the flattener later rejects.
pub fn to_tree<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<Node> {
    let mut root = Node::empty_record();
    Encoder::new(&mut root, options).encode(value)?;
    Ok(root)
}

/// Encoder positioned at one coordinate of the shared tree.
pub struct Encoder<'t> {
    tree: &'t mut Node,
    path: CodingPath,
    bools: BoolEncoding,
}

impl<'t> Encoder<'t> {
    pub fn new(tree: &'t mut Node, options: &Options) -> Self {
        log::trace!("encoder created at root");
        Self::at(tree, CodingPath::root(), options.bool_encoding)
    }

    pub(crate) fn at(tree: &'t mut Node, path: CodingPath, bools: BoolEncoding) -> Self {
        Self { tree, path, bools }
    }

    pub fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    pub fn keyed(&mut self) -> KeyedEncoder<'_> {
        KeyedEncoder::new(&mut *self.tree, self.path.clone(), self.bools)
    }

    pub fn sequential(&mut self) -> SequentialEncoder<'_> {
        SequentialEncoder::new(&mut *self.tree, self.path.clone(), self.bools)
    }

    pub fn single_value(&mut self) -> SingleValueEncoder<'_> {
        SingleValueEncoder::new(&mut *self.tree, self.path.clone(), self.bools)
    }

    pub fn into_keyed(self) -> KeyedEncoder<'t> {
        KeyedEncoder::new(self.tree, self.path, self.bools)
    }

    pub fn into_sequential(self) -> SequentialEncoder<'t> {
        SequentialEncoder::new(self.tree, self.path, self.bools)
    }

    /// Drives `value` through a fresh single-value encoder at this position.
    pub fn encode<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.serialize(&mut self.single_value())
    }
}
