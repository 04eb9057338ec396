use serde::Serialize;
use serde::ser::{
    SerializeMap, SerializeSeq, SerializeStruct, SerializeStructVariant, SerializeTuple,
    SerializeTupleStruct, SerializeTupleVariant,
};

use super::map_key::MapKeySerializer;
use super::{Encoder, SingleValueEncoder};
use crate::options::BoolEncoding;
use crate::tree::{self, CodingPath, Node};
use crate::{Error, Result};

/// Writes values by field name below its own path.
pub struct KeyedEncoder<'t> {
    tree: &'t mut Node,
    path: CodingPath,
    bools: BoolEncoding,
    next_key: Option<String>,
}

impl<'t> KeyedEncoder<'t> {
    pub(crate) fn new(tree: &'t mut Node, path: CodingPath, bools: BoolEncoding) -> Self {
        log::trace!("keyed encoder at {}", path);
        if tree::read(tree, path.segments()).is_none() {
            tree::write(tree, path.segments(), Node::empty_record());
        }
        Self { tree, path, bools, next_key: None }
    }

    pub fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    pub fn encode<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let path = self.path.field(key);
        value.serialize(&mut SingleValueEncoder::new(&mut *self.tree, path, self.bools))
    }

    pub fn encode_nil(&mut self, key: &str) -> Result<()> {
        Err(Error::UnsupportedValue { path: self.path.field(key).to_string() })
    }

    pub fn nested_keyed(&mut self, key: &str) -> KeyedEncoder<'_> {
        KeyedEncoder::new(&mut *self.tree, self.path.field(key), self.bools)
    }

    pub fn nested_sequential(&mut self, key: &str) -> SequentialEncoder<'_> {
        SequentialEncoder::new(&mut *self.tree, self.path.field(key), self.bools)
    }

    /// Full encoder at this encoder's own path.
    pub fn super_encoder(&mut self) -> Encoder<'_> {
        Encoder::at(&mut *self.tree, self.path.clone(), self.bools)
    }

    /// Full encoder at `key` below this encoder's path.
    pub fn super_encoder_for_key(&mut self, key: &str) -> Encoder<'_> {
        Encoder::at(&mut *self.tree, self.path.field(key), self.bools)
    }
}

impl SerializeMap for KeyedEncoder<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<()> {
        let key = key.serialize(MapKeySerializer::new(&self.path))?;
        self.next_key = Some(key);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| Error::Message("serialize_value called before serialize_key".into()))?;
        self.encode(&key, value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl SerializeStruct for KeyedEncoder<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<()> {
        self.encode(key, value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl SerializeStructVariant for KeyedEncoder<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<()> {
        self.encode(key, value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

/// Appends values at consecutive indices below its own path.
pub struct SequentialEncoder<'t> {
    tree: &'t mut Node,
    path: CodingPath,
    bools: BoolEncoding,
    count: usize,
}

impl<'t> SequentialEncoder<'t> {
    pub(crate) fn new(tree: &'t mut Node, path: CodingPath, bools: BoolEncoding) -> Self {
        log::trace!("sequential encoder at {}", path);
        let fresh = match tree::read(tree, path.segments()) {
            None => true,
            Some(Node::Record(entries)) => entries.is_empty(),
            Some(_) => false,
        };
        if fresh {
            tree::write(tree, path.segments(), Node::empty_sequence());
        }
        Self { tree, path, bools, count: 0 }
    }

    pub fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    /// Number of elements appended so far.
    pub fn count(&self) -> usize {
        self.count
    }

    fn next_path(&mut self) -> CodingPath {
        let path = self.path.index(self.count);
        self.count += 1;
        path
    }

    pub fn encode<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let path = self.next_path();
        value.serialize(&mut SingleValueEncoder::new(&mut *self.tree, path, self.bools))
    }

    pub fn encode_nil(&mut self) -> Result<()> {
        Err(Error::UnsupportedValue { path: self.path.index(self.count).to_string() })
    }

    pub fn nested_keyed(&mut self) -> KeyedEncoder<'_> {
        let path = self.next_path();
        KeyedEncoder::new(&mut *self.tree, path, self.bools)
    }

    pub fn nested_sequential(&mut self) -> SequentialEncoder<'_> {
        let path = self.next_path();
        SequentialEncoder::new(&mut *self.tree, path, self.bools)
    }

    /// Full encoder at the next index.
    pub fn super_encoder(&mut self) -> Encoder<'_> {
        let path = self.next_path();
        Encoder::at(&mut *self.tree, path, self.bools)
    }
}

impl SerializeSeq for SequentialEncoder<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.encode(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl SerializeTuple for SequentialEncoder<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.encode(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl SerializeTupleStruct for SequentialEncoder<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.encode(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl SerializeTupleVariant for SequentialEncoder<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.encode(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}
