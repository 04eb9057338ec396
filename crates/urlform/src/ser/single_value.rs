use serde::Serialize;
use serde::ser::{SerializeSeq, Serializer};

use super::{Encoder, KeyedEncoder, SequentialEncoder};
use crate::encode::primitives;
use crate::options::BoolEncoding;
use crate::tree::{self, CodingPath, Node};
use crate::{Error, Result};

/// Accepts exactly one value at its path.
///
/// Scalars are converted to text and written through [`tree::write`]; nested
/// values turn this encoder into a full [`Encoder`] at the same path.
pub struct SingleValueEncoder<'t> {
    tree: &'t mut Node,
    path: CodingPath,
    bools: BoolEncoding,
    used: bool,
}

impl<'t> SingleValueEncoder<'t> {
    pub(crate) fn new(tree: &'t mut Node, path: CodingPath, bools: BoolEncoding) -> Self {
        Self { tree, path, bools, used: false }
    }

    pub fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    fn claim(&mut self) -> Result<()> {
        if self.used {
            return Err(Error::DoubleEncode { path: self.path.to_string() });
        }
        self.used = true;
        Ok(())
    }

    fn write_scalar(&mut self, text: String) -> Result<()> {
        self.claim()?;
        log::trace!("write {} = {:?}", self.path, text);
        tree::write(self.tree, self.path.segments(), Node::Scalar(text));
        Ok(())
    }

    fn delegate(&mut self) -> Result<Encoder<'_>> {
        self.claim()?;
        Ok(Encoder::at(&mut *self.tree, self.path.clone(), self.bools))
    }

    pub fn encode_nil(&mut self) -> Result<()> {
        self.claim()?;
        Err(Error::UnsupportedValue { path: self.path.to_string() })
    }

    pub fn encode_bool(&mut self, v: bool) -> Result<()> {
        self.write_scalar(self.bools.encode(v).to_string())
    }

    pub fn encode_str(&mut self, v: &str) -> Result<()> {
        self.write_scalar(v.to_string())
    }

    pub fn encode_i64(&mut self, v: i64) -> Result<()> {
        self.write_scalar(v.to_string())
    }

    pub fn encode_u64(&mut self, v: u64) -> Result<()> {
        self.write_scalar(v.to_string())
    }

    pub fn encode_i128(&mut self, v: i128) -> Result<()> {
        self.write_scalar(v.to_string())
    }

    pub fn encode_u128(&mut self, v: u128) -> Result<()> {
        self.write_scalar(v.to_string())
    }

    pub fn encode_f32(&mut self, v: f32) -> Result<()> {
        self.write_scalar(primitives::format_f32(v))
    }

    pub fn encode_f64(&mut self, v: f64) -> Result<()> {
        self.write_scalar(primitives::format_f64(v))
    }

    /// Encodes a nested value at this path.
    pub fn encode<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.serialize(self)
    }
}

impl<'a, 't> Serializer for &'a mut SingleValueEncoder<'t> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = SequentialEncoder<'a>;
    type SerializeTuple = SequentialEncoder<'a>;
    type SerializeTupleStruct = SequentialEncoder<'a>;
    type SerializeTupleVariant = SequentialEncoder<'a>;
    type SerializeMap = KeyedEncoder<'a>;
    type SerializeStruct = KeyedEncoder<'a>;
    type SerializeStructVariant = KeyedEncoder<'a>;

    fn serialize_bool(self, v: bool) -> Result<()> { self.encode_bool(v) }
    fn serialize_i8(self, v: i8) -> Result<()> { self.encode_i64(v as i64) }
    fn serialize_i16(self, v: i16) -> Result<()> { self.encode_i64(v as i64) }
    fn serialize_i32(self, v: i32) -> Result<()> { self.encode_i64(v as i64) }
    fn serialize_i64(self, v: i64) -> Result<()> { self.encode_i64(v) }
    fn serialize_i128(self, v: i128) -> Result<()> { self.encode_i128(v) }
    fn serialize_u8(self, v: u8) -> Result<()> { self.encode_u64(v as u64) }
    fn serialize_u16(self, v: u16) -> Result<()> { self.encode_u64(v as u64) }
    fn serialize_u32(self, v: u32) -> Result<()> { self.encode_u64(v as u64) }
    fn serialize_u64(self, v: u64) -> Result<()> { self.encode_u64(v) }
    fn serialize_u128(self, v: u128) -> Result<()> { self.encode_u128(v) }
    fn serialize_f32(self, v: f32) -> Result<()> { self.encode_f32(v) }
    fn serialize_f64(self, v: f64) -> Result<()> { self.encode_f64(v) }
    fn serialize_char(self, v: char) -> Result<()> { self.write_scalar(v.to_string()) }
    fn serialize_str(self, v: &str) -> Result<()> { self.encode_str(v) }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        let mut seq = self.serialize_seq(Some(v.len()))?;
        for b in v {
            seq.encode(b)?;
        }
        SerializeSeq::end(seq)
    }

    fn serialize_none(self) -> Result<()> { self.encode_nil() }
    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<()> { value.serialize(self) }
    fn serialize_unit(self) -> Result<()> { self.encode_nil() }
    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> { self.encode_nil() }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.encode_str(variant)
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<()> {
        self.delegate()?.into_keyed().encode(variant, value)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(self.delegate()?.into_sequential())
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        let path = self.path.field(variant);
        let bools = self.bools;
        self.claim()?;
        Ok(SequentialEncoder::new(&mut *self.tree, path, bools))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(self.delegate()?.into_keyed())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(None)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        let path = self.path.field(variant);
        let bools = self.bools;
        self.claim()?;
        Ok(KeyedEncoder::new(&mut *self.tree, path, bools))
    }
}
