use serde::Serialize;
use serde::ser::{Impossible, Serializer};

use crate::encode::primitives;
use crate::tree::CodingPath;
use crate::{Error, Result};

/// Reduces a map key to the field name it will be written under.
pub(super) struct MapKeySerializer<'p> {
    path: &'p CodingPath,
}

impl<'p> MapKeySerializer<'p> {
    pub(super) fn new(path: &'p CodingPath) -> Self {
        Self { path }
    }

    fn unsupported(&self) -> Error {
        Error::UnsupportedKey { path: self.path.to_string() }
    }
}

impl Serializer for MapKeySerializer<'_> {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_bool(self, v: bool) -> Result<String> { Ok(if v { "true" } else { "false" }.to_string()) }
    fn serialize_i8(self, v: i8) -> Result<String> { Ok(v.to_string()) }
    fn serialize_i16(self, v: i16) -> Result<String> { Ok(v.to_string()) }
    fn serialize_i32(self, v: i32) -> Result<String> { Ok(v.to_string()) }
    fn serialize_i64(self, v: i64) -> Result<String> { Ok(v.to_string()) }
    fn serialize_i128(self, v: i128) -> Result<String> { Ok(v.to_string()) }
    fn serialize_u8(self, v: u8) -> Result<String> { Ok(v.to_string()) }
    fn serialize_u16(self, v: u16) -> Result<String> { Ok(v.to_string()) }
    fn serialize_u32(self, v: u32) -> Result<String> { Ok(v.to_string()) }
    fn serialize_u64(self, v: u64) -> Result<String> { Ok(v.to_string()) }
    fn serialize_u128(self, v: u128) -> Result<String> { Ok(v.to_string()) }
    fn serialize_f32(self, v: f32) -> Result<String> { Ok(primitives::format_f32(v)) }
    fn serialize_f64(self, v: f64) -> Result<String> { Ok(primitives::format_f64(v)) }
    fn serialize_char(self, v: char) -> Result<String> { Ok(v.to_string()) }
    fn serialize_str(self, v: &str) -> Result<String> { Ok(v.to_string()) }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> { Err(self.unsupported()) }
    fn serialize_none(self) -> Result<String> { Err(self.unsupported()) }
    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<String> { value.serialize(self) }
    fn serialize_unit(self) -> Result<String> { Err(self.unsupported()) }
    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> { Err(self.unsupported()) }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String> {
        Err(self.unsupported())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> { Err(self.unsupported()) }
    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> { Err(self.unsupported()) }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(self.unsupported())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(self.unsupported())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> { Err(self.unsupported()) }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(self.unsupported())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(self.unsupported())
    }
}
