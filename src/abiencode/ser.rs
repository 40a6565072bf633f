//! Solidity tightly packed encoding (`abi.encodePacked`) as a [serde::Serializer].
//!
//! Unlike the standard ABI encoding, packed encoding does not pad values to
//! 32-byte slots and has no head/tail split: every value is written at its
//! natural width and the fields of a struct or tuple are simply concatenated.
//! This makes the encoding ambiguous for dynamic types, which is why it is only
//! used for hashing fixed layouts such as transfer parameters.
//!
//! Mapping from serde's data model:
//! - `serialize_bytes`: raw bytes. [Address][super::types::Address] writes its
//!   20 bytes, [U256][super::types::U256] and `bytes32`-like types their 32.
//! - `bool`: 1 byte.
//! - `u8`..`u128`, `i8`..`i128`: big-endian two's complement at the native
//!   width, the same as Solidity's `uintN`/`intN` in packed mode.
//! - `str`: raw UTF-8 (`string`).
//! - structs, tuples, tuple structs and newtype structs: their fields in
//!   declaration order.
//!
//! Everything else is rejected. Arrays are representable in Solidity but pad
//! their elements to 32 bytes even in packed mode, which this Serializer does
//! not implement.

use super::error::{Error, Result};
use serde::{
    ser::{self, Impossible, SerializeStruct, SerializeTuple, SerializeTupleStruct},
    Serialize,
};

/// Sink for packed output.
///
/// Chunks arrive in encoding order, one per primitive value.
pub trait Writer {
    fn write(&mut self, chunk: &[u8]);
}

impl Writer for Vec<u8> {
    fn write(&mut self, chunk: &[u8]) {
        self.extend_from_slice(chunk);
    }
}

pub struct Serializer<'a, W>
where
    W: Writer,
{
    writer: &'a mut W,
}

pub fn to_writer<T, W>(value: &T, writer: &mut W) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Writer,
{
    let mut serializer = Serializer { writer };
    value.serialize(&mut serializer)
}

/// Collect the packed encoding of `value`.
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    let mut out = Vec::new();
    to_writer(value, &mut out)?;
    Ok(out)
}

impl<'a, W> Serializer<'a, W>
where
    W: Writer,
{
    fn write(&mut self, method: &'static str, chunk: &[u8]) -> Result<()> {
        tracing::trace!(target: "bridge_signer::abiencode", method, len = chunk.len(), "packed chunk");
        self.writer.write(chunk);
        Ok(())
    }
}

impl<'a, 'b, W> ser::Serializer for &'a mut Serializer<'b, W>
where
    W: Writer,
{
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Impossible<(), Error>;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = Impossible<(), Error>;
    type SerializeStruct = Self;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.write("serialize_bool", &[u8::from(v)])
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.write("serialize_i8", &v.to_be_bytes())
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.write("serialize_i16", &v.to_be_bytes())
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.write("serialize_i32", &v.to_be_bytes())
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.write("serialize_i64", &v.to_be_bytes())
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        self.write("serialize_i128", &v.to_be_bytes())
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.write("serialize_u8", &v.to_be_bytes())
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.write("serialize_u16", &v.to_be_bytes())
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.write("serialize_u32", &v.to_be_bytes())
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.write("serialize_u64", &v.to_be_bytes())
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        self.write("serialize_u128", &v.to_be_bytes())
    }

    fn serialize_f32(self, _: f32) -> Result<()> {
        Err(Error::TypeNotRepresentable("f32"))
    }

    fn serialize_f64(self, _: f64) -> Result<()> {
        Err(Error::TypeNotRepresentable("f64"))
    }

    fn serialize_char(self, _: char) -> Result<()> {
        // Could be bytes1..bytes4 or a string, neither is obviously right.
        Err(Error::TypeNotYetSupported("char"))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.write("serialize_str", v.as_bytes())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        self.write("serialize_bytes", v)
    }

    fn serialize_none(self) -> Result<()> {
        Err(Error::TypeNotRepresentable("none"))
    }

    fn serialize_some<T: ?Sized>(self, _: &T) -> Result<()>
    where
        T: Serialize,
    {
        Err(Error::TypeNotRepresentable("some"))
    }

    fn serialize_unit(self) -> Result<()> {
        Err(Error::TypeNotRepresentable("unit"))
    }

    fn serialize_unit_struct(self, _: &'static str) -> Result<()> {
        Err(Error::TypeNotRepresentable("unit struct"))
    }

    fn serialize_unit_variant(self, _: &'static str, _: u32, _: &'static str) -> Result<()> {
        Err(Error::TypeNotRepresentable("unit variant (enum)"))
    }

    fn serialize_newtype_struct<T: ?Sized>(self, _name: &'static str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: &T,
    ) -> Result<()>
    where
        T: Serialize,
    {
        Err(Error::TypeNotRepresentable("newtype variant (enum)"))
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::TypeNotYetSupported("array"))
    }

    fn serialize_tuple(self, _: usize) -> Result<Self::SerializeTuple> {
        Ok(self)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::TypeNotRepresentable("tuple variant (enum)"))
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::TypeNotRepresentable("map"))
    }

    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self::SerializeStruct> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::TypeNotRepresentable("struct variant"))
    }
}

impl<'a, 'b, W> SerializeTuple for &'a mut Serializer<'b, W>
where
    W: Writer,
{
    type Ok = ();

    type Error = Error;

    fn serialize_element<T: ?Sized>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<'a, 'b, W> SerializeTupleStruct for &'a mut Serializer<'b, W>
where
    W: Writer,
{
    type Ok = ();

    type Error = Error;

    fn serialize_field<T: ?Sized>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<'a, 'b, W> SerializeStruct for &'a mut Serializer<'b, W>
where
    W: Writer,
{
    type Ok = ();

    type Error = Error;

    fn serialize_field<T: ?Sized>(&mut self, name: &'static str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        tracing::trace!(target: "bridge_signer::abiencode", field = name, "packing field");
        value.serialize(&mut **self)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}
