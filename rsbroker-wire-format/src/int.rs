use crate::error::{custom_error, ParseError};
use crate::prelude::*;
use byteorder::{BigEndian, WriteBytesExt};
use integer_encoding::{VarInt, VarIntReader, VarIntWriter};
use std::convert::TryFrom;
use std::io::Write;

impl WireFormatParse for u8 {
    fn parse(input: &[u8]) -> IResult<&[u8], Self, ParseError> {
        nom::number::complete::be_u8(input)
    }
}

impl WireFormatWrite for u8 {
    fn wire_size(&self) -> usize {
        Self::wire_size_static()
    }

    fn write_into<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_u8(*self)
    }
}

impl WireFormatSizeStatic for u8 {
    fn wire_size_static() -> usize {
        std::mem::size_of::<Self>()
    }
}

impl WireFormatParse for i16 {
    fn parse(input: &[u8]) -> IResult<&[u8], Self, ParseError> {
        nom::number::complete::be_i16(input)
    }
}

impl WireFormatWrite for i16 {
    fn wire_size(&self) -> usize {
        Self::wire_size_static()
    }

    fn write_into<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_i16::<BigEndian>(*self)
    }
}

impl WireFormatSizeStatic for i16 {
    fn wire_size_static() -> usize {
        std::mem::size_of::<Self>()
    }
}

impl WireFormatParse for u16 {
    fn parse(input: &[u8]) -> IResult<&[u8], Self, ParseError> {
        nom::number::complete::be_u16(input)
    }
}

impl WireFormatWrite for u16 {
    fn wire_size(&self) -> usize {
        Self::wire_size_static()
    }

    fn write_into<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_u16::<BigEndian>(*self)
    }
}

impl WireFormatSizeStatic for u16 {
    fn wire_size_static() -> usize {
        std::mem::size_of::<Self>()
    }
}

impl WireFormatParse for i32 {
    fn parse(input: &[u8]) -> IResult<&[u8], Self, ParseError> {
        nom::number::complete::be_i32(input)
    }
}

impl WireFormatWrite for i32 {
    fn wire_size(&self) -> usize {
        Self::wire_size_static()
    }

    fn write_into<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_i32::<BigEndian>(*self)
    }
}

impl WireFormatSizeStatic for i32 {
    fn wire_size_static() -> usize {
        std::mem::size_of::<Self>()
    }
}

impl WireFormatParse for u32 {
    fn parse(input: &[u8]) -> IResult<&[u8], Self, ParseError> {
        nom::number::complete::be_u32(input)
    }
}

impl WireFormatWrite for u32 {
    fn wire_size(&self) -> usize {
        Self::wire_size_static()
    }

    fn write_into<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_u32::<BigEndian>(*self)
    }
}

impl WireFormatSizeStatic for u32 {
    fn wire_size_static() -> usize {
        std::mem::size_of::<Self>()
    }
}

/// Unsigned base-128 varint: seven value bits per byte, high bit set on every
/// byte except the last. Used for compact lengths in flexible message versions.
#[derive(Clone, Copy, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct UnsignedVarInt(pub u32);

impl WireFormatParse for UnsignedVarInt {
    fn parse(mut input: &[u8]) -> IResult<&[u8], Self, ParseError> {
        let v: u64 = input
            .read_varint()
            .map_err(|_| custom_error("unsigned varint parse failed"))?;
        let v = u32::try_from(v).map_err(|_| custom_error("unsigned varint overflows u32"))?;

        Ok((input, UnsignedVarInt(v)))
    }
}

impl WireFormatWrite for UnsignedVarInt {
    fn wire_size(&self) -> usize {
        self.0.required_space()
    }

    fn write_into<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_varint(self.0).map(|_| ())
    }
}

impl From<u32> for UnsignedVarInt {
    fn from(v: u32) -> Self {
        UnsignedVarInt(v)
    }
}

impl From<UnsignedVarInt> for u32 {
    fn from(v: UnsignedVarInt) -> Self {
        v.0
    }
}
