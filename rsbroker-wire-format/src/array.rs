use crate::error::{custom_error, ParseError};
use crate::int::UnsignedVarInt;
use crate::prelude::*;
use nom::multi::many_m_n;
use std::convert::TryFrom;

impl<T> WireFormatParse for Vec<T>
where
    T: WireFormatParse,
{
    fn parse(input: &[u8]) -> IResult<&[u8], Self, ParseError> {
        let (input, size) = i32::parse(input)?;

        // Null arrays are encoded with length -1; they are read back as empty.
        if size == -1 {
            Ok((input, vec![]))
        } else {
            let size = usize::try_from(size).map_err(|_| custom_error("negative size"))?;
            many_m_n(size, size, T::parse)(input)
        }
    }
}

impl<T> WireFormatWrite for [T]
where
    T: WireFormatWrite,
{
    fn wire_size(&self) -> usize {
        let len_size = i32::wire_size_static();
        let fields_size: usize = self.iter().map(|v| v.wire_size()).sum::<usize>();

        len_size + fields_size
    }

    fn write_into<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        i32::try_from(self.len())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?
            .write_into(writer)?;

        for item in self.iter() {
            item.write_into(writer)?;
        }

        Ok(())
    }
}

impl<T> WireFormatWrite for Vec<T>
where
    T: WireFormatWrite,
{
    fn wire_size(&self) -> usize {
        self.as_slice().wire_size()
    }

    fn write_into<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        self.as_slice().write_into(writer)
    }
}

/// Array whose length prefix is an unsigned varint holding `len + 1`
/// (zero marks a null array). Used by flexible message versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactArray<T>(pub Vec<T>);

impl<T> CompactArray<T> {
    fn length_prefix(&self) -> std::io::Result<UnsignedVarInt> {
        u32::try_from(self.0.len())
            .ok()
            .and_then(|len| len.checked_add(1))
            .map(UnsignedVarInt)
            .ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "compact array too long")
            })
    }
}

impl<T> WireFormatParse for CompactArray<T>
where
    T: WireFormatParse,
{
    fn parse(input: &[u8]) -> IResult<&[u8], Self, ParseError> {
        let (input, UnsignedVarInt(encoded)) = UnsignedVarInt::parse(input)?;

        match encoded.checked_sub(1) {
            None => Ok((input, CompactArray(vec![]))),
            Some(size) => {
                let size = usize::try_from(size).map_err(|_| custom_error("size overflow"))?;
                let (input, items) = many_m_n(size, size, T::parse)(input)?;
                Ok((input, CompactArray(items)))
            }
        }
    }
}

impl<T> WireFormatWrite for CompactArray<T>
where
    T: WireFormatWrite,
{
    fn wire_size(&self) -> usize {
        let len_size = self.length_prefix().map_or(0, |prefix| prefix.wire_size());
        let fields_size: usize = self.0.iter().map(|v| v.wire_size()).sum::<usize>();

        len_size + fields_size
    }

    fn write_into<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        self.length_prefix()?.write_into(writer)?;

        for item in self.0.iter() {
            item.write_into(writer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn array_write() {
        let array = vec![1i32, 2i32];
        let expected = vec![0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 2];

        assert_eq!(array.wire_size(), expected.len());
        assert_eq!(array.to_wire_bytes(), expected);
    }

    #[test]
    fn array_parse() {
        let remaining: &[u8] = &[9];
        assert_eq!(
            Vec::<u16>::parse(&[0, 0, 0, 2, 0, 18, 0, 4, 9]),
            Ok((remaining, vec![18u16, 4u16]))
        );
    }

    #[test]
    fn null_array_parses_as_empty() {
        assert_eq!(
            Vec::<u16>::from_wire_bytes(&[0xff, 0xff, 0xff, 0xff]),
            Ok(vec![])
        );
    }

    #[test]
    fn array_parse_missing_items() {
        assert!(Vec::<u16>::from_wire_bytes(&[0, 0, 0, 2, 0, 18]).is_err());
    }

    #[test]
    fn compact_array_write() {
        let array = CompactArray(vec![18u16, 4u16]);
        let expected = vec![0x03, 0, 18, 0, 4];

        assert_eq!(array.wire_size(), expected.len());
        assert_eq!(array.to_wire_bytes(), expected);
    }

    #[test]
    fn compact_array_write_empty() {
        let array: CompactArray<u16> = CompactArray(vec![]);
        assert_eq!(array.to_wire_bytes(), vec![0x01]);
    }

    #[test]
    fn compact_array_wire_size_matches_written_prefix() {
        let array = CompactArray(vec![0u8; 127]);
        let bytes = array.to_wire_bytes();

        assert_eq!(&bytes[..2], &[0x80, 0x01]);
        assert_eq!(array.wire_size(), bytes.len());
        assert_eq!(array.wire_size(), 2 + 127);
    }

    #[test]
    fn compact_array_length_above_u32_max() {
        assert!(CompactArray::<u8>::parse(&[0xff, 0xff, 0xff, 0xff, 0x1f]).is_err());
    }

    #[test]
    fn compact_array_parse() {
        assert_eq!(
            CompactArray::<u16>::from_wire_bytes(&[0x03, 0, 18, 0, 4]),
            Ok(CompactArray(vec![18u16, 4u16]))
        );
        assert_eq!(
            CompactArray::<u16>::from_wire_bytes(&[0x00]),
            Ok(CompactArray(vec![]))
        );
    }
}
