use crate::FramingError;
use rsbroker_wire_format::{error::ParseError, prelude::*};

/// Fixed-layout request header. Only the first 12 bytes of a frame are
/// interpreted; anything after them (client id, tagged fields) is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WireFormatParse)]
pub struct RequestHeader {
    /// Number of bytes following this field.
    pub message_size: u32,
    pub api_key: u16,
    pub api_version: u16,
    pub correlation_id: u32,
}

impl RequestHeader {
    /// Decodes the header at the start of `input`, failing instead of reading
    /// past the end of a short buffer.
    pub fn decode(input: &[u8]) -> Result<Self, FramingError> {
        let expected = Self::wire_size_static();
        if input.len() < expected {
            return Err(FramingError::Truncated {
                expected,
                actual: input.len(),
            });
        }

        let (_, header) = Self::parse(input).map_err(ParseError::from)?;
        Ok(header)
    }
}

impl WireFormatSizeStatic for RequestHeader {
    fn wire_size_static() -> usize {
        u32::wire_size_static()
            + u16::wire_size_static()
            + u16::wire_size_static()
            + u32::wire_size_static()
    }
}
