use bytes::{Buf, BytesMut};
use rsbroker_proto::{FramingError, RequestHeader};
use rsbroker_wire_format::WireFormatSizeStatic;
use std::convert::TryFrom;

const SIZE_FIELD_LEN: usize = 4;

/// Upper bound on a single buffer growth step while a frame is incomplete.
const MAX_RESERVE_STEP: usize = 64 * 1024;

/// Splits a connection's inbound byte stream into frames delimited by the
/// leading `message_size` field. Each returned frame still starts with that field.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrameDecoder {
    max_frame_size: usize,
}

impl FrameDecoder {
    pub fn new(max_frame_size: usize) -> Self {
        FrameDecoder { max_frame_size }
    }

    /// Removes the next complete frame from `buffer`. Leaves the buffer
    /// untouched and returns `None` while the frame is still incomplete.
    pub fn decode(&self, buffer: &mut BytesMut) -> Result<Option<BytesMut>, FramingError> {
        if buffer.len() < SIZE_FIELD_LEN {
            return Ok(None);
        }

        let message_size = (&buffer[..SIZE_FIELD_LEN]).get_u32();
        let body_len = self.check_size(message_size)?;
        let frame_len = SIZE_FIELD_LEN + body_len;

        if buffer.len() < frame_len {
            buffer.reserve(std::cmp::min(frame_len - buffer.len(), MAX_RESERVE_STEP));
            return Ok(None);
        }

        Ok(Some(buffer.split_to(frame_len)))
    }

    /// Called once the peer stopped sending; bytes left over belong to a frame
    /// that will never complete.
    pub fn finish(&self, buffer: &BytesMut) -> Result<(), FramingError> {
        if buffer.is_empty() {
            return Ok(());
        }

        let expected = if buffer.len() < SIZE_FIELD_LEN {
            SIZE_FIELD_LEN
        } else {
            let message_size = (&buffer[..SIZE_FIELD_LEN]).get_u32();
            SIZE_FIELD_LEN + self.check_size(message_size)?
        };

        Err(FramingError::Truncated {
            expected,
            actual: buffer.len(),
        })
    }

    fn check_size(&self, message_size: u32) -> Result<usize, FramingError> {
        let min_body = RequestHeader::wire_size_static() - SIZE_FIELD_LEN;
        let body_len = usize::try_from(message_size).unwrap_or(usize::MAX);

        if body_len < min_body {
            Err(FramingError::UndersizedMessage(message_size))
        } else if body_len > self.max_frame_size {
            Err(FramingError::OversizedMessage {
                size: message_size,
                limit: self.max_frame_size,
            })
        } else {
            Ok(body_len)
        }
    }
}
