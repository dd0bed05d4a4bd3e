use log::{log_enabled, trace};
use rsbroker_wire_format::{error::custom_io_error, prelude::*};
use std::convert::TryFrom;

/// How the leading `message_size` field of a response frame is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeField {
    /// Byte-for-byte the frames earlier broker builds put on the wire, which
    /// existing clients were validated against. See [`CompatLayout`].
    Compat,
    /// `message_size` counts exactly the bytes that follow it.
    Exact,
}

impl Default for SizeField {
    fn default() -> Self {
        SizeField::Compat
    }
}

/// Deviations of a compat frame from its exact encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatLayout {
    /// Added to the exact `message_size`.
    pub size_surplus: u32,
    /// Zero bytes appended after the body.
    pub trailing_zeros: usize,
}

/// Represents a response body in Kafka Protocol wire format. The frame
/// around it is `message_size`, `correlation_id`, body.
pub trait KafkaResponse: WireFormatWrite {
    fn compat_layout(&self) -> CompatLayout;

    fn write_bytes<W: std::io::Write>(
        &self,
        mut writer: W,
        correlation_id: u32,
        size_field: SizeField,
    ) -> std::io::Result<usize> {
        let exact_size = correlation_id.wire_size() + self.wire_size();
        let (size, trailing_zeros) = match size_field {
            SizeField::Exact => (exact_size, 0),
            SizeField::Compat => {
                let layout = self.compat_layout();
                (exact_size + layout.size_surplus as usize, layout.trailing_zeros)
            }
        };
        let message_size = u32::try_from(size).map_err(custom_io_error)?;
        let frame_size = message_size.wire_size() + exact_size + trailing_zeros;

        trace!("write: message_size={}", message_size);
        trace!("write: correlation_id={}", correlation_id);

        if log_enabled!(log::Level::Trace) {
            let mut buffer = Vec::with_capacity(frame_size);
            write_frame(&mut buffer, self, message_size, correlation_id, trailing_zeros)?;
            trace!("write: {:?}", buffer);

            writer.write_all(&buffer)?;
        } else {
            write_frame(&mut writer, self, message_size, correlation_id, trailing_zeros)?;
        }

        writer.flush()?;

        Ok(frame_size)
    }

    fn to_bytes(&self, correlation_id: u32, size_field: SizeField) -> Vec<u8> {
        let mut buffer = Vec::new();
        self.write_bytes(&mut buffer, correlation_id, size_field)
            .expect("write to vec failed");

        buffer
    }
}

fn write_frame<W, R>(
    writer: &mut W,
    body: &R,
    message_size: u32,
    correlation_id: u32,
    trailing_zeros: usize,
) -> std::io::Result<()>
where
    W: std::io::Write,
    R: KafkaResponse + ?Sized,
{
    message_size.write_into(writer)?;
    correlation_id.write_into(writer)?;
    body.write_into(writer)?;
    for _ in 0..trailing_zeros {
        0u8.write_into(writer)?;
    }

    Ok(())
}
