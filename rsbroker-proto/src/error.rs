use rsbroker_wire_format::error::ParseError;
use thiserror::Error;

/// Inbound bytes that cannot be turned into a request. Connections that
/// produce one are closed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FramingError {
    #[error("truncated frame: expected at least {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("declared message size {0} cannot hold a request header")]
    UndersizedMessage(u32),

    #[error("declared message size {size} exceeds limit of {limit} bytes")]
    OversizedMessage { size: u32, limit: usize },

    #[error("header parse error: {0}")]
    Parse(#[from] ParseError),
}
