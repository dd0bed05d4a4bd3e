use rsbroker_proto::FramingError;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("broker error")]
pub enum Error {
    #[error("missing {0} in config")]
    IncompleteConfig(&'static str),

    #[error("value error: {0}")]
    ValueError(Cow<'static, str>),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("framing error: {0}")]
    Framing(#[from] FramingError),
}
