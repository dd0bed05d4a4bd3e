use rsbroker_wire_format::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ErrorCode(pub i16);

impl ErrorCode {
    pub const NONE: ErrorCode = ErrorCode(0);
    pub const UNSUPPORTED_VERSION: ErrorCode = ErrorCode(35);

    pub fn is_error(&self) -> bool {
        *self != ErrorCode::NONE
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error_code={}", self.0)
    }
}

impl WireFormatSizeStatic for ErrorCode {
    fn wire_size_static() -> usize {
        i16::wire_size_static()
    }
}

impl WireFormatWrite for ErrorCode {
    fn wire_size(&self) -> usize {
        Self::wire_size_static()
    }

    fn write_into<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        self.0.write_into(writer)
    }
}
