use crate::{CompatLayout, ErrorCode, KafkaResponse, VersionRange};
use rsbroker_wire_format::prelude::*;

/// Versions of the ApiVersions request this broker answers.
pub const SUPPORTED_VERSIONS: VersionRange = VersionRange::new(0, 4);

/// Empty tagged field section closing the body.
const NO_TAGGED_FIELDS: u8 = 0;

#[derive(Debug, Clone, PartialEq, Eq, WireFormatWrite, WireFormatParse)]
pub struct ApiVersionEntry {
    pub api_key: u16,
    pub min_version: u16,
    pub max_version: u16,
}

impl std::fmt::Display for ApiVersionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}-{}",
            self.api_key, self.min_version, self.max_version
        )
    }
}

/// ApiVersions response body.
///
/// A successful response carries the error code, the advertised entries, the
/// throttle time and an empty tagged field section. An error response carries
/// the error code alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiVersionsResponse {
    pub error_code: ErrorCode,
    pub api_keys: Vec<ApiVersionEntry>,
    pub throttle_time_ms: u32,
}

impl ApiVersionsResponse {
    pub fn supported(api_keys: Vec<ApiVersionEntry>) -> Self {
        ApiVersionsResponse {
            error_code: ErrorCode::NONE,
            api_keys,
            throttle_time_ms: 0,
        }
    }

    pub fn unsupported_version() -> Self {
        ApiVersionsResponse {
            error_code: ErrorCode::UNSUPPORTED_VERSION,
            api_keys: vec![],
            throttle_time_ms: 0,
        }
    }
}

impl WireFormatWrite for ApiVersionsResponse {
    fn wire_size(&self) -> usize {
        if self.error_code.is_error() {
            self.error_code.wire_size()
        } else {
            self.error_code.wire_size()
                + self.api_keys.wire_size()
                + self.throttle_time_ms.wire_size()
                + NO_TAGGED_FIELDS.wire_size()
        }
    }

    fn write_into<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        self.error_code.write_into(writer)?;
        if self.error_code.is_error() {
            return Ok(());
        }

        self.api_keys.write_into(writer)?;
        self.throttle_time_ms.write_into(writer)?;
        NO_TAGGED_FIELDS.write_into(writer)
    }
}

impl KafkaResponse for ApiVersionsResponse {
    fn compat_layout(&self) -> CompatLayout {
        if self.error_code.is_error() {
            CompatLayout {
                size_surplus: 2,
                trailing_zeros: 0,
            }
        } else {
            CompatLayout {
                size_surplus: 4,
                trailing_zeros: 3,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{test_utils::hex_bytes, SizeField};

    fn default_entries() -> Vec<ApiVersionEntry> {
        vec![ApiVersionEntry {
            api_key: 18,
            min_version: 0,
            max_version: 4,
        }]
    }

    #[test]
    fn entry_wire_format() {
        let entry = default_entries().remove(0);
        assert_eq!(entry.wire_size(), 6);
        assert_eq!(entry.to_wire_bytes(), vec![0x00, 0x12, 0x00, 0x00, 0x00, 0x04]);
        assert_eq!(entry.to_string(), "18: 0-4");
    }

    #[test]
    fn supported_response_compat_frame() {
        let bytes = ApiVersionsResponse::supported(default_entries())
            .to_bytes(0x6f7f_c661, SizeField::Compat);
        let expected = hex_bytes(
            "00000019 6f7fc661 0000 00000001 0012 0000 0004 00000000 00 000000",
        );

        assert_eq!(bytes.len(), 28);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn unsupported_response_compat_frame() {
        let bytes =
            ApiVersionsResponse::unsupported_version().to_bytes(0x6f7f_c661, SizeField::Compat);

        assert_eq!(bytes, hex_bytes("00000008 6f7fc661 0023"));
    }

    #[test]
    fn supported_response_exact_frame() {
        let bytes = ApiVersionsResponse::supported(default_entries())
            .to_bytes(0x6f7f_c661, SizeField::Exact);
        let expected = hex_bytes("00000015 6f7fc661 0000 00000001 0012 0000 0004 00000000 00");

        assert_eq!(bytes.len(), 25);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn unsupported_response_exact_frame() {
        let bytes = ApiVersionsResponse::unsupported_version().to_bytes(1, SizeField::Exact);

        assert_eq!(bytes, hex_bytes("00000006 00000001 0023"));
    }

    #[test]
    fn advertised_entries_read_back() {
        let bytes = ApiVersionsResponse::supported(default_entries())
            .to_bytes(1, SizeField::Exact);
        let (rest, entries) = Vec::<ApiVersionEntry>::parse(&bytes[10..]).unwrap();

        assert_eq!(entries, default_entries());
        assert_eq!(rest, &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn body_size_grows_with_entries() {
        let mut entries = default_entries();
        entries.push(ApiVersionEntry {
            api_key: 3,
            min_version: 0,
            max_version: 12,
        });
        let response = ApiVersionsResponse::supported(entries);

        assert_eq!(response.wire_size(), 2 + 4 + 12 + 4 + 1);
        assert_eq!(response.to_bytes(9, SizeField::Exact).len(), 4 + 4 + 23);
    }
}
