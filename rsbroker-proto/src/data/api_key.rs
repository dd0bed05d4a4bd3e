use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid api key value {0}")]
pub struct InvalidApiKey(pub u16);

/// Request types the broker knows how to answer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ApiKey {
    ApiVersions = 18,
}

impl ApiKey {
    pub fn try_from_u16(v: u16) -> Result<Self, InvalidApiKey> {
        use ApiKey::*;
        match v {
            18 => Ok(ApiVersions),
            other => Err(InvalidApiKey(other)),
        }
    }

    pub fn to_u16(&self) -> u16 {
        *self as u16
    }
}

impl From<ApiKey> for u16 {
    fn from(v: ApiKey) -> Self {
        v.to_u16()
    }
}

impl std::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({})", self, self.to_u16())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn api_key_from_wire_value() {
        assert_eq!(ApiKey::try_from_u16(18), Ok(ApiKey::ApiVersions));
        assert_eq!(ApiKey::try_from_u16(3), Err(InvalidApiKey(3)));
        assert_eq!(u16::from(ApiKey::ApiVersions), 18);
        assert_eq!(ApiKey::ApiVersions.to_string(), "ApiVersions(18)");
    }
}
