use crate::{apis::api_versions::ApiVersionEntry, ApiKey};
use std::collections::BTreeMap;
use thiserror::Error;

/// Inclusive range of request versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    pub min: u16,
    pub max: u16,
}

impl VersionRange {
    pub const fn new(min: u16, max: u16) -> Self {
        VersionRange { min, max }
    }

    pub fn contains(&self, version: u16) -> bool {
        self.min <= version && version <= self.max
    }
}

impl std::fmt::Display for VersionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Request that names an unknown api or a version outside the supported range.
/// Answered in-band with an error response, never propagated further.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("api_key={api_key} does not support api_version={api_version}")]
pub struct UnsupportedVersion {
    pub api_key: u16,
    pub api_version: u16,
}

/// Versions the broker accepts, per api.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRegistry {
    apis: BTreeMap<ApiKey, VersionRange>,
}

impl ApiRegistry {
    pub fn empty() -> Self {
        ApiRegistry {
            apis: BTreeMap::new(),
        }
    }

    pub fn with_api(mut self, api_key: ApiKey, versions: VersionRange) -> Self {
        self.apis.insert(api_key, versions);
        self
    }

    pub fn versions(&self, api_key: ApiKey) -> Option<VersionRange> {
        self.apis.get(&api_key).copied()
    }

    pub fn check(&self, api_key: u16, api_version: u16) -> Result<ApiKey, UnsupportedVersion> {
        ApiKey::try_from_u16(api_key)
            .ok()
            .filter(|key| {
                self.versions(*key)
                    .map_or(false, |range| range.contains(api_version))
            })
            .ok_or(UnsupportedVersion {
                api_key,
                api_version,
            })
    }

    /// Entries advertised in an ApiVersions response, ordered by api key.
    pub fn entries(&self) -> Vec<ApiVersionEntry> {
        self.apis
            .iter()
            .map(|(api_key, range)| ApiVersionEntry {
                api_key: api_key.to_u16(),
                min_version: range.min,
                max_version: range.max,
            })
            .collect()
    }
}

impl Default for ApiRegistry {
    fn default() -> Self {
        ApiRegistry::empty().with_api(
            ApiKey::ApiVersions,
            crate::apis::api_versions::SUPPORTED_VERSIONS,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_registry_supports_api_versions_0_to_4() {
        let registry = ApiRegistry::default();

        for version in 0..=4 {
            assert_eq!(registry.check(18, version), Ok(ApiKey::ApiVersions));
        }
    }

    #[test]
    fn versions_outside_range_are_unsupported() {
        let registry = ApiRegistry::default();

        for &version in [5u16, 99, std::u16::MAX].iter() {
            assert_eq!(
                registry.check(18, version),
                Err(UnsupportedVersion {
                    api_key: 18,
                    api_version: version
                })
            );
        }
    }

    #[test]
    fn unknown_api_key_is_unsupported() {
        let registry = ApiRegistry::default();
        assert_eq!(
            registry.check(3, 0),
            Err(UnsupportedVersion {
                api_key: 3,
                api_version: 0
            })
        );
    }

    #[test]
    fn empty_registry_rejects_everything() {
        let registry = ApiRegistry::empty();
        assert!(registry.check(18, 0).is_err());
        assert!(registry.entries().is_empty());
    }

    #[test]
    fn default_entries() {
        assert_eq!(
            ApiRegistry::default().entries(),
            vec![ApiVersionEntry {
                api_key: 18,
                min_version: 0,
                max_version: 4
            }]
        );
    }

    #[test]
    fn version_range_bounds_are_inclusive() {
        let range = VersionRange::new(1, 3);
        assert!(!range.contains(0));
        assert!(range.contains(1));
        assert!(range.contains(3));
        assert!(!range.contains(4));
        assert_eq!(range.to_string(), "1-3");
    }
}
