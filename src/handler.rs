use log::{debug, trace};
use rsbroker_proto::{
    apis::api_versions::ApiVersionsResponse, ApiKey, ApiRegistry, FramingError, KafkaResponse,
    RequestHeader, SizeField,
};

/// Turns one complete request frame into the response frame to send back.
/// Holds no per-request state; a single instance serves every connection.
#[derive(Debug, Clone)]
pub struct RequestHandler {
    registry: ApiRegistry,
    size_field: SizeField,
}

impl RequestHandler {
    pub fn new(registry: ApiRegistry, size_field: SizeField) -> Self {
        RequestHandler {
            registry,
            size_field,
        }
    }

    pub fn handle(&self, frame: &[u8]) -> Result<Vec<u8>, FramingError> {
        let header = RequestHeader::decode(frame)?;
        trace!("handle: header={:?}", header);

        let response = match self.registry.check(header.api_key, header.api_version) {
            Ok(ApiKey::ApiVersions) => ApiVersionsResponse::supported(self.registry.entries()),
            Err(unsupported) => {
                debug!(
                    "correlation_id={}: {}",
                    header.correlation_id, unsupported
                );
                ApiVersionsResponse::unsupported_version()
            }
        };

        Ok(response.to_bytes(header.correlation_id, self.size_field))
    }
}

impl Default for RequestHandler {
    fn default() -> Self {
        RequestHandler::new(ApiRegistry::default(), SizeField::default())
    }
}
