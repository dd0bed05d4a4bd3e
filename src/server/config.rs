use super::Error;
use rsbroker_proto::{RequestHeader, SizeField};
use rsbroker_wire_format::WireFormatSizeStatic;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9092;
/// Frames declaring more than this are rejected before any buffering.
pub const DEFAULT_MAX_FRAME_SIZE: usize = 100 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) max_frame_size: usize,
    pub(crate) size_field: SizeField,
}

impl ServerConfig {
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn max_frame_size(&self) -> usize {
        self.max_frame_size
    }

    pub fn size_field(&self) -> SizeField {
        self.size_field
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
            size_field: SizeField::default(),
        }
    }
}

pub struct ServerConfigBuilder {
    host: Option<String>,
    port: u16,
    max_frame_size: usize,
    size_field: SizeField,
}

impl Default for ServerConfigBuilder {
    fn default() -> Self {
        ServerConfigBuilder {
            host: Some(DEFAULT_HOST.to_string()),
            port: DEFAULT_PORT,
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
            size_field: SizeField::default(),
        }
    }
}

impl ServerConfigBuilder {
    pub fn host(mut self, val: String) -> Self {
        self.host = Some(val);
        self
    }

    pub fn port(mut self, val: u16) -> Self {
        self.port = val;
        self
    }

    pub fn max_frame_size(mut self, val: usize) -> Self {
        self.max_frame_size = val;
        self
    }

    pub fn size_field(mut self, val: SizeField) -> Self {
        self.size_field = val;
        self
    }

    pub fn build(self) -> Result<ServerConfig, Error> {
        let host = self
            .host
            .filter(|host| !host.is_empty())
            .ok_or(Error::IncompleteConfig("host"))?;

        // message_size counts the bytes after itself
        let min_frame_size = RequestHeader::wire_size_static() - u32::wire_size_static();
        if self.max_frame_size < min_frame_size {
            return Err(Error::ValueError(
                format!(
                    "max_frame_size={} is smaller than a request header ({} bytes)",
                    self.max_frame_size, min_frame_size
                )
                .into(),
            ));
        }

        Ok(ServerConfig {
            host,
            port: self.port,
            max_frame_size: self.max_frame_size,
            size_field: self.size_field,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::builder().build().unwrap();

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.listen_addr(), "127.0.0.1:9092");
        assert_eq!(config.max_frame_size(), DEFAULT_MAX_FRAME_SIZE);
        assert_eq!(config.size_field(), SizeField::Compat);
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::builder()
            .host("0.0.0.0".to_string())
            .port(0)
            .max_frame_size(1024)
            .size_field(SizeField::Exact)
            .build()
            .unwrap();

        assert_eq!(config.listen_addr(), "0.0.0.0:0");
        assert_eq!(config.max_frame_size(), 1024);
        assert_eq!(config.size_field(), SizeField::Exact);
    }

    #[test]
    fn empty_host_is_rejected() {
        let result = ServerConfig::builder().host(String::new()).build();
        assert!(matches!(result, Err(Error::IncompleteConfig("host"))));
    }

    #[test]
    fn frame_limit_below_header_is_rejected() {
        let result = ServerConfig::builder().max_frame_size(7).build();
        assert!(matches!(result, Err(Error::ValueError(_))));

        assert!(ServerConfig::builder().max_frame_size(8).build().is_ok());
    }
}
