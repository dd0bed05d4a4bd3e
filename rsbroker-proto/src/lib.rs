#[macro_use]
extern crate rsbroker_wire_format_derive;

pub mod apis;
mod data;
mod error;
mod registry;
mod response;

pub use data::{
    api_key::{ApiKey, InvalidApiKey},
    error::ErrorCode,
    header::RequestHeader,
};
pub use error::FramingError;
pub use registry::{ApiRegistry, UnsupportedVersion, VersionRange};
pub use response::{CompatLayout, KafkaResponse, SizeField};

#[cfg(test)]
mod test_utils {
    pub fn init_logger() {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .try_init()
            .ok();
    }

    pub fn hex_bytes(hex_str: &str) -> Vec<u8> {
        let hex_str: String = hex_str.split_whitespace().collect();
        let mut buf = Vec::new();
        for i in 0..hex_str.len() / 2 {
            let hex_byte = &hex_str[i * 2..=i * 2 + 1];
            let byte = u8::from_str_radix(hex_byte, 16).unwrap();
            buf.push(byte);
        }

        buf
    }
}
