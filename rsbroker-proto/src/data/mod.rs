pub mod api_key;
pub mod error;
pub mod header;
