//! Document retrieval layer
//!
//! - [`document`]: `DocumentSource` trait for fetching the raw page text
//! - [`http`]: HTTP implementation backed by reqwest
//! - [`error`]: Error type for fetch operations

pub mod document;
pub mod error;
pub mod http;

pub use document::DocumentSource;
pub use error::FetchError;
pub use http::HttpSource;
