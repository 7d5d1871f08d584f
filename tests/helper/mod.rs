//! Shared test utilities

pub mod document;

pub use document::{SWC_CORE_PAGE, serve_document};
