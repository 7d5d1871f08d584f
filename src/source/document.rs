//! Trait for fetching the compatibility document

#[cfg(test)]
use mockall::automock;

use crate::source::error::FetchError;

/// Trait for fetching the raw text of the compatibility document
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human readable location of the document, used in logs
    fn location(&self) -> String;

    /// Fetches the whole document body
    ///
    /// # Returns
    /// * `Ok(String)` - The complete UTF-8 body, received before returning
    /// * `Err(FetchError)` - If the request fails or the status is not a success
    async fn fetch_document(&self) -> Result<String, FetchError>;
}
