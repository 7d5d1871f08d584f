//! HTTP document source

use tracing::{debug, info, warn};

use crate::config::USER_AGENT;
use crate::source::document::DocumentSource;
use crate::source::error::FetchError;

/// Fetches the compatibility document with a single GET request
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// Creates a new HttpSource for the given URL
    pub fn new(url: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl DocumentSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch_document(&self) -> Result<String, FetchError> {
        info!("Fetching compatibility document from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();

        if !status.is_success() {
            warn!("Document source returned status {}: {}", status, self.url);
            return Err(FetchError::UnexpectedStatus {
                status,
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        debug!("Received {} bytes from {}", body.len(), self.url);

        Ok(body)
    }
}
