use log::debug;
use reqwest::Client;
use url::Url;

use crate::config::Config;
use crate::error::FetchError;
use crate::models::{Envelope, Transaction};

/// Anything that can hand out one page of transactions.
pub trait TransactionSource {
    async fn fetch_page(&self, offset: u64, limit: u64) -> Result<Vec<Transaction>, FetchError>;
}

/// HTTP client for the paginated transactions endpoint.
pub struct TransactionsClient {
    http: Client,
    endpoint: Url,
}

impl TransactionsClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| FetchError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            source: e,
        })?;
        let http = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { http, endpoint })
    }
}

impl TransactionSource for TransactionsClient {
    async fn fetch_page(&self, offset: u64, limit: u64) -> Result<Vec<Transaction>, FetchError> {
        // Keeps the endpoint's own filter params and appends offset/limit after them.
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("offset", offset), ("limit", limit)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        let envelope: Envelope = serde_json::from_slice(&body)?;
        if let Some(count) = envelope.metadata.as_ref().and_then(|m| m.count) {
            debug!("page at offset {} reports count {}", offset, count);
        }
        Ok(envelope.resources)
    }
}
