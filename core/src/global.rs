use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use ipbeacon_common::address::{AddressResult, validate};
use ipbeacon_common::error::ResolveError;

#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

/// Asks a "what is my IP" endpoint for the caller's public address(es).
pub struct GlobalResolver {
    client: Client,
    url: String,
}

impl GlobalResolver {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One result per comma-separated entry, or a single sentinel on failure.
    pub async fn resolve(&self) -> Vec<AddressResult> {
        match self.fetch().await {
            Ok(results) => results,
            Err(e) => {
                warn!("Global address lookup against {} failed: {e}", self.url);
                vec![AddressResult::Failure(e.code())]
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<AddressResult>, ResolveError> {
        debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ResolveError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: IpResponse = serde_json::from_str(&body)?;
        debug!("Endpoint reported ip field {:?}", parsed.ip);

        Ok(split_addresses(&parsed.ip))
    }
}

/// Some endpoints return `"a, b"` in the `ip` field; each entry is validated on its own.
pub fn split_addresses(field: &str) -> Vec<AddressResult> {
    field.split(',').map(|entry| validate(entry.trim())).collect()
}
