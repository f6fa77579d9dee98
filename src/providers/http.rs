use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ProbeError, Result};
use crate::interfaces::fetcher::Fetcher;

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout_seconds: Option<u64>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let client = builder
            .build()
            .map_err(|e| ProbeError::Http(e.to_string()))?;
        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProbeError::Http(e.to_string()))?;
        debug!(url, status = response.status().as_u16(), "GET");
        Ok(response)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get_response_code(&self, url: &str) -> Result<u16> {
        let response = self.get(url).await?;
        Ok(response.status().as_u16())
    }

    async fn read_json_from_url(&self, url: &str) -> Result<Map<String, Value>> {
        let response = self
            .get(url)
            .await?
            .error_for_status()
            .map_err(|e| ProbeError::Http(e.to_string()))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProbeError::Http(e.to_string()))?;
        let text = String::from_utf8_lossy(&bytes);
        serde_json::from_str(&text).map_err(|e| ProbeError::Serialization(e.to_string()))
    }
}
