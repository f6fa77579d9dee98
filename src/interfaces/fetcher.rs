use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domains::ping::PingBody;
use crate::error::{ProbeError, Result};

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get_response_code(&self, url: &str) -> Result<u16>;

    async fn read_json_from_url(&self, url: &str) -> Result<Map<String, Value>>;

    async fn read_ping(&self, url: &str) -> Result<PingBody> {
        let object = self.read_json_from_url(url).await?;
        serde_json::from_value(Value::Object(object))
            .map_err(|e| ProbeError::Serialization(e.to_string()))
    }
}
