use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that can turn a resource path into a parsed JSON document.
#[async_trait]
pub trait JsonSource: Send + Sync {
    async fn fetch_json(&self, path: &str) -> Result<serde_json::Value>;
}
