use crate::adapters::http::HttpJsonSource;
use crate::config::FetcherConfig;
use crate::domain::model::Resource;
use crate::domain::ports::JsonSource;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Data access for the demo's static model documents.
///
/// Every call issues exactly one request and hands back whatever JSON the
/// host served. Nothing is cached, retried or defaulted.
pub struct ModelService<S: JsonSource = HttpJsonSource> {
    source: S,
}

impl ModelService<HttpJsonSource> {
    pub fn from_config(config: &FetcherConfig) -> Result<Self> {
        Ok(Self::new(HttpJsonSource::new(config)?))
    }
}

impl<S: JsonSource> ModelService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn fetch_json(&self, path: &str) -> Result<Value> {
        self.source.fetch_json(path).await
    }

    pub async fn get(&self, resource: Resource) -> Result<Value> {
        tracing::debug!("Loading {} model", resource);
        self.fetch_json(resource.path()).await
    }

    /// Typed variant of [`get`](Self::get); a shape mismatch surfaces as a parse error.
    pub async fn get_as<T: DeserializeOwned>(&self, resource: Resource) -> Result<T> {
        let value = self.get(resource).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get_feedback(&self) -> Result<Value> {
        self.get(Resource::Feedback).await
    }

    pub async fn get_users(&self) -> Result<Value> {
        self.get(Resource::Users).await
    }

    pub async fn get_analytics(&self) -> Result<Value> {
        self.get(Resource::Analytics).await
    }
}
