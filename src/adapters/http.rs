use crate::config::FetcherConfig;
use crate::domain::ports::JsonSource;
use crate::utils::error::{FetchError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use url::Url;

/// Fetches JSON documents from the host web server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpJsonSource {
    client: Client,
    base_url: Url,
}

impl HttpJsonSource {
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder().default_headers(build_headers(config)?);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.parsed_base_url()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `path` the way a browser resolves `fetch(path)` against the page:
    /// an absolute path replaces whatever path the base URL carries.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| FetchError::InvalidConfigValueError {
                field: "path".to_string(),
                value: path.to_string(),
                reason: format!("Cannot resolve against {}: {}", self.base_url, e),
            })
    }
}

fn build_headers(config: &FetcherConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            FetchError::InvalidConfigValueError {
                field: "headers".to_string(),
                value: name.clone(),
                reason: e.to_string(),
            }
        })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|e| FetchError::InvalidConfigValueError {
                field: format!("headers.{}", name),
                value: value.clone(),
                reason: e.to_string(),
            })?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

#[async_trait]
impl JsonSource for HttpJsonSource {
    async fn fetch_json(&self, path: &str) -> Result<serde_json::Value> {
        let url = self.resolve(path)?;

        tracing::debug!("Requesting JSON resource: {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("Resource response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::StatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!("Parsing {} bytes from {}", body.len(), url);

        Ok(serde_json::from_slice(&body)?)
    }
}
