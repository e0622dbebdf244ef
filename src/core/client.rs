use crate::core::{ConfigProvider, LookupResult, Prefix, PrefixLookup};
use crate::utils::error::{HamPrefixError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("ham-prefix/", env!("CARGO_PKG_VERSION"));

/// Header carrying the optional API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the HamNut call-sign prefix endpoint.
#[derive(Debug, Clone)]
pub struct HamNutClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HamNutClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(key) = config.api_key() {
            let mut value = HeaderValue::from_str(key).map_err(|e| {
                HamPrefixError::InvalidConfigValueError {
                    field: "api_key".to_string(),
                    value: "<redacted>".to_string(),
                    reason: e.to_string(),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            api_key: config.api_key().map(str::to_string),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn parse_body(body: &str) -> Result<LookupResult> {
        match serde_json::from_str::<Value>(body)? {
            Value::Object(data) => Ok(LookupResult::new(data)),
            other => Err(HamPrefixError::UnexpectedBodyShape {
                kind: json_kind(&other),
            }),
        }
    }
}

#[async_trait::async_trait]
impl PrefixLookup for HamNutClient {
    async fn fetch(&self, prefix: &Prefix) -> Result<LookupResult> {
        tracing::debug!(
            "Making API request to: {} (prefix={:?}, authenticated={})",
            self.base_url,
            prefix.as_str(),
            self.has_api_key()
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("prefix", prefix.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Prefix lookup request to {} failed: {}", self.base_url, e);
                e
            })?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status != StatusCode::OK {
            tracing::warn!(
                "Prefix lookup for {:?} returned HTTP status {}",
                prefix.as_str(),
                status
            );
            return Err(HamPrefixError::HttpStatus { status });
        }

        let body = response.text().await.map_err(|e| {
            tracing::warn!("Reading prefix lookup response failed: {}", e);
            e
        })?;
        Self::parse_body(&body).map_err(|e| {
            tracing::warn!("Prefix lookup for {:?} returned a malformed body: {}", prefix.as_str(), e);
            e
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
