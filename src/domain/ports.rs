use crate::domain::model::{LookupResult, Prefix};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn default_call_sign(&self) -> &str;
    fn field(&self) -> Option<&str>;
}

/// A source of prefix metadata, one round trip per call.
#[async_trait]
pub trait PrefixLookup: Send + Sync {
    async fn fetch(&self, prefix: &Prefix) -> Result<LookupResult>;
}
