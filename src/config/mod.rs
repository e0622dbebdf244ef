#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_optional_string, validate_url, Validate};
use serde::{Deserialize, Serialize};

/// HamNut call-sign prefix endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.hamnut.com/v1/call-signs/prefixes";

/// Input used when no call sign is given on the command line
pub const DEFAULT_CALL_SIGN: &str = "EV1";

/// Fully resolved lookup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub default_call_sign: String,
    pub field: Option<String>,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            default_call_sign: DEFAULT_CALL_SIGN.to_string(),
            field: None,
        }
    }
}

impl LookupSettings {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl ConfigProvider for LookupSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn default_call_sign(&self) -> &str {
        &self.default_call_sign
    }

    fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

impl Validate for LookupSettings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_optional_string("api_key", self.api_key.as_deref())?;
        validate_optional_string("field", self.field.as_deref())?;
        // Any default call sign is accepted; blank ones extract to an empty prefix.
        Ok(())
    }
}
