use crate::config::LookupSettings;
use crate::utils::error::{HamPrefixError, Result};
use crate::utils::validation::{validate_optional_string, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional configuration file.
///
/// ```toml
/// [lookup]
/// base_url = "https://api.hamnut.com/v1/call-signs/prefixes"
/// api_key = "${HAMNUT_API_KEY}"
/// default_call_sign = "EV1"
/// field = "countryName"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub lookup: LookupSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupSection {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub default_call_sign: Option<String>,
    pub field: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HamPrefixError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HamPrefixError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HamPrefixError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Overlays the values present in the file onto `settings`.
    pub fn apply_to(&self, mut settings: LookupSettings) -> LookupSettings {
        let section = &self.lookup;
        if let Some(base_url) = &section.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(api_key) = &section.api_key {
            settings.api_key = Some(api_key.clone());
        }
        if let Some(call_sign) = &section.default_call_sign {
            settings.default_call_sign = call_sign.clone();
        }
        if let Some(field) = &section.field {
            settings.field = Some(field.clone());
        }
        settings
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.lookup.base_url {
            validate_url("lookup.base_url", base_url)?;
        }
        validate_optional_string("lookup.api_key", self.lookup.api_key.as_deref())?;
        validate_optional_string("lookup.field", self.lookup.field.as_deref())?;
        Ok(())
    }
}
