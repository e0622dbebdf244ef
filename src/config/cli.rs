use crate::config::toml_config::TomlConfig;
use crate::config::LookupSettings;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hamprefix")]
#[command(about = "Look up amateur-radio call-sign prefix information from HamNut")]
pub struct CliConfig {
    #[arg(help = "Call sign or prefix to look up [default: EV1]")]
    pub call_sign: Option<String>,

    #[arg(long, short = 'f', help = "Print only this field of the response (e.g. countryName)")]
    pub field: Option<String>,

    #[arg(long, help = "Prefix lookup endpoint")]
    pub base_url: Option<String>,

    #[arg(long, help = "API key sent in the X-API-Key header")]
    pub api_key: Option<String>,

    #[arg(long, short = 'c', help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Resolves settings with precedence: flags, then config file, then defaults.
    pub fn resolve(&self) -> Result<LookupSettings> {
        let mut settings = LookupSettings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from {}", path.display());
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            settings = file_config.apply_to(settings);
        }

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(api_key) = &self.api_key {
            settings.api_key = Some(api_key.clone());
        }
        if let Some(field) = &self.field {
            settings.field = Some(field.clone());
        }

        settings.validate()?;
        Ok(settings)
    }

    /// The call sign given on the command line, or the configured default.
    pub fn call_sign<'a, C: ConfigProvider>(&'a self, settings: &'a C) -> &'a str {
        self.call_sign
            .as_deref()
            .unwrap_or_else(|| settings.default_call_sign())
    }
}
