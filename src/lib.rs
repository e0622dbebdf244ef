pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{toml_config::TomlConfig, LookupSettings};
pub use crate::core::{
    client::HamNutClient,
    engine::{lookup_blocking, LookupEngine},
    prefix::extract_prefix,
};
pub use crate::domain::model::{LookupResult, Prefix, Projection};
pub use crate::utils::error::{HamPrefixError, Result};
