use crate::core::client::HamNutClient;
use crate::core::prefix::extract_prefix;
use crate::core::{ConfigProvider, PrefixLookup, Projection};
use crate::utils::error::{HamPrefixError, Result};
use serde_json::Value;

/// Runs one lookup: extract the prefix, fetch it once, project the result.
pub struct LookupEngine<L: PrefixLookup> {
    source: L,
}

impl<L: PrefixLookup> LookupEngine<L> {
    pub fn new(source: L) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &L {
        &self.source
    }

    pub async fn lookup(&self, input: &str, field: Option<&str>) -> Result<Projection> {
        let prefix = extract_prefix(input);
        tracing::debug!("Looking up prefix {:?} for input {:?}", prefix.as_str(), input);

        let result = self.source.fetch(&prefix).await?;
        let projection = Projection::project(result, field);

        if let Projection::FieldNotFound { field } = &projection {
            tracing::info!("Field {:?} not present in response for {:?}", field, prefix.as_str());
        }
        Ok(projection)
    }

    /// Failures are logged and collapse to `None`; nothing is propagated.
    pub async fn lookup_or_none(&self, input: &str, field: Option<&str>) -> Option<Value> {
        match self.lookup(input, field).await {
            Ok(projection) => Some(projection.into_value()),
            Err(e) => {
                tracing::error!(
                    "Prefix lookup for {:?} failed: {} (Category: {:?})",
                    input,
                    e,
                    e.category()
                );
                None
            }
        }
    }
}

/// Blocking lookup for callers without an async runtime. Builds a
/// current-thread runtime and a fresh client for the single call; inside a
/// runtime use [`LookupEngine::lookup`] instead.
pub fn lookup_blocking<C: ConfigProvider>(
    config: &C,
    input: &str,
    field: Option<&str>,
) -> Result<Projection> {
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(HamPrefixError::NestedRuntime);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let engine = LookupEngine::new(HamNutClient::new(config)?);
    runtime.block_on(engine.lookup(input, field))
}
