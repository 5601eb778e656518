use crate::{
    Config,
    error::ProviderError,
    model::{Location, Weather},
    provider::snapshot::SnapshotProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Snapshot,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Snapshot => "snapshot",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::Snapshot]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "snapshot" => Ok(ProviderId::Snapshot),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: snapshot."
            )),
        }
    }
}

/// Source of forecasts: turns a free-text location query into a place and a
/// forecast snapshot whose daily and hourly entries are in chronological
/// order.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn resolve(&self, query: &str) -> Result<(Location, Weather), ProviderError>;
}

/// Construct a provider from config and explicit ProviderId.
pub fn provider_from_config(
    id: ProviderId,
    config: &Config,
) -> Result<Box<dyn WeatherProvider>, ProviderError> {
    let source = config
        .provider_source(id)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ProviderError::NotConfigured(id.to_string()))?;

    let boxed: Box<dyn WeatherProvider> = match id {
        ProviderId::Snapshot => Box::new(SnapshotProvider::new(source)),
    };

    Ok(boxed)
}

/// Construct the default provider from config, using `default_provider` field.
pub fn default_provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let id = config.default_provider_id()?;
    Ok(provider_from_config(id, config)?)
}
