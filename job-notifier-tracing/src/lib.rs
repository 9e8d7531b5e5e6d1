#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![cfg_attr(feature = "fail-on-warnings", deny(clippy::all))]

use serde::{Deserialize, Serialize};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use tracing::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracingConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            filter: default_filter(),
        }
    }
}

fn default_service_name() -> String {
    "dev".to_string()
}

fn default_filter() -> String {
    "info".to_string()
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured filter.
pub fn init_tracer(config: TracingConfig) -> anyhow::Result<()> {
    let filter_layer = filter_layer(&config)?;
    let fmt_layer = fmt::layer().json().with_current_span(true);
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;
    info!(service_name = %config.service_name, "tracing initialized");
    Ok(())
}

fn filter_layer(config: &TracingConfig) -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.filter))?)
}
