//! Tool facade — the entry point invoked by the hosting chat framework.

use crate::tools::client::ApiClient;
use crate::tools::registry::ToolRegistry;
use crate::types::{Config, Error, Result};
use tracing::{debug, error};

/// Stateless dispatch facade.
///
/// Validates that the requested plugin is known and configured, then
/// delegates to the request builder. Invocations are independent and may run
/// concurrently; the only shared state is the read-only config snapshot and
/// the HTTP connection pool.
#[derive(Debug)]
pub struct Gateway {
    config: Config,
    registry: ToolRegistry,
    client: ApiClient,
}

impl Gateway {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: ToolRegistry::builtin(),
            client: ApiClient::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Route `input` to the plugin identified by `plugin_key` and return the
    /// upstream response body unmodified.
    ///
    /// Fails before any network call on an unknown plugin key or a missing
    /// plugin configuration. Every failure is logged exactly once, at the
    /// point of detection, with its contextual identifier; success is not
    /// logged.
    pub async fn invoke(&self, plugin_key: &str, input: &str) -> Result<serde_json::Value> {
        let Some(spec) = self.registry.get(plugin_key) else {
            error!(plugin = plugin_key, "unknown plugin key");
            return Err(Error::unknown_plugin(plugin_key));
        };

        if self.config.plugin_config(plugin_key).is_none() {
            error!(plugin = plugin_key, "no configuration found for plugin");
            return Err(Error::missing_configuration(plugin_key));
        }

        debug!(
            plugin = plugin_key,
            method = spec.method.as_str(),
            path = spec.shape.path(),
            "dispatching plugin invocation"
        );

        self.client.execute(&self.config, spec, input).await
    }
}
