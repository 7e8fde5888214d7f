//! Configuration structures.
//!
//! Configuration is resolved exactly once at process start — from environment
//! variables ([`Config::from_env`]) or from a directory of per-plugin JSON
//! manifests ([`Config::from_manifest_dir`]) — and then passed by reference
//! into the dispatch path. Business logic never reads the environment.
//!
//! Credential rotation therefore means building a fresh `Config` and swapping
//! it in; there is no per-call re-resolution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// Header used for `api_key` auth when no explicit header name is configured.
pub const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";

/// Authentication descriptor for a single tool's outbound calls.
///
/// The serde representation (`type` tag) matches the plugin manifest format:
/// `{"type": "bearer", "token": "..."}` or
/// `{"type": "api_key", "header": "X-API-Key", "key": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No auth header is attached.
    #[default]
    None,
    /// `Authorization: Bearer <token>`.
    Bearer { token: String },
    /// `<header>: <key>`.
    ApiKey {
        #[serde(default = "default_api_key_header")]
        header: String,
        key: String,
    },
}

fn default_api_key_header() -> String {
    DEFAULT_API_KEY_HEADER.to_string()
}

/// Resolved configuration for one tool: where to reach it and how to
/// authenticate. A missing `api_url` is a hard error at request time,
/// never a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    #[serde(default)]
    pub api_url: Option<String>,

    #[serde(default)]
    pub auth: AuthConfig,
}

/// Per-plugin enablement record. Absence of a record blocks dispatch;
/// no further gating semantics are read from `enabled` or `settings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Opaque nested settings, passed through untouched.
    #[serde(default)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

fn default_true() -> bool {
    true
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            settings: serde_json::Map::new(),
        }
    }
}

/// Shape of a per-plugin JSON manifest file.
#[derive(Debug, Deserialize)]
struct PluginManifest {
    name_for_model: String,

    #[serde(default)]
    api: Option<ManifestApi>,

    #[serde(default)]
    auth: AuthConfig,
}

#[derive(Debug, Deserialize)]
struct ManifestApi {
    #[serde(default)]
    url: Option<String>,
}

/// Immutable gateway configuration: per-tool connection/auth records plus
/// per-plugin enablement records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// tool name → connection and auth.
    #[serde(default)]
    pub tools: HashMap<String, ToolConfig>,

    /// plugin key → enablement record.
    #[serde(default)]
    pub plugins: HashMap<String, PluginConfig>,
}

impl Config {
    /// Build configuration from environment variables for every plugin key
    /// in the built-in dispatch table.
    ///
    /// Per tool, with `<TOOL>` the plugin key uppercased (hyphens kept
    /// literally): `<TOOL>_API_URL`, `<TOOL>_AUTH_TYPE`
    /// (`bearer` | `api_key`), `<TOOL>_AUTH_TOKEN`, `<TOOL>_API_KEY_HEADER`,
    /// `<TOOL>_API_KEY`. Empty values count as unset. Every plugin key gets
    /// an enabled record, mirroring the hosting framework's stub semantics.
    pub fn from_env() -> Self {
        let mut tools = HashMap::new();
        let mut plugins = HashMap::new();

        for key in crate::tools::registry::plugin_keys() {
            tools.insert(key.to_string(), ToolConfig::tool_from_env(key));
            plugins.insert(key.to_string(), PluginConfig::default());
        }

        Self { tools, plugins }
    }

    /// Build configuration from a directory of per-plugin JSON manifests
    /// (the `.well-known` layout). Malformed or unreadable files are logged
    /// and skipped; only an unreadable directory is fatal.
    ///
    /// Unlike [`Config::from_env`], only plugins with a manifest present
    /// receive an enablement record.
    pub fn from_manifest_dir(dir: impl AsRef<Path>) -> crate::types::Result<Self> {
        let mut config = Self::default();

        for entry in std::fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            match Self::load_manifest(&path) {
                Ok(manifest) => {
                    let name = manifest.name_for_model;
                    config.tools.insert(
                        name.clone(),
                        ToolConfig {
                            api_url: manifest.api.and_then(|a| a.url),
                            auth: manifest.auth,
                        },
                    );
                    config.plugins.insert(name, PluginConfig::default());
                }
                Err(err) => {
                    warn!(file = %path.display(), %err, "skipping malformed plugin manifest");
                }
            }
        }

        Ok(config)
    }

    fn load_manifest(path: &Path) -> Result<PluginManifest, Box<dyn std::error::Error>> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Base API URL for a tool, if configured.
    pub fn api_url(&self, tool: &str) -> Option<&str> {
        self.tools.get(tool).and_then(|t| t.api_url.as_deref())
    }

    /// Auth descriptor for a tool. Unconfigured tools resolve to
    /// [`AuthConfig::None`].
    pub fn auth(&self, tool: &str) -> &AuthConfig {
        static AUTH_NONE: AuthConfig = AuthConfig::None;
        self.tools.get(tool).map_or(&AUTH_NONE, |t| &t.auth)
    }

    /// Enablement record for a plugin key. `None` blocks dispatch.
    pub fn plugin_config(&self, plugin_key: &str) -> Option<&PluginConfig> {
        self.plugins.get(plugin_key)
    }
}

impl ToolConfig {
    /// Resolve one tool's config from the environment.
    fn tool_from_env(plugin_key: &str) -> Self {
        let prefix = plugin_key.to_uppercase();

        Self {
            api_url: env_var(&format!("{prefix}_API_URL")),
            auth: AuthConfig::auth_from_env(&prefix),
        }
    }
}

impl AuthConfig {
    /// Resolve a tool's auth descriptor from `<TOOL>_AUTH_TYPE` and its
    /// companion variables. An unknown or absent type yields `None`; so does
    /// a declared type whose credential material is missing (sending a
    /// placeholder credential upstream would be worse than sending nothing).
    fn auth_from_env(prefix: &str) -> Self {
        match env_var(&format!("{prefix}_AUTH_TYPE")).as_deref() {
            Some("bearer") => match env_var(&format!("{prefix}_AUTH_TOKEN")) {
                Some(token) => AuthConfig::Bearer { token },
                None => {
                    warn!(tool_prefix = prefix, "bearer auth declared but token unset");
                    AuthConfig::None
                }
            },
            Some("api_key") => match env_var(&format!("{prefix}_API_KEY")) {
                Some(key) => AuthConfig::ApiKey {
                    header: env_var(&format!("{prefix}_API_KEY_HEADER"))
                        .unwrap_or_else(default_api_key_header),
                    key,
                },
                None => {
                    warn!(tool_prefix = prefix, "api_key auth declared but key unset");
                    AuthConfig::None
                }
            },
            _ => AuthConfig::None,
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
