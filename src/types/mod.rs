//! Core types for the toolgate gateway.
//!
//! This module provides foundational types used throughout the system:
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Explicit tool/plugin configuration resolved once at startup

mod config;
mod errors;

pub use config::{AuthConfig, Config, PluginConfig, ToolConfig, DEFAULT_API_KEY_HEADER};
pub use errors::{Error, Result};
