//! # Toolgate - Plugin Dispatch Gateway
//!
//! Routes a free-text chat-plugin input to one of the supported third-party
//! HTTP APIs, providing:
//! - A static dispatch table mapping plugin keys to request descriptors
//! - Explicit configuration (env-var or manifest-file sourced) resolved once
//!   at process start
//! - A request builder that assembles URL, auth header, and payload and
//!   performs a single outbound call
//! - A facade that gates dispatch on plugin configuration presence
//!
//! ## Architecture
//!
//! Data flows one direction and every invocation is stateless:
//! ```text
//!   invoke(plugin_key, input)
//!            │
//!     ┌──────▼──────┐   ┌──────────────┐   ┌───────────────┐
//!     │   Gateway    │ → │ ToolRegistry │ → │   ApiClient   │ → upstream API
//!     │  (facade)    │   │ (dispatch)   │   │ (one request) │
//!     └─────────────┘   └──────────────┘   └───────┬───────┘
//!                                                   │ reads
//!                                            ┌──────▼──────┐
//!                                            │   Config    │
//!                                            └─────────────┘
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod tools;
pub mod types;

// Internal utilities
pub mod observability;

pub use tools::{ApiClient, Gateway, ToolRegistry};
pub use types::{AuthConfig, Config, Error, Result};
