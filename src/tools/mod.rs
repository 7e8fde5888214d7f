//! Tool dispatch infrastructure — registry, request builder, facade.
//!
//! The static dispatch table maps each supported plugin key to a request
//! descriptor; the client turns a descriptor plus the raw input into exactly
//! one outbound HTTP call; the gateway fronts both for the hosting chat
//! framework.

pub mod client;
pub mod gateway;
pub mod registry;

pub use client::ApiClient;
pub use gateway::Gateway;
pub use registry::{Method, RequestShape, ToolDescriptor, ToolRegistry, ToolSpec, TOOL_SPECS};
