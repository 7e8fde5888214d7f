//! Static dispatch table — plugin keys, request descriptors, store metadata.
//!
//! Every supported plugin key maps to exactly one [`ToolSpec`] describing how
//! to turn the raw input into a single HTTP request: endpoint path, method,
//! and where the input goes (JSON body key, query parameter, or trailing path
//! segment). The table is the single source of truth; [`ToolRegistry`] wraps
//! it in a keyed lookup.

use serde::Serialize;
use std::collections::HashMap;

/// HTTP method for a tool request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// How the raw input is folded into the outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestShape {
    /// JSON body `{"<key>": input}` sent to `path`.
    Json {
        path: &'static str,
        key: &'static str,
    },
    /// Input appended to `path` as the `key` query parameter.
    Query {
        path: &'static str,
        key: &'static str,
    },
    /// Input appended to `path` as a trailing, percent-encoded path segment.
    PathSegment { path: &'static str },
}

impl RequestShape {
    /// Endpoint path (always with a leading slash).
    pub fn path(&self) -> &'static str {
        match self {
            RequestShape::Json { path, .. }
            | RequestShape::Query { path, .. }
            | RequestShape::PathSegment { path } => path,
        }
    }

    /// The single payload key, when the shape has one.
    pub fn payload_key(&self) -> Option<&'static str> {
        match self {
            RequestShape::Json { key, .. } | RequestShape::Query { key, .. } => Some(key),
            RequestShape::PathSegment { .. } => None,
        }
    }
}

/// Plugin-store descriptor — display metadata only. No tool overrides
/// behavior, so there is no trait here, just data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// One dispatch table entry: everything needed to turn `(plugin_key, input)`
/// into a single HTTP request.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    /// External plugin identifier. Also the tool name used for env-var
    /// naming and log context — the two are equal in this system.
    pub plugin_key: &'static str,
    pub method: Method,
    pub shape: RequestShape,
    pub descriptor: ToolDescriptor,
}

macro_rules! tool {
    ($key:literal, $method:ident, $shape:expr, $name:literal, $desc:literal) => {
        ToolSpec {
            plugin_key: $key,
            method: Method::$method,
            shape: $shape,
            descriptor: ToolDescriptor {
                name: $name,
                description: $desc,
                icon: concat!("/assets/plugins/", $key, ".svg"),
            },
        }
    };
}

/// The full dispatch table. Order is presentation order for store listings;
/// lookups go through [`ToolRegistry`].
pub const TOOL_SPECS: &[ToolSpec] = &[
    tool!(
        "pdf-reader",
        Post,
        RequestShape::Json { path: "/analyze", key: "document" },
        "PDF Reader",
        "Extracts and analyzes text from PDF documents"
    ),
    tool!(
        "weather-wizard",
        Get,
        RequestShape::Query { path: "/forecast", key: "location" },
        "Weather Wizard",
        "Current conditions and forecasts for any location"
    ),
    tool!(
        "image-editor",
        Post,
        RequestShape::Json { path: "/edit", key: "image" },
        "Image Editor",
        "Applies edits and transformations to images"
    ),
    tool!(
        "code-review",
        Post,
        RequestShape::Json { path: "/analyze", key: "code" },
        "Code Review",
        "Reviews code snippets for bugs and style issues"
    ),
    tool!(
        "stock-market",
        Get,
        RequestShape::PathSegment { path: "/quote" },
        "Stock Market",
        "Live quotes for stock ticker symbols"
    ),
    tool!(
        "travel-planner",
        Post,
        RequestShape::Json { path: "/plan", key: "query" },
        "Travel Planner",
        "Builds itineraries from free-form travel requests"
    ),
    tool!(
        "recipe-finder",
        Get,
        RequestShape::Query { path: "/search", key: "q" },
        "Recipe Finder",
        "Finds recipes matching ingredients or dish names"
    ),
    tool!(
        "language-translator",
        Post,
        RequestShape::Json { path: "/translate", key: "text" },
        "Language Translator",
        "Translates text between languages"
    ),
    tool!(
        "task-manager",
        Post,
        RequestShape::Json { path: "/tasks", key: "task" },
        "Task Manager",
        "Creates and tracks to-do items"
    ),
    tool!(
        "math-solver",
        Post,
        RequestShape::Json { path: "/solve", key: "problem" },
        "Math Solver",
        "Solves math problems with step-by-step working"
    ),
    tool!(
        "news-aggregator",
        Get,
        RequestShape::Query { path: "/news", key: "topic" },
        "News Aggregator",
        "Headlines and articles for a topic"
    ),
    tool!(
        "calendar-assistant",
        Post,
        RequestShape::Json { path: "/events", key: "event" },
        "Calendar Assistant",
        "Schedules events from natural-language descriptions"
    ),
    tool!(
        "document-creator",
        Post,
        RequestShape::Json { path: "/create", key: "content" },
        "Document Creator",
        "Generates formatted documents from outlines"
    ),
    tool!(
        "web-search-pro",
        Get,
        RequestShape::Query { path: "/search", key: "q" },
        "Web Search Pro",
        "General-purpose web search"
    ),
    tool!(
        "data-analyzer",
        Post,
        RequestShape::Json { path: "/analyze", key: "data" },
        "Data Analyzer",
        "Summarizes and charts tabular data"
    ),
    tool!(
        "email-assistant",
        Post,
        RequestShape::Json { path: "/compose", key: "content" },
        "Email Assistant",
        "Drafts and refines email messages"
    ),
    tool!(
        "social-media-manager",
        Post,
        RequestShape::Json { path: "/post", key: "content" },
        "Social Media Manager",
        "Drafts posts for social platforms"
    ),
    tool!(
        "file-converter",
        Post,
        RequestShape::Json { path: "/convert", key: "file" },
        "File Converter",
        "Converts files between common formats"
    ),
    tool!(
        "research-assistant",
        Get,
        RequestShape::Query { path: "/search", key: "query" },
        "Research Assistant",
        "Searches scholarly and reference sources"
    ),
    tool!(
        "seo-analyzer",
        Post,
        RequestShape::Json { path: "/analyze", key: "url" },
        "SEO Analyzer",
        "Audits pages for search-engine optimization"
    ),
    tool!(
        "password-generator",
        Post,
        RequestShape::Json { path: "/generate", key: "requirements" },
        "Password Generator",
        "Generates passwords meeting stated requirements"
    ),
    tool!(
        "voice-assistant",
        Post,
        RequestShape::Json { path: "/process", key: "audio" },
        "Voice Assistant",
        "Transcribes and interprets voice clips"
    ),
    tool!(
        "code-generator",
        Post,
        RequestShape::Json { path: "/generate", key: "prompt" },
        "Code Generator",
        "Generates code from natural-language prompts"
    ),
    tool!(
        "diagram-creator",
        Post,
        RequestShape::Json { path: "/create", key: "description" },
        "Diagram Creator",
        "Renders diagrams from text descriptions"
    ),
    tool!(
        "resume-builder",
        Post,
        RequestShape::Json { path: "/create", key: "details" },
        "Resume Builder",
        "Builds resumes from career details"
    ),
];

/// Iterate over every supported plugin key, in table order.
pub fn plugin_keys() -> impl Iterator<Item = &'static str> {
    TOOL_SPECS.iter().map(|spec| spec.plugin_key)
}

/// Keyed lookup over the static dispatch table.
#[derive(Debug)]
pub struct ToolRegistry {
    entries: HashMap<&'static str, &'static ToolSpec>,
}

impl ToolRegistry {
    /// Build the registry from the built-in table.
    pub fn builtin() -> Self {
        let entries = TOOL_SPECS
            .iter()
            .map(|spec| (spec.plugin_key, spec))
            .collect();
        Self { entries }
    }

    /// Get a dispatch entry by plugin key.
    pub fn get(&self, plugin_key: &str) -> Option<&'static ToolSpec> {
        self.entries.get(plugin_key).copied()
    }

    /// Check if a plugin key exists.
    pub fn has_plugin(&self, plugin_key: &str) -> bool {
        self.entries.contains_key(plugin_key)
    }

    /// List all plugin keys, sorted.
    pub fn list_keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Store descriptors for every plugin, in table order.
    pub fn descriptors(&self) -> Vec<(&'static str, &'static ToolDescriptor)> {
        TOOL_SPECS
            .iter()
            .map(|spec| (spec.plugin_key, &spec.descriptor))
            .collect()
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// The documented `(plugin key, method, endpoint path, payload key)`
    /// tuples. POST + key = JSON body, GET + key = query parameter,
    /// GET without key = trailing path segment.
    const EXPECTED: &[(&str, Method, &str, Option<&str>)] = &[
        ("pdf-reader", Method::Post, "/analyze", Some("document")),
        ("weather-wizard", Method::Get, "/forecast", Some("location")),
        ("image-editor", Method::Post, "/edit", Some("image")),
        ("code-review", Method::Post, "/analyze", Some("code")),
        ("stock-market", Method::Get, "/quote", None),
        ("travel-planner", Method::Post, "/plan", Some("query")),
        ("recipe-finder", Method::Get, "/search", Some("q")),
        ("language-translator", Method::Post, "/translate", Some("text")),
        ("task-manager", Method::Post, "/tasks", Some("task")),
        ("math-solver", Method::Post, "/solve", Some("problem")),
        ("news-aggregator", Method::Get, "/news", Some("topic")),
        ("calendar-assistant", Method::Post, "/events", Some("event")),
        ("document-creator", Method::Post, "/create", Some("content")),
        ("web-search-pro", Method::Get, "/search", Some("q")),
        ("data-analyzer", Method::Post, "/analyze", Some("data")),
        ("email-assistant", Method::Post, "/compose", Some("content")),
        ("social-media-manager", Method::Post, "/post", Some("content")),
        ("file-converter", Method::Post, "/convert", Some("file")),
        ("research-assistant", Method::Get, "/search", Some("query")),
        ("seo-analyzer", Method::Post, "/analyze", Some("url")),
        ("password-generator", Method::Post, "/generate", Some("requirements")),
        ("voice-assistant", Method::Post, "/process", Some("audio")),
        ("code-generator", Method::Post, "/generate", Some("prompt")),
        ("diagram-creator", Method::Post, "/create", Some("description")),
        ("resume-builder", Method::Post, "/create", Some("details")),
    ];

    #[test]
    fn test_table_matches_documented_tuples() {
        let registry = ToolRegistry::builtin();
        assert_eq!(registry.len(), EXPECTED.len());

        for (key, method, path, payload_key) in EXPECTED {
            let spec = registry.get(key).unwrap_or_else(|| panic!("missing: {key}"));
            assert_eq!(spec.method, *method, "{key}: method");
            assert_eq!(spec.shape.path(), *path, "{key}: path");
            assert_eq!(spec.shape.payload_key(), *payload_key, "{key}: payload key");
        }
    }

    #[test]
    fn test_shape_kind_follows_method() {
        // JSON bodies only on POST; query/path-segment shapes only on GET.
        for spec in TOOL_SPECS {
            match spec.shape {
                RequestShape::Json { .. } => assert_eq!(spec.method, Method::Post),
                RequestShape::Query { .. } | RequestShape::PathSegment { .. } => {
                    assert_eq!(spec.method, Method::Get)
                }
            }
        }
    }

    #[test]
    fn test_no_duplicate_keys_and_leading_slashes() {
        let registry = ToolRegistry::builtin();
        assert_eq!(registry.len(), TOOL_SPECS.len(), "duplicate plugin key");

        for spec in TOOL_SPECS {
            assert!(spec.shape.path().starts_with('/'), "{}", spec.plugin_key);
        }
    }

    #[test]
    fn test_unknown_key_absent() {
        let registry = ToolRegistry::builtin();
        assert!(registry.get("nonexistent").is_none());
        assert!(!registry.has_plugin("nonexistent"));
    }

    #[test]
    fn test_list_keys_sorted() {
        let keys = ToolRegistry::builtin().list_keys();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
        assert!(keys.contains(&"weather-wizard"));
    }

    #[test]
    fn test_descriptors_cover_table() {
        let descriptors = ToolRegistry::builtin().descriptors();
        assert_eq!(descriptors.len(), TOOL_SPECS.len());

        let (key, descriptor) = descriptors[1];
        assert_eq!(key, "weather-wizard");
        assert_eq!(descriptor.name, "Weather Wizard");
        assert_eq!(descriptor.icon, "/assets/plugins/weather-wizard.svg");
    }
}
