//! Request builder — one configured HTTP call per tool invocation.
//!
//! Resolves the tool's base URL and auth descriptor from the [`Config`]
//! snapshot, assembles the request described by a [`ToolSpec`], performs a
//! single attempt, and normalizes every failure into
//! [`Error::ToolExecution`] tagged with the tool name. No retry, no
//! timeout policy beyond the HTTP client's default.

use crate::tools::registry::{Method, RequestShape, ToolSpec};
use crate::types::{AuthConfig, Config, Error, Result};
use tracing::error;
use url::Url;

/// Thin wrapper over a shared [`reqwest::Client`]. Cloning is cheap and
/// shares the underlying connection pool.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Build the full request URL for `spec` + `input` against a base URL.
    ///
    /// Base URL and endpoint path are concatenated verbatim (no slash
    /// normalization; the dispatch table supplies leading slashes). Only the
    /// input itself is encoded, as a query pair or path segment.
    fn build_url(base: &str, spec: &ToolSpec, input: &str) -> Result<Url> {
        let raw = format!("{}{}", base, spec.shape.path());
        let mut url = Url::parse(&raw).map_err(|err| {
            Error::tool_execution(spec.plugin_key, format!("invalid request URL {raw}: {err}"))
        })?;

        match spec.shape {
            RequestShape::Query { key, .. } => {
                url.query_pairs_mut().append_pair(key, input);
            }
            RequestShape::PathSegment { .. } => {
                url.path_segments_mut()
                    .map_err(|()| {
                        Error::tool_execution(
                            spec.plugin_key,
                            format!("URL cannot carry a path segment: {raw}"),
                        )
                    })?
                    .push(input);
            }
            RequestShape::Json { .. } => {}
        }

        Ok(url)
    }

    /// Execute one tool request and return the response body unmodified.
    ///
    /// A missing API URL fails with [`Error::Configuration`] before any
    /// network activity. Transport failures and non-2xx responses are logged
    /// once here, then wrapped with the tool name.
    pub async fn execute(
        &self,
        config: &Config,
        spec: &ToolSpec,
        input: &str,
    ) -> Result<serde_json::Value> {
        let tool = spec.plugin_key;

        let base = config.api_url(tool).ok_or_else(|| {
            error!(%tool, "no API URL configured");
            Error::configuration(tool)
        })?;

        let url = Self::build_url(base, spec, input)?;

        let mut request = match spec.method {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
        };

        if let RequestShape::Json { key, .. } = spec.shape {
            request = request.json(&serde_json::json!({ key: input }));
        }

        request = match config.auth(tool) {
            AuthConfig::None => request,
            AuthConfig::Bearer { token } => request.bearer_auth(token),
            AuthConfig::ApiKey { header, key } => request.header(header.as_str(), key.as_str()),
        };

        match Self::send(request).await {
            Ok(body) => Ok(body),
            Err(message) => {
                error!(%tool, %message, "API request failed");
                Err(Error::tool_execution(tool, message))
            }
        }
    }

    /// Single attempt. Failures come back as the original message; success
    /// as the body, parsed as JSON when it parses and as a raw string
    /// otherwise.
    async fn send(request: reqwest::RequestBuilder) -> std::result::Result<serde_json::Value, String> {
        let response = request.send().await.map_err(|err| err.to_string())?;

        let status = response.status();
        let text = response.text().await.map_err(|err| err.to_string())?;
        if !status.is_success() {
            return Err(format!("API returned {status}: {text}"));
        }

        Ok(serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::registry::ToolRegistry;

    fn spec(plugin_key: &str) -> &'static ToolSpec {
        ToolRegistry::builtin()
            .get(plugin_key)
            .unwrap_or_else(|| panic!("missing: {plugin_key}"))
    }

    #[test]
    fn test_query_url() {
        let url =
            ApiClient::build_url("https://x.test", spec("weather-wizard"), "Paris").unwrap();
        assert_eq!(url.as_str(), "https://x.test/forecast?location=Paris");
    }

    #[test]
    fn test_query_input_is_encoded() {
        let url =
            ApiClient::build_url("https://x.test", spec("web-search-pro"), "a&b=c").unwrap();
        assert_eq!(url.as_str(), "https://x.test/search?q=a%26b%3Dc");
    }

    #[test]
    fn test_path_segment_url() {
        let url = ApiClient::build_url("https://x.test", spec("stock-market"), "AAPL").unwrap();
        assert_eq!(url.as_str(), "https://x.test/quote/AAPL");
    }

    #[test]
    fn test_path_segment_input_is_encoded() {
        let url = ApiClient::build_url("https://x.test", spec("stock-market"), "a/b").unwrap();
        assert_eq!(url.as_str(), "https://x.test/quote/a%2Fb");
    }

    #[test]
    fn test_json_shape_has_no_query() {
        let url = ApiClient::build_url("https://x.test", spec("pdf-reader"), "doc").unwrap();
        assert_eq!(url.as_str(), "https://x.test/analyze");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_base_and_path_concatenated_verbatim() {
        // A trailing slash on the base is not normalized away.
        let url = ApiClient::build_url("https://x.test/", spec("pdf-reader"), "doc").unwrap();
        assert_eq!(url.path(), "//analyze");
    }

    #[test]
    fn test_unparseable_base_is_tool_execution_error() {
        let err = ApiClient::build_url("not a url", spec("pdf-reader"), "doc").unwrap_err();
        assert!(matches!(err, Error::ToolExecution { .. }));
        assert!(err.to_string().contains("pdf-reader"));
    }
}
