//! Diagnostic-logging integration test.
//!
//! Relocated from `src/tools/gateway.rs` unit tests: `#[tracing_test::traced_test]`
//! installs a process-global tracing subscriber and requires sole ownership of
//! it, so it must not share a test binary with any other test that installs a
//! global subscriber (e.g. `observability::init_tracing`). Its own integration
//! binary gives it that isolation. Uses only the public API.

use toolgate::types::{PluginConfig, ToolConfig};
use toolgate::{Config, Error, Gateway};

#[tokio::test]
#[tracing_test::traced_test]
async fn test_request_failure_emits_one_diagnostic_line() {
    // Bind then drop to get a port with nothing listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut config = Config::default();
    config
        .plugins
        .insert("pdf-reader".to_string(), PluginConfig::default());
    config.tools.insert(
        "pdf-reader".to_string(),
        ToolConfig {
            api_url: Some(format!("http://{addr}")),
            auth: Default::default(),
        },
    );
    let gateway = Gateway::new(config);

    let err = gateway.invoke("pdf-reader", "doc text").await.unwrap_err();
    assert!(matches!(err, Error::ToolExecution { .. }));
    assert!(err.to_string().contains("pdf-reader"));

    assert!(logs_contain("API request failed"));
    assert!(logs_contain("pdf-reader"));
    // Logged once at the point of detection, not re-logged on the way up.
    logs_assert(|lines: &[&str]| {
        match lines.iter().filter(|l| l.contains("API request failed")).count() {
            1 => Ok(()),
            n => Err(format!("expected one diagnostic line, got {n}")),
        }
    });
}
