//! Dashboard configuration
//!
//! The serving backend can inject the API base URL via a `<meta>` tag:
//!
//! ```html
//! <meta name="appdeck:api-url" content="http://appdeck.local:8080">
//! ```
//!
//! Without an injected value the dashboard talks to its own origin.

/// Resolved dashboard configuration.
#[derive(Debug, Clone, Default)]
pub struct UiConfig {
    /// API base URL, without a trailing slash. Empty means unresolved.
    pub api_url: String,
}

impl UiConfig {
    /// Load configuration, in priority order:
    /// 1. `<meta name="appdeck:api-url">` tag (server-injected)
    /// 2. Current window origin
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(api_url) = get_meta_content(&document, "appdeck:api-url") {
                if !api_url.is_empty() {
                    config.api_url = api_url;
                }
            }
        }

        if config.api_url.is_empty() {
            config.api_url = web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_else(|| "http://localhost:8080".to_string());
        }

        config.api_url = config.api_url.trim_end_matches('/').to_string();
        config
    }
}

/// Get content from a `<meta name="...">` tag
fn get_meta_content(document: &web_sys::Document, name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|element| element.get_attribute("content"))
}
