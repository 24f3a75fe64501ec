//! Runtime configuration injected by the server that hosts the dashboard.
//!
//! ```html
//! <meta name="linkerd:path-prefix" content="/linkerd">
//! <meta name="linkerd:community-url" content="https://linkerd.io/dashboard/">
//! ```

pub const PATH_PREFIX_META: &str = "linkerd:path-prefix";
pub const COMMUNITY_URL_META: &str = "linkerd:community-url";
pub const DEFAULT_COMMUNITY_URL: &str = "https://linkerd.io/dashboard/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Prepended to every API path. Empty when served at the root.
    pub path_prefix: String,
    pub community_url: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            path_prefix: String::new(),
            community_url: DEFAULT_COMMUNITY_URL.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Build from a `name -> content` lookup. Blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();
        Self {
            path_prefix: read(PATH_PREFIX_META)
                .map(|p| p.trim_end_matches('/').to_string())
                .unwrap_or(defaults.path_prefix),
            community_url: read(COMMUNITY_URL_META).unwrap_or(defaults.community_url),
        }
    }

    /// Read the `<meta>` tags of the current document.
    pub fn from_document() -> Self {
        let config = Self::from_lookup(meta_content);
        tracing::debug!(
            path_prefix = %config.path_prefix,
            community_url = %config.community_url,
            "loaded dashboard config"
        );
        config
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}
