use shared::table::{TableConfig, DEFAULT_PAGE_SIZE};

pub struct Config;

impl Config {
    /// Prefix for every API path. Empty means relative URLs, which works both
    /// behind the Trunk dev proxy and behind nginx in production. Set
    /// `API_BASE_URL` at build time to call a backend on another origin.
    pub fn api_base_url() -> String {
        option_env!("API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_default()
    }

    pub fn page_size() -> usize {
        option_env!("ENTRY_PAGE_SIZE")
            .and_then(|v| v.parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn table() -> TableConfig {
        TableConfig {
            page_size: Self::page_size(),
        }
    }

    /// Client-side limit for a single request before it is reported as a network failure.
    pub fn request_timeout_ms() -> u32 {
        option_env!("REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(15_000)
    }

    /// The delete action on dashboard rows is off unless the build opts in.
    pub fn entry_delete_enabled() -> bool {
        matches!(option_env!("ENABLE_ENTRY_DELETE"), Some("1") | Some("true"))
    }
}
