// Configuration type definitions

use serde::Deserialize;

/// GitHub allows at most 100 results per page
pub const MAX_PAGE_SIZE: u8 = 100;

/// Single characters and the empty reset value never reach the API
pub const MIN_QUERY_LENGTH: usize = 2;

/// Search and suggestion settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before a typed value is looked up
    pub debounce_ms: u64,
    /// Values with fewer characters never reach the API
    pub min_query_length: usize,
    /// Page size of suggestion lookups
    pub suggestion_limit: u32,
    /// Page size of committed searches
    pub results_limit: u32,
    pub api_base_url: String,
    pub request_timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: 500,
            min_query_length: 2,
            suggestion_limit: 8,
            results_limit: 30,
            api_base_url: "https://api.github.com".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

impl SearchConfig {
    /// Configured minimum, raised to `MIN_QUERY_LENGTH` if set lower
    pub fn min_query_length(&self) -> usize {
        self.min_query_length.max(MIN_QUERY_LENGTH)
    }

    pub fn suggestion_page_size(&self) -> u8 {
        clamp_page_size(self.suggestion_limit)
    }

    pub fn results_page_size(&self) -> u8 {
        clamp_page_size(self.results_limit)
    }
}

fn clamp_page_size(limit: u32) -> u8 {
    limit.clamp(1, MAX_PAGE_SIZE as u32) as u8
}

/// Alert popup configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    pub timeout_ms: u64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        AlertConfig { timeout_ms: 5_000 }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub alerts: AlertConfig,
}
