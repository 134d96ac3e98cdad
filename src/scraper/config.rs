use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::scraper::ExtractionStrategy;

/// Configuration for the keyword scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Whether to run the browser in headless mode (default: true)
    pub headless: bool,

    /// How long to wait for the results container to render, in seconds (default: 30)
    pub selector_timeout_secs: u64,

    /// Upper bound on the wait-until-idle phase after navigation, in seconds (default: 30)
    pub navigation_timeout_secs: u64,

    /// Network is considered idle once nothing new has loaded for this long (default: 500)
    pub idle_window_ms: u64,

    /// Polling interval for the idle and selector waits in milliseconds (default: 100)
    pub idle_poll_ms: u64,

    /// User agent string to use
    pub user_agent: Option<String>,

    /// Selector contract for the results table
    pub strategy: ExtractionStrategy,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            headless: true,
            selector_timeout_secs: 30,
            navigation_timeout_secs: 30,
            idle_window_ms: 500,
            idle_poll_ms: 100,
            user_agent: Some(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                    .to_string(),
            ),
            strategy: ExtractionStrategy::default(),
        }
    }
}

impl ScraperConfig {
    /// Get the results container timeout as a Duration
    pub fn selector_timeout(&self) -> Duration {
        Duration::from_secs(self.selector_timeout_secs)
    }

    /// Get the navigation idle bound as a Duration
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    pub fn idle_window(&self) -> Duration {
        Duration::from_millis(self.idle_window_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        // A zero interval would spin the polling loops
        Duration::from_millis(self.idle_poll_ms.max(10))
    }
}
