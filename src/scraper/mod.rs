//! Headless-browser scraping of "top keywords" tables.
//!
//! # Architecture
//!
//! ```text
//! URL → BrowserRuntime::launch → open page → navigate + idle wait
//!     → wait for container → extraction script → Vec<KeywordRow>
//! ```
//!
//! The browser is reached only through [`BrowserRuntime`] and
//! [`BrowserSession`]; [`ChromeRuntime`] is the chromiumoxide implementation.
//! [`KeywordScraper`] owns the scrape sequence and the guarantee that every
//! launched browser is closed.
//!
//! # Usage
//!
//! ```rust,ignore
//! use kwscout::scraper::{KeywordScraper, Scraper, ScraperConfig};
//!
//! let scraper = KeywordScraper::chrome(ScraperConfig::default());
//! let rows = scraper.fetch_keywords("https://www.toolify.ai/tool/example").await?;
//! ```

mod chrome;
mod config;
mod keywords;
mod strategy;

#[cfg(test)]
pub(crate) mod fake;

pub use chrome::{ChromeRuntime, ChromeSession};
pub use config::ScraperConfig;
pub use keywords::KeywordScraper;
pub use strategy::ExtractionStrategy;

use crate::app::Result;
use crate::domain::KeywordRow;
use async_trait::async_trait;

/// Anything that can turn a page URL into keyword rows.
#[async_trait]
pub trait Scraper: Send + Sync {
    /// Scrape the keyword table from `url`, in page order.
    async fn fetch_keywords(&self, url: &str) -> Result<Vec<KeywordRow>>;
}

/// Launches isolated browser instances, one per scrape.
#[async_trait]
pub trait BrowserRuntime: Send + Sync {
    type Session: BrowserSession;

    async fn launch(&self) -> Result<Self::Session>;
}

/// A running browser with a single working page.
///
/// `close` must be safe to call more than once; only the first call does
/// any work.
#[async_trait]
pub trait BrowserSession: Send {
    /// Open the page that later calls operate on
    async fn open_page(&mut self) -> Result<()>;

    /// Navigate the page and wait for the load event
    async fn goto(&mut self, url: &str) -> Result<()>;

    /// Evaluate a script in the page and return its JSON value
    async fn evaluate(&mut self, script: &str) -> Result<serde_json::Value>;

    /// Shut the browser down
    async fn close(&mut self) -> Result<()>;
}
