//! # kwscout
//!
//! Scrapes "top keywords" tables (keyword, traffic, CPC) from third-party
//! pages with headless Chrome and serves them to a small web form.
//!
//! ## Architecture
//!
//! ```text
//! Web form → POST /api/fetch-keywords → KeywordScraper → Chrome → DOM rows → JSON
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the form on http://127.0.0.1:3000/
//! kwscout serve --open
//!
//! # One-off scrape in the terminal
//! kwscout fetch https://www.toolify.ai/tool/example
//! ```

/// Application context and error handling.
///
/// [`KwError`](app::KwError) carries the validation / not-found / unexpected
/// taxonomy that the HTTP layer turns into status codes.
pub mod app;

/// Configuration management.
///
/// Loads from `~/.config/kwscout/config.toml`, supporting:
/// - Server bind address
/// - Browser timeouts and idle detection
/// - The selector contract for the keyword table
pub mod config;

/// Command-line interface using clap.
///
/// - `serve` - Run the web form and API
/// - `fetch <url>` - Scrape one page and print the table
pub mod cli;

/// Core domain model: [`KeywordRow`](domain::KeywordRow).
pub mod domain;

/// Headless-browser scraping.
///
/// - [`KeywordScraper`](scraper::KeywordScraper): the scrape sequence
/// - [`ChromeRuntime`](scraper::ChromeRuntime): chromiumoxide-backed browser
/// - [`ExtractionStrategy`](scraper::ExtractionStrategy): table selectors
pub mod scraper;

/// HTTP server built with axum.
pub mod server;
