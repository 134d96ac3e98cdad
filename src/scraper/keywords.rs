use async_trait::async_trait;
use tokio::time::{sleep, timeout, Instant};
use tracing::{debug, info, warn};

use crate::app::{KwError, Result};
use crate::domain::KeywordRow;
use crate::scraper::chrome::ChromeRuntime;
use crate::scraper::{BrowserRuntime, BrowserSession, ScraperConfig, Scraper};

/// Reports document readiness and how many resources have finished loading.
pub(crate) const IDLE_PROBE_SCRIPT: &str = "({ \
    ready: document.readyState, \
    resources: performance.getEntriesByType('resource').length \
})";

/// Runs the scrape sequence against a fresh browser for every call.
pub struct KeywordScraper<R: BrowserRuntime> {
    runtime: R,
    config: ScraperConfig,
}

impl KeywordScraper<ChromeRuntime> {
    /// Create a scraper backed by headless Chrome
    pub fn chrome(config: ScraperConfig) -> Self {
        Self::new(ChromeRuntime::new(config.clone()), config)
    }
}

impl<R: BrowserRuntime> KeywordScraper<R> {
    pub fn new(runtime: R, config: ScraperConfig) -> Self {
        Self { runtime, config }
    }

    /// Drive an already launched session through the scrape sequence.
    ///
    /// Never closes the session; the caller owns that.
    async fn scrape_with(&self, session: &mut R::Session, url: &str) -> Result<Vec<KeywordRow>> {
        let strategy = &self.config.strategy;

        session.open_page().await?;

        info!("Navigating to URL: {}", url);
        session.goto(url).await?;
        self.wait_for_network_idle(session).await;

        if !self.wait_for_container(session).await {
            warn!(
                "{} not found after {}s",
                strategy.container_selector, self.config.selector_timeout_secs
            );
            return Err(KwError::ContainerNotFound);
        }

        info!("Page loaded, extracting keywords ({})", strategy.name);
        let value = session.evaluate(&strategy.extraction_script()).await?;

        match strategy.rows_from_value(value)? {
            Some(rows) if !rows.is_empty() => {
                info!("Keywords found: {}", rows.len());
                Ok(rows)
            }
            _ => {
                warn!("No keywords data found at {}", url);
                Err(KwError::NoKeywords)
            }
        }
    }

    /// Wait until the page stops loading new resources.
    ///
    /// Best effort: hitting the navigation bound is not an error, the scrape
    /// continues and the container wait decides the outcome.
    async fn wait_for_network_idle(&self, session: &mut R::Session) {
        let deadline = Instant::now() + self.config.navigation_timeout();
        let window = self.config.idle_window();
        let poll = self.config.poll_interval();

        let mut last_count: Option<u64> = None;
        let mut stable_since = Instant::now();

        while Instant::now() < deadline {
            match session.evaluate(IDLE_PROBE_SCRIPT).await {
                Ok(snapshot) => {
                    let ready = snapshot["ready"].as_str() == Some("complete");
                    let count = snapshot["resources"].as_u64();

                    if !ready || count != last_count {
                        last_count = count;
                        stable_since = Instant::now();
                    } else if stable_since.elapsed() >= window {
                        debug!("Network idle reached ({:?} resources)", count);
                        return;
                    }
                }
                // Execution contexts come and go while the page redirects
                Err(e) => debug!("Idle probe failed: {}", e),
            }
            sleep(poll).await;
        }

        debug!(
            "Network idle not reached within {}s, continuing",
            self.config.navigation_timeout_secs
        );
    }

    /// Poll for the results container; `false` on timeout.
    async fn wait_for_container(&self, session: &mut R::Session) -> bool {
        let probe = self.config.strategy.container_probe_script();
        let poll = self.config.poll_interval();

        let found = timeout(self.config.selector_timeout(), async {
            loop {
                match session.evaluate(&probe).await {
                    Ok(value) if value.as_bool() == Some(true) => return,
                    Ok(_) => {}
                    // A late redirect tears down the context; keep waiting
                    Err(e) => debug!("Container check failed: {}", e),
                }
                sleep(poll).await;
            }
        })
        .await;

        found.is_ok()
    }
}

#[async_trait]
impl<R: BrowserRuntime> Scraper for KeywordScraper<R> {
    async fn fetch_keywords(&self, url: &str) -> Result<Vec<KeywordRow>> {
        let url = url.trim();
        if url.is_empty() {
            return Err(KwError::MissingUrl);
        }

        info!("Launching browser...");
        let mut session = self.runtime.launch().await?;

        let outcome = self.scrape_with(&mut session, url).await;

        info!("Closing browser...");
        if let Err(e) = session.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }

        outcome
    }
}
