use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::app::{KwError, Result};
use crate::scraper::config::ScraperConfig;
use crate::scraper::{BrowserRuntime, BrowserSession};

/// Launches a private headless Chrome per session using chromiumoxide
#[derive(Debug, Clone)]
pub struct ChromeRuntime {
    config: ScraperConfig,
}

impl ChromeRuntime {
    pub fn new(config: ScraperConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl BrowserRuntime for ChromeRuntime {
    type Session = ChromeSession;

    async fn launch(&self) -> Result<ChromeSession> {
        // Separate profile per launch so concurrent browsers never share state
        let profile = tempfile::Builder::new()
            .prefix("kwscout-chrome-")
            .tempdir()?;

        let mut builder = BrowserConfig::builder()
            .user_data_dir(profile.path())
            .request_timeout(self.config.navigation_timeout())
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-software-rasterizer");

        if !self.config.headless {
            builder = builder.with_head();
        }

        let browser_config = builder
            .build()
            .map_err(|e| KwError::Browser(format!("Failed to build browser config: {}", e)))?;

        let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
            KwError::Browser(format!(
                "Failed to launch browser: {}. Is Chrome or Chromium installed and in PATH?",
                e
            ))
        })?;

        // Spawn the browser handler
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Browser handler error: {}", e);
                }
            }
        });

        Ok(ChromeSession {
            browser: Some(browser),
            page: None,
            user_agent: self.config.user_agent.clone(),
            handler,
            _profile: profile,
        })
    }
}

/// One running Chrome process and its working page.
///
/// Dropping a session that was never closed kills the process.
pub struct ChromeSession {
    browser: Option<Browser>,
    page: Option<Page>,
    user_agent: Option<String>,
    handler: JoinHandle<()>,
    // Removed from disk after the browser is gone
    _profile: TempDir,
}

impl ChromeSession {
    fn page(&self) -> Result<&Page> {
        self.page
            .as_ref()
            .ok_or_else(|| KwError::Browser("No page open".to_string()))
    }
}

#[async_trait]
impl BrowserSession for ChromeSession {
    async fn open_page(&mut self) -> Result<()> {
        let browser = self
            .browser
            .as_ref()
            .ok_or_else(|| KwError::Browser("Browser already closed".to_string()))?;

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| KwError::Browser(format!("Failed to create page: {}", e)))?;

        // Set user agent if configured
        if let Some(ref ua) = self.user_agent {
            page.set_user_agent(ua)
                .await
                .map_err(|e| KwError::Browser(format!("Failed to set user agent: {}", e)))?;
        }

        self.page = Some(page);
        Ok(())
    }

    async fn goto(&mut self, url: &str) -> Result<()> {
        self.page()?
            .goto(url)
            .await
            .map_err(|e| KwError::Navigation(e.to_string()))?;
        Ok(())
    }

    async fn evaluate(&mut self, script: &str) -> Result<serde_json::Value> {
        let result = self
            .page()?
            .evaluate(script.to_string())
            .await
            .map_err(|e| KwError::Script(e.to_string()))?;

        // `null` and `undefined` come back without a value
        Ok(result.value().cloned().unwrap_or(serde_json::Value::Null))
    }

    async fn close(&mut self) -> Result<()> {
        let Some(mut browser) = self.browser.take() else {
            return Ok(());
        };
        self.page = None;

        let closed = browser.close().await;
        if closed.is_err() {
            let _ = browser.kill().await;
        }
        if let Err(e) = browser.wait().await {
            debug!("Waiting for browser exit failed: {}", e);
        }
        self.handler.abort();

        closed
            .map(|_| ())
            .map_err(|e| KwError::Browser(format!("Failed to close browser: {}", e)))
    }
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        if let Some(browser) = self.browser.take() {
            warn!("Browser session dropped without close, killing process");
            // chromiumoxide kills the child process when the Browser drops
            drop(browser);
        }
        self.handler.abort();
    }
}
