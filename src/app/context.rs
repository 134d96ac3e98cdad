use std::path::Path;
use std::sync::Arc;

use crate::app::error::{KwError, Result};
use crate::config::Config;
use crate::scraper::{KeywordScraper, Scraper};

pub struct AppContext {
    pub config: Config,
    pub scraper: Arc<dyn Scraper>,
}

impl AppContext {
    /// Load configuration (from `config_path` or the default location) and
    /// wire up the Chrome-backed scraper.
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .map_err(|e| KwError::Config(e.to_string()))?;

        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Self {
        let scraper: Arc<dyn Scraper> = Arc::new(KeywordScraper::chrome(config.scraper.clone()));
        Self { config, scraper }
    }
}
