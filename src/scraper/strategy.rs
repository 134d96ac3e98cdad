use serde::{Deserialize, Serialize};

use crate::app::{KwError, Result};
use crate::domain::KeywordRow;

/// Selector contract for a keyword results table.
///
/// The target page is third-party markup, so the selectors live here as data
/// rather than inside the scrape routine. A page redesign means a new
/// strategy in the config file, not a code change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionStrategy {
    /// Name used in logs
    pub name: String,
    /// Element that holds every keyword row
    pub container_selector: String,
    /// One element per keyword, relative to the container
    pub row_selector: String,
    /// Cells within a row, in keyword/traffic/cpc order
    pub cell_selector: String,
}

impl Default for ExtractionStrategy {
    fn default() -> Self {
        Self::toolify_top_keywords()
    }
}

impl ExtractionStrategy {
    /// Layout of the Toolify "Top Keywords" traffic panel.
    pub fn toolify_top_keywords() -> Self {
        Self {
            name: "toolify-top-keywords".to_string(),
            container_selector: ".traffic-topKeywords".to_string(),
            row_selector: ".traffic-td".to_string(),
            cell_selector: ".traffic-tleft span".to_string(),
        }
    }

    /// Generate JavaScript that reports whether the results container exists.
    pub fn container_probe_script(&self) -> String {
        format!(
            "document.querySelector({}) !== null",
            js_string(&self.container_selector)
        )
    }

    /// Generate JavaScript to extract keyword rows from the page
    ///
    /// Evaluates to `null` when the container is missing, otherwise to an
    /// array of `{keyword, traffic, cpc}` objects in DOM order. Cells beyond
    /// the third are ignored and missing cells become empty strings.
    pub fn extraction_script(&self) -> String {
        let container = js_string(&self.container_selector);
        let row = js_string(&self.row_selector);
        let cell = js_string(&self.cell_selector);

        format!(
            r#"
            (() => {{
                const container = document.querySelector({container});
                if (!container) {{
                    return null;
                }}

                const rows = container.querySelectorAll({row});
                return Array.from(rows).map(row => {{
                    const cells = row.querySelectorAll({cell});
                    const text = (i) => {{
                        const el = cells[i];
                        return el && el.textContent ? el.textContent.trim() : '';
                    }};
                    return {{
                        keyword: text(0),
                        traffic: text(1),
                        cpc: text(2)
                    }};
                }});
            }})()
            "#
        )
    }

    /// Decode the value produced by [`extraction_script`](Self::extraction_script).
    ///
    /// `Ok(None)` means the container was gone by the time the script ran.
    pub fn rows_from_value(&self, value: serde_json::Value) -> Result<Option<Vec<KeywordRow>>> {
        if value.is_null() {
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| KwError::Script(format!("Unexpected extraction result: {}", e)))
    }
}

/// Quote a selector as a JavaScript string literal.
fn js_string(s: &str) -> String {
    // JSON string literals are valid JavaScript string literals
    serde_json::Value::String(s.to_string()).to_string()
}
