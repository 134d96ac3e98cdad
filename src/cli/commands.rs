use std::sync::Arc;

use tracing::warn;

use crate::app::{AppContext, KwError, Result};
use crate::domain::KeywordRow;
use crate::server::handlers::FetchResponse;
use crate::server::{shutdown_signal, KwServer};

pub async fn serve(
    ctx: &AppContext,
    host: Option<String>,
    port: Option<u16>,
    open_browser: bool,
) -> Result<()> {
    let mut config = ctx.config.server.clone();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let server = KwServer::new(config, Arc::clone(&ctx.scraper));
    let listener = server.bind().await?;
    let url = format!("http://{}/", listener.local_addr()?);
    println!("Serving on {}", url);

    if open_browser {
        if let Err(e) = open::that(&url) {
            warn!("Failed to open browser: {}", e);
        }
    }

    server.serve(listener, shutdown_signal()).await
}

pub async fn fetch(ctx: &AppContext, url: &str, json: bool) -> Result<()> {
    let keywords = ctx.scraper.fetch_keywords(url).await?;

    if json {
        let body = serde_json::to_string_pretty(&FetchResponse { keywords })
            .map_err(|e| KwError::Other(e.to_string()))?;
        println!("{}", body);
    } else {
        print!("{}", render_table(&keywords));
    }

    Ok(())
}

/// Left-aligned columns sized to the widest cell.
fn render_table(rows: &[KeywordRow]) -> String {
    const HEADERS: [&str; 3] = ["KEYWORD", "TRAFFIC", "CPC"];

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip([&row.keyword, &row.traffic, &row.cpc]) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 3]| {
        format!(
            "{:<w0$}  {:<w1$}  {}\n",
            cells[0],
            cells[1],
            cells[2],
            w0 = widths[0],
            w1 = widths[1]
        )
    };

    let mut out = line(HEADERS);
    for row in rows {
        out.push_str(&line([row.keyword.as_str(), row.traffic.as_str(), row.cpc.as_str()]));
    }
    out
}
