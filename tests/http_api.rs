use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use kwscout::app::{KwError, Result};
use kwscout::config::ServerConfig;
use kwscout::domain::KeywordRow;
use kwscout::scraper::Scraper;
use kwscout::server::KwServer;
use serde_json::{json, Value};
use tokio::sync::oneshot;

/// Answers by URL so one server can cover every response shape.
#[derive(Default)]
struct StubScraper {
    calls: AtomicUsize,
}

#[async_trait]
impl Scraper for StubScraper {
    async fn fetch_keywords(&self, url: &str) -> Result<Vec<KeywordRow>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match url {
            "https://example.com/ok" => Ok(vec![
                KeywordRow::new("seo tools", "10K", "1.20"),
                KeywordRow::new("keyword research", "5K", "0.80"),
            ]),
            "https://example.com/missing" => Err(KwError::ContainerNotFound),
            "https://example.com/empty" => Err(KwError::NoKeywords),
            _ => Err(KwError::Browser("crashed".into())),
        }
    }
}

struct TestServer {
    base: String,
    scraper: Arc<StubScraper>,
    stop: Option<oneshot::Sender<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let scraper = Arc::new(StubScraper::default());
        let config = ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        };
        let server = KwServer::new(config, scraper.clone());
        let listener = server.bind().await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let (stop, stopped) = oneshot::channel::<()>();
        tokio::spawn(async move {
            server
                .serve(listener, async {
                    let _ = stopped.await;
                })
                .await
                .unwrap();
        });

        Self {
            base,
            scraper,
            stop: Some(stop),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/fetch-keywords", self.base)
    }

    async fn post(&self, body: Value) -> (u16, Value) {
        let response = reqwest::Client::new()
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

#[tokio::test]
async fn test_success_body_shape() {
    let server = TestServer::start().await;
    let (status, body) = server.post(json!({"url": "https://example.com/ok"})).await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({"keywords": [
            {"keyword": "seo tools", "traffic": "10K", "cpc": "1.20"},
            {"keyword": "keyword research", "traffic": "5K", "cpc": "0.80"}
        ]})
    );
}

#[tokio::test]
async fn test_error_statuses() {
    let server = TestServer::start().await;

    let (status, body) = server.post(json!({"url": "https://example.com/missing"})).await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({"error": "Keywords data not found on the page"}));

    let (status, body) = server.post(json!({"url": "https://example.com/empty"})).await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({"error": "No keywords data found"}));

    let (status, body) = server.post(json!({"url": "https://example.com/boom"})).await;
    assert_eq!(status, 500);
    assert_eq!(
        body,
        json!({
            "error": "An error occurred while fetching keywords",
            "details": "Browser error: crashed"
        })
    );
}

#[tokio::test]
async fn test_missing_url_skips_scraper() {
    let server = TestServer::start().await;
    let (status, body) = server.post(json!({})).await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": "No URL provided"}));
    assert_eq!(server.scraper.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_get_is_method_not_allowed() {
    let server = TestServer::start().await;
    let response = reqwest::get(server.endpoint()).await.unwrap();

    assert_eq!(response.status().as_u16(), 405);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Method Not Allowed"}));
    assert_eq!(server.scraper.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_form_is_served() {
    let server = TestServer::start().await;
    let html = reqwest::get(format!("{}/", server.base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains("keyword-form"));
}
