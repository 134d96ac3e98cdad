//! Scripted browser for tests; no Chrome required.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::app::{KwError, Result};
use crate::scraper::keywords::IDLE_PROBE_SCRIPT;
use crate::scraper::{BrowserRuntime, BrowserSession};

/// How the fake page behaves.
#[derive(Debug, Clone)]
pub struct FakePage {
    pub launch_error: Option<String>,
    pub goto_error: Option<String>,
    pub close_error: Option<String>,
    /// Container probes answered `false` before the container shows up
    pub container_after_probes: usize,
    /// `false` means the container never renders
    pub has_container: bool,
    /// Zero-based container checks that fail like a destroyed execution context
    pub failing_checks: Vec<usize>,
    /// Answers to the idle check in order; the last one repeats.
    /// Empty means the page is idle from the start.
    pub idle_snapshots: Vec<Value>,
    /// Value returned by the extraction script
    pub rows: Value,
}

impl FakePage {
    pub fn with_rows(rows: Value) -> Self {
        Self {
            launch_error: None,
            goto_error: None,
            close_error: None,
            container_after_probes: 0,
            has_container: true,
            failing_checks: Vec::new(),
            idle_snapshots: Vec::new(),
            rows,
        }
    }

    pub fn without_container() -> Self {
        Self {
            has_container: false,
            ..Self::with_rows(Value::Null)
        }
    }
}

#[derive(Default)]
struct Counters {
    launches: AtomicUsize,
    closes: AtomicUsize,
    probes: AtomicUsize,
    idle_checks: AtomicUsize,
    extractions: AtomicUsize,
    visited: Mutex<Vec<String>>,
}

#[derive(Clone)]
pub struct FakeRuntime {
    page: FakePage,
    counters: Arc<Counters>,
}

impl FakeRuntime {
    pub fn new(page: FakePage) -> Self {
        Self {
            page,
            counters: Arc::new(Counters::default()),
        }
    }

    pub fn launches(&self) -> usize {
        self.counters.launches.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.counters.closes.load(Ordering::SeqCst)
    }

    pub fn extractions(&self) -> usize {
        self.counters.extractions.load(Ordering::SeqCst)
    }

    pub fn idle_checks(&self) -> usize {
        self.counters.idle_checks.load(Ordering::SeqCst)
    }

    pub fn visited(&self) -> Vec<String> {
        self.counters.visited.lock().unwrap().clone()
    }
}

pub struct FakeSession {
    page: FakePage,
    counters: Arc<Counters>,
    closed: bool,
}

#[async_trait]
impl BrowserRuntime for FakeRuntime {
    type Session = FakeSession;

    async fn launch(&self) -> Result<FakeSession> {
        if let Some(ref e) = self.page.launch_error {
            return Err(KwError::Browser(e.clone()));
        }
        self.counters.launches.fetch_add(1, Ordering::SeqCst);
        Ok(FakeSession {
            page: self.page.clone(),
            counters: self.counters.clone(),
            closed: false,
        })
    }
}

#[async_trait]
impl BrowserSession for FakeSession {
    async fn open_page(&mut self) -> Result<()> {
        Ok(())
    }

    async fn goto(&mut self, url: &str) -> Result<()> {
        self.counters.visited.lock().unwrap().push(url.to_string());
        match self.page.goto_error {
            Some(ref e) => Err(KwError::Navigation(e.clone())),
            None => Ok(()),
        }
    }

    async fn evaluate(&mut self, script: &str) -> Result<Value> {
        if script == IDLE_PROBE_SCRIPT {
            let n = self.counters.idle_checks.fetch_add(1, Ordering::SeqCst);
            let snapshots = &self.page.idle_snapshots;
            return Ok(match snapshots.get(n).or(snapshots.last()) {
                Some(snapshot) => snapshot.clone(),
                None => json!({"ready": "complete", "resources": 3}),
            });
        }
        if script.contains("querySelectorAll") {
            self.counters.extractions.fetch_add(1, Ordering::SeqCst);
            return Ok(self.page.rows.clone());
        }
        let probes = self.counters.probes.fetch_add(1, Ordering::SeqCst);
        if self.page.failing_checks.contains(&probes) {
            return Err(KwError::Script(
                "Execution context was destroyed".to_string(),
            ));
        }
        Ok(Value::Bool(
            self.page.has_container && probes >= self.page.container_after_probes,
        ))
    }

    async fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.counters.closes.fetch_add(1, Ordering::SeqCst);
        match self.page.close_error {
            Some(ref e) => Err(KwError::Browser(e.clone())),
            None => Ok(()),
        }
    }
}
