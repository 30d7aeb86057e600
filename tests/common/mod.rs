//! Shared test helpers.
#![allow(dead_code)]

use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use trendpulse::config::ReporterConfig;
use trendpulse::domain::error::DomainError;
use trendpulse::domain::ports::clock::Clock;
use trendpulse::domain::ports::link_checker::LinkChecker;
use trendpulse::domain::ports::research_provider::{ResearchProvider, ResearchRequest};
use trendpulse::TrendPulse;

pub enum Reply {
    Text(String),
    Empty,
    Fail(String),
}

/// Provider that records every request and answers with a canned reply.
pub struct SpyProvider {
    reply: Reply,
    requests: Mutex<Vec<ResearchRequest>>,
}

impl SpyProvider {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn text(text: &str) -> Arc<Self> {
        Self::new(Reply::Text(text.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ResearchRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait::async_trait]
impl ResearchProvider for SpyProvider {
    async fn generate(&self, request: &ResearchRequest) -> Result<Option<String>, DomainError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Text(t) => Ok(Some(t.clone())),
            Reply::Empty => Ok(None),
            Reply::Fail(msg) => Err(DomainError::ExternalService(msg.clone())),
        }
    }

    fn name(&self) -> &str {
        "spy"
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Link checker that reports the listed URLs as dead.
pub struct StubLinkChecker {
    dead: HashSet<String>,
    checked: Mutex<Vec<String>>,
}

impl StubLinkChecker {
    pub fn new(dead: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            dead: dead.iter().map(|s| s.to_string()).collect(),
            checked: Mutex::new(Vec::new()),
        })
    }

    pub fn checked(&self) -> Vec<String> {
        self.checked.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LinkChecker for StubLinkChecker {
    async fn is_alive(&self, url: &str) -> bool {
        self.checked.lock().unwrap().push(url.to_string());
        !self.dead.contains(url)
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn setup_with(config: ReporterConfig, provider: Arc<SpyProvider>) -> TrendPulse {
    TrendPulse::with_providers(
        config,
        provider,
        Arc::new(FixedClock(today())),
        StubLinkChecker::new(&[]),
    )
}

pub fn setup(provider: Arc<SpyProvider>) -> TrendPulse {
    setup_with(ReporterConfig::with_api_key("test-key"), provider)
}

pub fn topics(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub const VALID_ITEMS: &str = r#"[
  {
    "title": "Bio-based resin shells go mainstream",
    "url": "https://www.example-design.com/news/bio-resin.html",
    "source": "Example Design",
    "date": "2026-10-14",
    "summary": "Several phone makers now ship shells molded from castor-oil resin.",
    "tags": ["CMF", "sustainability"]
  },
  {
    "title": "Micro-textured aluminium",
    "url": "https://tech.example.org/article/micro-texture",
    "source": "Example Tech",
    "date": "2026-10-12",
    "summary": "Laser micro-texturing gives aluminium a soft, paper-like feel.",
    "tags": []
  }
]"#;
