use crate::domain::ports::link_checker::LinkChecker;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// HEAD-request link checker. Only a 404 marks a link dead.
///
/// Sites behind bot protection often answer 403 for pages that exist, and
/// strict firewalls drop HEAD entirely, so both count as alive.
pub struct HttpLinkChecker {
    client: Client,
}

impl HttpLinkChecker {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(5))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent("TrendPulse/0.1")
                .timeout(timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()
                .unwrap_or_default(),
        }
    }
}

impl Default for HttpLinkChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LinkChecker for HttpLinkChecker {
    async fn is_alive(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(resp) => resp.status() != StatusCode::NOT_FOUND,
            Err(e) => {
                tracing::debug!(%url, error = %e, "link check failed, keeping link");
                true
            }
        }
    }
}
