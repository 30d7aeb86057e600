pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::generate_report::GenerateReportUseCase;
use crate::application::normalize::normalize;
use crate::application::verify_links::VerifyLinksUseCase;
use crate::config::ReporterConfig;
use crate::domain::entities::report_item::ReportItem;
use crate::domain::entities::report_result::ReportResult;
use crate::domain::error::DomainError;
use crate::domain::ports::clock::Clock;
use crate::domain::ports::link_checker::LinkChecker;
use crate::domain::ports::research_provider::ResearchProvider;
use crate::domain::values::time_frame::TimeFrame;
use crate::domain::values::trend_tab::{Strategy, TrendTab};
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::http::link_checker::HttpLinkChecker;
use crate::infrastructure::providers::gemini::GeminiProvider;
use std::sync::Arc;

pub struct TrendPulse {
    generate_uc: GenerateReportUseCase,
    verify_links_uc: VerifyLinksUseCase,
}

impl TrendPulse {
    /// Wire the Gemini provider, the system clock and the HTTP link checker.
    pub fn new(config: ReporterConfig) -> Self {
        let provider: Arc<dyn ResearchProvider> = Arc::new(GeminiProvider::from_config(&config));
        Self::with_providers(config, provider, Arc::new(SystemClock), Arc::new(HttpLinkChecker::new()))
    }

    pub fn with_providers(
        config: ReporterConfig,
        provider: Arc<dyn ResearchProvider>,
        clock: Arc<dyn Clock>,
        link_checker: Arc<dyn LinkChecker>,
    ) -> Self {
        Self {
            generate_uc: GenerateReportUseCase::new(provider, clock, config),
            verify_links_uc: VerifyLinksUseCase::new(link_checker),
        }
    }

    pub async fn generate_trend_report(
        &self,
        topics: &[String],
        time_frame: TimeFrame,
    ) -> Result<ReportResult, DomainError> {
        self.generate_uc.execute(topics, time_frame).await
    }

    /// The prompt a report request would send, without sending it.
    pub fn prompt(&self, topics: &[String], time_frame: TimeFrame) -> String {
        self.generate_uc.prompt(topics, time_frame)
    }

    /// Remove items with dead links. Returns how many were removed.
    pub async fn verify_links(&self, report: &mut ReportResult) -> usize {
        self.verify_links_uc.execute(report).await
    }

    pub fn normalize(raw: &str) -> Vec<ReportItem> {
        normalize(raw)
    }

    pub fn strategies() -> Vec<(TrendTab, Strategy)> {
        TrendTab::ALL.iter().map(|tab| (*tab, tab.strategy())).collect()
    }
}
