use crate::application::normalize::normalize;
use crate::application::prompt::{build_prompt, PromptInput};
use crate::config::ReporterConfig;
use crate::domain::entities::report_result::ReportResult;
use crate::domain::error::DomainError;
use crate::domain::ports::clock::Clock;
use crate::domain::ports::research_provider::{ResearchProvider, ResearchRequest};
use crate::domain::values::time_frame::TimeFrame;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::Instrument;

pub struct GenerateReportUseCase {
    provider: Arc<dyn ResearchProvider>,
    clock: Arc<dyn Clock>,
    config: ReporterConfig,
}

impl GenerateReportUseCase {
    pub fn new(
        provider: Arc<dyn ResearchProvider>,
        clock: Arc<dyn Clock>,
        config: ReporterConfig,
    ) -> Self {
        Self {
            provider,
            clock,
            config,
        }
    }

    /// Prompt that a request for these topics would send today.
    pub fn prompt(&self, topics: &[String], time_frame: TimeFrame) -> String {
        self.prompt_for(topics, time_frame, self.clock.today())
    }

    fn prompt_for(&self, topics: &[String], time_frame: TimeFrame, today: NaiveDate) -> String {
        build_prompt(&PromptInput {
            topics,
            time_frame,
            today,
            language: &self.config.language,
            max_items: self.config.max_items,
        })
    }

    /// Ask the provider for a trend report on `topics`.
    ///
    /// Topics are not validated here; an empty slice still sends a prompt.
    /// Fails with `Configuration` before any call when no key is set, and
    /// passes provider errors through untouched.
    pub async fn execute(
        &self,
        topics: &[String],
        time_frame: TimeFrame,
    ) -> Result<ReportResult, DomainError> {
        if self.config.api_key().is_none() {
            return Err(DomainError::Configuration(
                "API key is missing. Set TRENDPULSE_API_KEY or GEMINI_API_KEY".into(),
            ));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let span = tracing::info_span!("report", %id, provider = self.provider.name());

        async {
            let today = self.clock.today();
            let prompt = self.prompt_for(topics, time_frame, today);
            tracing::info!(topics = topics.len(), %time_frame, "requesting trend report");

            let request = ResearchRequest::json_with_search(prompt);
            let text = self.provider.generate(&request).await.map_err(|e| {
                tracing::error!(error = %e, "research provider call failed");
                e
            })?;

            let raw = text.unwrap_or_else(|| "[]".to_string());
            let items = normalize(&raw);
            tracing::info!(items = items.len(), "trend report ready");

            Ok::<_, DomainError>(ReportResult::new(
                id.clone(),
                topics.to_vec(),
                today,
                time_frame,
                items,
            ))
        }
        .instrument(span)
        .await
    }
}
