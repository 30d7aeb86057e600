use crate::domain::entities::report_result::ReportResult;
use crate::domain::ports::link_checker::LinkChecker;
use std::sync::Arc;

pub struct VerifyLinksUseCase {
    checker: Arc<dyn LinkChecker>,
}

impl VerifyLinksUseCase {
    pub fn new(checker: Arc<dyn LinkChecker>) -> Self {
        Self { checker }
    }

    /// Drop items whose link is known to be dead. Items without a link are
    /// kept so the caller can still show them. Returns how many were dropped.
    pub async fn execute(&self, report: &mut ReportResult) -> usize {
        let mut kept = Vec::with_capacity(report.items.len());
        let mut dropped = 0;

        for item in report.items.drain(..) {
            if item.has_link() && !self.checker.is_alive(&item.url).await {
                tracing::info!(url = %item.url, "dropping dead link");
                dropped += 1;
                continue;
            }
            kept.push(item);
        }

        report.items = kept;
        dropped
    }
}
