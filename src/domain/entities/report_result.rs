use crate::domain::entities::report_item::ReportItem;
use crate::domain::values::time_frame::TimeFrame;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display format of the report date.
pub const REPORT_DATE_FORMAT: &str = "%Y/%m/%d";

/// The outcome of one report request. Built fresh per request and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResult {
    /// Correlates the result with the log lines of the request that produced it.
    pub id: String,
    pub topics: Vec<String>,
    pub report_date: String,
    pub time_frame: TimeFrame,
    pub items: Vec<ReportItem>,
}

impl ReportResult {
    pub fn new(
        id: String,
        topics: Vec<String>,
        today: NaiveDate,
        time_frame: TimeFrame,
        items: Vec<ReportItem>,
    ) -> Self {
        Self {
            id,
            topics,
            report_date: today.format(REPORT_DATE_FORMAT).to_string(),
            time_frame,
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
