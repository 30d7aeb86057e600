use chrono::NaiveDate;

/// Source of "today" for date cutoffs and report dates.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
