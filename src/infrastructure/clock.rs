use crate::domain::ports::clock::Clock;
use chrono::{Local, NaiveDate};

/// Today's date in the local time zone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
