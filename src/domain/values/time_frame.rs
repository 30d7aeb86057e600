use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Phrase used in place of a cutoff date when the time frame is unbounded.
pub const UNBOUNDED_PHRASE: &str = "no limit, but prefer the most recent information";

/// How recent the reported articles should be.
///
/// Advisory only: the cutoff is written into the prompt and nothing filters
/// the provider's answer by date afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrame {
    #[default]
    Any,
    Week,
    Month,
    Year,
    #[serde(rename = "3years")]
    ThreeYears,
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 5] = [
        TimeFrame::Any,
        TimeFrame::Week,
        TimeFrame::Month,
        TimeFrame::Year,
        TimeFrame::ThreeYears,
    ];

    /// Earliest publication date allowed for `today`, or `None` when unbounded.
    ///
    /// Month and year offsets are calendar offsets that clamp to the last day
    /// of a shorter target month (Mar 31 minus one month is Feb 28 or 29).
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            TimeFrame::Any => None,
            TimeFrame::Week => today.checked_sub_days(Days::new(7)),
            TimeFrame::Month => today.checked_sub_months(Months::new(1)),
            TimeFrame::Year => today.checked_sub_months(Months::new(12)),
            TimeFrame::ThreeYears => today.checked_sub_months(Months::new(36)),
        }
    }

    /// Human-readable cutoff embedded in the prompt.
    pub fn cutoff_phrase(&self, today: NaiveDate) -> String {
        match self.cutoff(today) {
            Some(date) => format!("after {}", date.format("%Y-%m-%d")),
            None => UNBOUNDED_PHRASE.to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeFrame::Any => "Any time",
            TimeFrame::Week => "Past week",
            TimeFrame::Month => "Past month",
            TimeFrame::Year => "Past year",
            TimeFrame::ThreeYears => "Past three years",
        }
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeFrame::Any => write!(f, "any"),
            TimeFrame::Week => write!(f, "week"),
            TimeFrame::Month => write!(f, "month"),
            TimeFrame::Year => write!(f, "year"),
            TimeFrame::ThreeYears => write!(f, "3years"),
        }
    }
}

impl FromStr for TimeFrame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" => Ok(TimeFrame::Any),
            "week" => Ok(TimeFrame::Week),
            "month" => Ok(TimeFrame::Month),
            "year" => Ok(TimeFrame::Year),
            "3years" => Ok(TimeFrame::ThreeYears),
            _ => Err(format!(
                "Unknown time frame: '{s}'. Use any, week, month, year or 3years"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cutoff_offsets() {
        let today = date(2026, 10, 19);
        assert_eq!(TimeFrame::Week.cutoff(today), Some(date(2026, 10, 12)));
        assert_eq!(TimeFrame::Month.cutoff(today), Some(date(2026, 9, 19)));
        assert_eq!(TimeFrame::Year.cutoff(today), Some(date(2025, 10, 19)));
        assert_eq!(TimeFrame::ThreeYears.cutoff(today), Some(date(2023, 10, 19)));
        assert_eq!(TimeFrame::Any.cutoff(today), None);
    }

    #[test]
    fn test_week_crosses_month_and_year() {
        assert_eq!(TimeFrame::Week.cutoff(date(2026, 1, 3)), Some(date(2025, 12, 27)));
    }

    #[test]
    fn test_month_clamps_to_end_of_shorter_month() {
        assert_eq!(TimeFrame::Month.cutoff(date(2026, 3, 31)), Some(date(2026, 2, 28)));
        assert_eq!(TimeFrame::Month.cutoff(date(2028, 3, 31)), Some(date(2028, 2, 29)));
    }

    #[test]
    fn test_year_from_leap_day() {
        assert_eq!(TimeFrame::Year.cutoff(date(2028, 2, 29)), Some(date(2027, 2, 28)));
    }

    #[test]
    fn test_cutoff_phrase() {
        let today = date(2026, 10, 19);
        assert_eq!(TimeFrame::Week.cutoff_phrase(today), "after 2026-10-12");
        let any = TimeFrame::Any.cutoff_phrase(today);
        assert_eq!(any, UNBOUNDED_PHRASE);
        assert!(!any.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_parse_and_display() {
        for tf in TimeFrame::ALL {
            assert_eq!(tf.to_string().parse::<TimeFrame>().unwrap(), tf);
        }
        assert_eq!("WEEK".parse::<TimeFrame>().unwrap(), TimeFrame::Week);
        assert!("fortnight".parse::<TimeFrame>().is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&TimeFrame::ThreeYears).unwrap(), "\"3years\"");
        let tf: TimeFrame = serde_json::from_str("\"month\"").unwrap();
        assert_eq!(tf, TimeFrame::Month);
    }
}
