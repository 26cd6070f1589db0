//! Enumeration types for CLI and aggregation parameters.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar unit used to bucket citation dates.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One bucket per calendar day.
    #[value(name = "D", alias = "day")]
    Day,
    /// Monday to Sunday weeks.
    #[value(name = "W", alias = "week")]
    Week,
    /// Calendar months.
    #[default]
    #[value(name = "M", alias = "month")]
    Month,
    /// Calendar quarters starting January, April, July and October.
    #[value(name = "Q", alias = "quarter")]
    Quarter,
    /// Calendar years.
    #[value(name = "Y", alias = "year")]
    Year,
}

impl Granularity {
    /// Single-letter code shown on the CLI and in chart captions.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Day => 'D',
            Self::Week => 'W',
            Self::Month => 'M',
            Self::Quarter => 'Q',
            Self::Year => 'Y',
        }
    }

    /// First day of the bucket containing `date`.
    #[must_use]
    pub fn bucket_start(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Day => date,
            Self::Week => date
                .checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
                .unwrap_or(date),
            Self::Month => date.with_day(1).unwrap_or(date),
            Self::Quarter => {
                let month = date.month0() / 3 * 3 + 1;
                NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date)
            }
            Self::Year => date.with_ordinal(1).unwrap_or(date),
        }
    }

    /// Start of the bucket after the one starting at `start`.
    ///
    /// `start` must already be aligned. Returns `None` past the calendar range.
    #[must_use]
    pub fn next_bucket(self, start: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Day => start.succ_opt(),
            Self::Week => start.checked_add_days(Days::new(7)),
            Self::Month => start.checked_add_months(Months::new(1)),
            Self::Quarter => start.checked_add_months(Months::new(3)),
            Self::Year => start.checked_add_months(Months::new(12)),
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
