use std::{convert::Infallible, fmt::Display, str::FromStr};

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeZone};

use crate::utils::time::start_of_day;

/// Length of the period summarized around a base date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodMode {
    #[default]
    Day,
    Month,
    Quarter,
}

impl Display for PeriodMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodMode::Day => write!(f, "day"),
            PeriodMode::Month => write!(f, "month"),
            PeriodMode::Quarter => write!(f, "quarter"),
        }
    }
}

/// Parsing never fails, anything unknown is treated as [PeriodMode::Day].
impl FromStr for PeriodMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "month" => PeriodMode::Month,
            "quarter" => PeriodMode::Quarter,
            _ => PeriodMode::Day,
        })
    }
}

/// Half-open interval `[start, end)`, both ends at local midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange<Tz: TimeZone> {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> DateRange<Tz> {
    pub fn contains_millis(&self, millis: i64) -> bool {
        self.start.timestamp_millis() <= millis && millis < self.end.timestamp_millis()
    }

    /// Calendar date of the first day.
    pub fn first_day(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Calendar date right after the last included day.
    pub fn end_day(&self) -> NaiveDate {
        self.end.date_naive()
    }

    pub fn days(&self) -> i64 {
        (self.end_day() - self.first_day()).num_days()
    }
}

/// Computes the calendar days bounding the period of `mode` around `base`, end exclusive.
pub fn resolve_days(base: NaiveDate, mode: PeriodMode) -> (NaiveDate, NaiveDate) {
    let start = match mode {
        PeriodMode::Day => base,
        PeriodMode::Month => base.with_day(1).unwrap_or(base),
        PeriodMode::Quarter => {
            let quarter = base.month0() / 3;
            NaiveDate::from_ymd_opt(base.year(), quarter * 3 + 1, 1).unwrap_or(base)
        }
    };
    let end = match mode {
        PeriodMode::Day => start.succ_opt(),
        PeriodMode::Month => start.checked_add_months(Months::new(1)),
        PeriodMode::Quarter => start.checked_add_months(Months::new(3)),
    }
    // Only reachable at the very end of chrono's calendar.
    .unwrap_or(NaiveDate::MAX);
    (start, end)
}

/// Resolves the range of `mode` around `base` with both ends at midnight in `tz`.
pub fn resolve<Tz: TimeZone>(base: NaiveDate, mode: PeriodMode, tz: &Tz) -> DateRange<Tz> {
    let (start, end) = resolve_days(base, mode);
    DateRange {
        start: start_of_day(start, tz),
        end: start_of_day(end, tz),
    }
}
