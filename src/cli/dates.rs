use std::fmt::Display;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_english::parse_date_string;
use clap::{CommandFactory, ValueEnum};

use super::Args;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

/// Resolves the base date of a summary. Accepts `YYYY-MM-DD` as well as phrases like
/// "yesterday" or "15/03/2025". No value means the day of `now`.
pub fn parse_base_date<Tz: TimeZone>(
    value: Option<&str>,
    now: DateTime<Tz>,
    style: DateStyle,
) -> Result<NaiveDate>
where
    Tz::Offset: Copy,
{
    let Some(value) = value else {
        return Ok(now.date_naive());
    };
    if let Ok(date) = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        return Ok(date);
    }
    match parse_date_string(value, now, style.into()) {
        Ok(v) => Ok(v.date_naive()),
        Err(e) => Err(Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                format!("Failed to validate date {value:?} {e}"),
            )
            .into()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::{DateStyle, parse_base_date};

    #[test]
    fn test_parse_base_date() {
        let now = Utc.with_ymd_and_hms(2025, 3, 7, 15, 0, 0).unwrap();
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

        assert_eq!(parse_base_date(None, now, DateStyle::Uk).unwrap(), date(2025, 3, 7));
        assert_eq!(
            parse_base_date(Some("2024-12-31"), now, DateStyle::Uk).unwrap(),
            date(2024, 12, 31)
        );
        assert_eq!(
            parse_base_date(Some("yesterday"), now, DateStyle::Uk).unwrap(),
            date(2025, 3, 6)
        );
        assert_eq!(
            parse_base_date(Some("15/03/2025"), now, DateStyle::Uk).unwrap(),
            date(2025, 3, 15)
        );
        assert_eq!(
            parse_base_date(Some("03/15/2025"), now, DateStyle::Us).unwrap(),
            date(2025, 3, 15)
        );
        assert!(parse_base_date(Some("not a date at all"), now, DateStyle::Uk).is_err());
    }
}
