use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone};

/// This is the standard way of converting a date to a string in taplog.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats epoch milliseconds as `YYYY-MM-DD HH:MM:SS` in the given zone. Values outside of
/// chrono's range produce an empty string.
pub fn format_date_time<Tz: TimeZone>(millis: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    DateTime::from_timestamp_millis(millis)
        .map(|v| v.with_timezone(tz).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Returns midnight of `date` in `tz`. When midnight doesn't exist (DST gap) the first valid
/// instant after it is used instead.
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(v) => v,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            // Gaps are at most a couple of hours, walk forward until the zone accepts the time.
            let mut candidate = midnight;
            loop {
                candidate += Duration::minutes(15);
                if let Some(v) = tz.from_local_datetime(&candidate).earliest() {
                    return v;
                }
                if candidate.date() != date {
                    return tz.from_utc_datetime(&midnight);
                }
            }
        }
    }
}
