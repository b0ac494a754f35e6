//! CSV export of the whole log list.

use chrono::{NaiveDate, TimeZone};
use tracing::debug;

use crate::{
    error::ActionError,
    storage::entities::LogEntry,
    utils::time::{format_date, format_date_time},
};

pub const CSV_MIME: &str = "text/csv;charset=utf-8";
const CSV_HEADER: &str = "timestamp,datetime,category";

/// Ready to be written export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime: &'static str,
    pub contents: String,
}

pub fn export_file_name(today: NaiveDate) -> String {
    format!("time-log-{}.csv", format_date(today))
}

/// Serializes `entries` (newest first, as stored) into CSV rows ordered oldest first. An empty
/// list is refused instead of producing a header-only file.
pub fn to_csv<Tz: TimeZone>(entries: &[LogEntry], tz: &Tz) -> Result<String, ActionError>
where
    Tz::Offset: std::fmt::Display,
{
    if entries.is_empty() {
        return Err(ActionError::NoDataToExport);
    }

    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_HEADER.to_owned());
    for entry in entries.iter().rev() {
        lines.push(format!(
            "{},{},{}",
            entry.timestamp,
            quote(&format_date_time(entry.timestamp, tz)),
            quote(&entry.category)
        ));
    }
    Ok(lines.join("\n"))
}

/// Builds the export named after `today`.
pub fn export<Tz: TimeZone>(
    entries: &[LogEntry],
    today: NaiveDate,
    tz: &Tz,
) -> Result<ExportFile, ActionError>
where
    Tz::Offset: std::fmt::Display,
{
    let contents = to_csv(entries, tz)?;
    let file = ExportFile {
        file_name: export_file_name(today),
        mime: CSV_MIME,
        contents,
    };
    debug!("Prepared {} ({}, {} rows)", file.file_name, file.mime, entries.len());
    Ok(file)
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
