use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, TimeZone};

use crate::{
    app::{App, Change},
    export::ExportFile,
    locale::Locale,
    stats::range::resolve,
    storage::{entities::LogEntry, key_value::KeyValueStore},
    utils::time::format_date_time,
};

use super::{dates::parse_base_date, stats::PeriodArgs};

const DEFAULT_ENTRIES_LIMIT: usize = 200;

#[derive(Debug, clap::Args)]
pub struct EntriesCommand {
    #[command(flatten)]
    pub period: PeriodArgs,
    #[arg(short, long, default_value_t = DEFAULT_ENTRIES_LIMIT)]
    pub limit: usize,
}

/// Renders the outcome of a mutation.
pub fn print_change<Tz: TimeZone>(change: &Change, locale: Locale, tz: &Tz)
where
    Tz::Offset: std::fmt::Display,
{
    let strings = locale.strings();
    match change {
        Change::LogAdded(entry) => println!(
            "{}\t{}\t{}\t{}",
            strings.recorded,
            entry.category,
            format_date_time(entry.timestamp, tz),
            entry.id
        ),
        Change::LogRemoved { id } => println!("{}\t{id}", strings.removed),
        Change::CategoryAdded(name) => println!("{}\t{name}", strings.category_added),
        Change::Cleared => println!("{}", strings.cleared),
    }
}

fn print_entry_lines<Tz: TimeZone>(entries: &[LogEntry], tz: &Tz, with_id: bool)
where
    Tz::Offset: std::fmt::Display,
{
    for entry in entries {
        if with_id {
            println!(
                "{}\t{}\t{}",
                format_date_time(entry.timestamp, tz),
                entry.category,
                entry.id
            );
        } else {
            println!("{}\t{}", format_date_time(entry.timestamp, tz), entry.category);
        }
    }
}

pub fn print_recent<Tz: TimeZone>(entries: &[LogEntry], locale: Locale, tz: &Tz)
where
    Tz::Offset: std::fmt::Display,
{
    if entries.is_empty() {
        println!("{}", locale.strings().no_records);
        return;
    }
    print_entry_lines(entries, tz, false);
}

pub fn print_categories(categories: &[String]) {
    for category in categories {
        println!("{category}");
    }
}

/// Lists raw records of the selected period, each with an id usable by `remove`.
pub fn print_entries<S: KeyValueStore>(
    app: &App<S>,
    EntriesCommand { period, limit }: EntriesCommand,
) -> Result<()> {
    let base = parse_base_date(period.date.as_deref(), Local::now(), period.date_style)?;
    let range = resolve(base, period.mode, &Local);
    let entries = app.entries_in(&range, limit);
    let strings = app.locale().strings();

    println!(
        "{}\t{}\tid",
        strings.column_time, strings.column_category
    );
    if entries.is_empty() {
        println!("{}", strings.no_data);
        return Ok(());
    }
    print_entry_lines(&entries, &Local, true);
    Ok(())
}

/// Writes the export into `out` (current directory by default) or onto stdout.
pub fn print_export(
    file: &ExportFile,
    out: Option<PathBuf>,
    stdout: bool,
    locale: Locale,
) -> Result<()> {
    if stdout {
        println!("{}", file.contents);
        return Ok(());
    }
    let path = out.unwrap_or_else(|| PathBuf::from(".")).join(&file.file_name);
    std::fs::write(&path, &file.contents)
        .with_context(|| format!("Failed to write export into {path:?}"))?;
    println!("{}\t{}", locale.strings().exported, path.display());
    Ok(())
}
