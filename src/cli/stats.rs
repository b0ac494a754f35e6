use std::{io::IsTerminal, str::FromStr};

use ansi_term::Style;
use anyhow::{anyhow, Result};
use chrono::{Local, TimeZone};

use crate::{
    app::{App, Summary},
    locale::Locale,
    stats::range::PeriodMode,
    storage::key_value::KeyValueStore,
    utils::time::{format_date, format_date_time},
};

use super::dates::{parse_base_date, DateStyle};

/// Number of summary rows to show. Accepts a number or `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopN(usize);

impl FromStr for TopN {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(TopN(usize::MAX));
        }
        s.parse::<usize>()
            .map(TopN)
            .map_err(|e| anyhow!("Can't parse {s} into a row count: {e}"))
    }
}

impl std::fmt::Display for TopN {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == usize::MAX {
            write!(f, "all")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

const DEFAULT_TOP_N: TopN = TopN(5);

#[derive(Debug, clap::Args)]
pub struct PeriodArgs {
    #[arg(
        long,
        short,
        help = "Day inside of the period. Examples are \"2025-03-15\", \"yesterday\", \"15/03/2025\". Defaults to today"
    )]
    pub date: Option<String>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    pub date_style: DateStyle,
    #[arg(
        long,
        short,
        default_value_t = PeriodMode::Day,
        help = "Period to summarize: day, month or quarter. Anything else is treated as day"
    )]
    pub mode: PeriodMode,
}

#[derive(Debug, clap::Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub period: PeriodArgs,
    #[arg(long, short, default_value_t = DEFAULT_TOP_N, help = "Number of categories to show, or \"all\"")]
    pub top: TopN,
}

/// Command to process `stats`. Prints the range line followed by one row per category.
pub fn process_stats_command<S: KeyValueStore>(
    app: &App<S>,
    StatsCommand { period, top }: StatsCommand,
) -> Result<()> {
    let base = parse_base_date(period.date.as_deref(), Local::now(), period.date_style)?;
    let summary = app.summary(base, period.mode, top.0, &Local);
    print_summary(&summary, app.locale());
    Ok(())
}

/// Summary line, e.g. `区间：2025-03-07 ～ 2025-03-08（不含结束日）｜记录数：3`.
pub fn range_line<Tz: TimeZone>(summary: &Summary<Tz>, locale: Locale) -> String {
    let strings = locale.strings();
    format!(
        "{}{}{}{}{}{}{}{}",
        strings.range,
        format_date(summary.range.first_day()),
        strings.range_to,
        format_date(summary.range.end_day()),
        strings.exclusive_end,
        strings.divider,
        strings.record_count,
        summary.aggregation.total_matched,
    )
}

fn print_summary(summary: &Summary<Local>, locale: Locale) {
    let strings = locale.strings();
    let header = Style::new().bold();
    let styled = std::io::stdout().is_terminal();

    println!("{}", range_line(summary, locale));
    println!();

    let columns = [
        strings.column_category,
        strings.column_count,
        strings.column_share,
        strings.column_last,
    ]
    .join("\t");
    if styled {
        println!("{}", header.paint(columns));
    } else {
        println!("{columns}");
    }

    let aggregation = &summary.aggregation;
    if aggregation.rows.is_empty() {
        println!("{}", strings.no_data);
        return;
    }
    for row in aggregation.rows.iter() {
        println!(
            "{}\t{}\t{}\t{}",
            row.category,
            row.count,
            aggregation.share(row),
            format_date_time(row.last_timestamp, &Local)
        );
    }
}
