use std::collections::HashMap;

use chrono::TimeZone;
use tracing::{instrument, trace};

use crate::{
    storage::entities::LogEntry,
    utils::percentage::{Percentage, count_percentage},
};

use super::range::DateRange;

/// Per category statistics inside of a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub category: String,
    pub count: usize,
    pub last_timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Aggregation {
    /// At most `top_n` rows, largest count first.
    pub rows: Vec<SummaryRow>,
    /// Number of entries inside of the range before truncation.
    pub total_matched: usize,
}

impl Aggregation {
    /// Share of `row` among all matched entries.
    pub fn share(&self, row: &SummaryRow) -> Percentage {
        count_percentage(row.count, self.total_matched)
    }
}

/// Entries falling into `range`, in the order they are given.
pub fn filter_range<'a, Tz: TimeZone>(
    entries: &'a [LogEntry],
    range: &'a DateRange<Tz>,
) -> impl Iterator<Item = &'a LogEntry> + 'a {
    entries
        .iter()
        .filter(move |v| range.contains_millis(v.timestamp))
}

/// Groups entries inside of `range` by category and ranks the groups by count.
///
/// Groups with equal counts keep the order in which their category was first met while scanning
/// `entries`. With the store's newest-first order this puts the most recently used category of a
/// tie in front.
#[instrument(skip(entries, range), fields(entries = entries.len()))]
pub fn aggregate<Tz: TimeZone>(
    entries: &[LogEntry],
    range: &DateRange<Tz>,
    top_n: usize,
) -> Aggregation {
    let mut positions = HashMap::<&str, usize>::new();
    let mut rows = Vec::<SummaryRow>::new();
    let mut total_matched = 0;

    for entry in filter_range(entries, range) {
        total_matched += 1;
        match positions.get(entry.category.as_str()) {
            Some(&index) => {
                let row = &mut rows[index];
                row.count += 1;
                row.last_timestamp = row.last_timestamp.max(entry.timestamp);
            }
            None => {
                positions.insert(&entry.category, rows.len());
                rows.push(SummaryRow {
                    category: entry.category.clone(),
                    count: 1,
                    last_timestamp: entry.timestamp,
                });
            }
        }
    }

    // Stable, so ties stay in first-seen order.
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    trace!("Found {} categories in {total_matched} entries", rows.len());
    rows.truncate(top_n);

    Aggregation {
        rows,
        total_matched,
    }
}
