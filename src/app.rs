//! Command interface of the core. A presentation layer calls the operations here and
//! subscribes to [Change]s to know when to render again.

use chrono::{NaiveDate, TimeZone};
use tracing::{debug, info, warn};

use crate::{
    error::ActionError,
    export::{self, ExportFile},
    locale::Locale,
    state::{AppState, categories::CategoryStore, logs::LogStore},
    stats::{
        aggregate::{Aggregation, aggregate, filter_range},
        range::{DateRange, PeriodMode, resolve},
    },
    storage::{
        KEY_CATEGORIES, KEY_LOGS,
        entities::LogEntry,
        key_value::KeyValueStore,
        persisted::{LoadedCategories, load_categories, load_logs, save},
    },
    utils::clock::Clock,
};

/// Emitted after a mutation succeeded and was persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    LogAdded(LogEntry),
    LogRemoved { id: String },
    CategoryAdded(String),
    Cleared,
}

pub type Listener = Box<dyn FnMut(&Change, &AppState)>;

/// Statistics of one period.
#[derive(Debug, Clone)]
pub struct Summary<Tz: TimeZone> {
    pub range: DateRange<Tz>,
    pub aggregation: Aggregation,
}

pub struct App<S: KeyValueStore> {
    state: AppState,
    store: S,
    clock: Box<dyn Clock>,
    locale: Locale,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore> App<S> {
    /// Loads state from `store`. Unusable stored data is replaced with an empty log list and the
    /// default categories of `locale`.
    pub fn load(mut store: S, clock: Box<dyn Clock>, locale: Locale) -> Self {
        let logs = LogStore::new(load_logs(&store));
        let categories = match load_categories(&store) {
            LoadedCategories::Stored(names) => CategoryStore::new(names),
            LoadedCategories::Missing { persist } => {
                let categories = CategoryStore::from_defaults(locale.default_categories());
                if persist {
                    persist_categories(&mut store, &categories);
                }
                categories
            }
        };
        debug!(
            "Loaded {} entries and {} categories",
            logs.len(),
            categories.list().len()
        );

        Self {
            state: AppState { logs, categories },
            store,
            clock,
            locale,
            listeners: vec![],
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Change, &AppState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Records a tap on `category`. The name is trimmed and must not be blank.
    pub fn add_log(&mut self, category: &str) -> Result<LogEntry, ActionError> {
        let entry = self.state.logs.add(category, self.clock.as_ref())?;
        info!("Recorded {entry:?}");
        self.persist_logs();
        self.notify(Change::LogAdded(entry.clone()));
        Ok(entry)
    }

    /// Removes an entry. Unknown ids change nothing.
    pub fn remove_log(&mut self, id: &str) -> bool {
        let existed = self.state.logs.remove(id);
        if existed {
            info!("Removed entry {id}");
            self.persist_logs();
            self.notify(Change::LogRemoved { id: id.to_owned() });
        } else {
            debug!("No entry with id {id}");
        }
        existed
    }

    pub fn add_category(&mut self, name: &str) -> Result<String, ActionError> {
        let name = self.state.categories.add(name)?;
        info!("Added category {name}");
        persist_categories(&mut self.store, &self.state.categories);
        self.notify(Change::CategoryAdded(name.clone()));
        Ok(name)
    }

    /// Drops every entry and restores the default categories.
    pub fn clear_all(&mut self) {
        self.state.logs.clear();
        self.state
            .categories
            .reset(self.locale.default_categories());
        info!("Cleared all data");
        self.persist_logs();
        persist_categories(&mut self.store, &self.state.categories);
        self.notify(Change::Cleared);
    }

    /// Aggregates the period of `mode` around `base`, keeping `top_n` rows.
    pub fn summary<Tz: TimeZone>(
        &self,
        base: NaiveDate,
        mode: PeriodMode,
        top_n: usize,
        tz: &Tz,
    ) -> Summary<Tz> {
        let range = resolve(base, mode, tz);
        let aggregation = aggregate(self.state.logs.list(), &range, top_n);
        Summary { range, aggregation }
    }

    /// Raw entries inside of `range`, newest first, at most `limit` of them.
    pub fn entries_in<Tz: TimeZone>(&self, range: &DateRange<Tz>, limit: usize) -> Vec<LogEntry> {
        filter_range(self.state.logs.list(), range)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Exports every stored entry, regardless of any selected range.
    pub fn export<Tz: TimeZone>(&self, tz: &Tz) -> Result<ExportFile, ActionError>
    where
        Tz::Offset: std::fmt::Display,
    {
        let today = self.clock.time().with_timezone(tz).date_naive();
        export::export(self.state.logs.list(), today, tz)
    }

    fn persist_logs(&mut self) {
        if let Err(e) = save(&mut self.store, KEY_LOGS, self.state.logs.list()) {
            warn!("Failed to persist logs: {e}");
        }
    }

    fn notify(&mut self, change: Change) {
        for listener in self.listeners.iter_mut() {
            listener(&change, &self.state);
        }
    }
}

fn persist_categories(store: &mut impl KeyValueStore, categories: &CategoryStore) {
    if let Err(e) = save(store, KEY_CATEGORIES, categories.list()) {
        warn!("Failed to persist categories: {e}");
    }
}
