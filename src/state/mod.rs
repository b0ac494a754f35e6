//! In-memory application state. Stores here never touch persistence themselves; the
//! [App](crate::app::App) saves explicitly after each successful mutation.

pub mod categories;
pub mod id;
pub mod logs;

use categories::CategoryStore;
use logs::LogStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub logs: LogStore,
    pub categories: CategoryStore,
}
