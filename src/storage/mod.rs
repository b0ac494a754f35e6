//!  Storage is organized through a [key_value::KeyValueStore].
//!  The basic idea is:
//!   - There are two fixed keys, one for the log list and one for the category list.
//!   - Values are JSON documents, written whole after every successful mutation.
//!   - Reading is lenient. Missing or corrupt values fall back to empty or default state.

pub mod entities;
pub mod key_value;
pub mod persisted;

pub const KEY_LOGS: &str = "fd_time_logs_v1";
pub const KEY_CATEGORIES: &str = "fd_categories_v1";
