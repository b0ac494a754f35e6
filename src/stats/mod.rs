//! Statistics over the log list: [range] turns a date and a period into a half-open interval,
//! [aggregate] groups the entries inside of it.

pub mod aggregate;
pub mod range;
