use chrono::{DateTime, Utc};

/// Represents an entity responsible for providing the current moment across the application.
/// Entries are stamped through it, which lets tests pin time down.
pub trait Clock {
    fn time(&self) -> DateTime<Utc>;

    fn millis(&self) -> i64 {
        self.time().timestamp_millis()
    }
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn time(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always answers with the same moment.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn time(&self) -> DateTime<Utc> {
        self.0
    }
}
