use serde::{Deserialize, Serialize};

/// A single tap. Stored with the same field names the original widget used in its JSON, so old
/// exports keep loading.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
    pub id: String,
    /// Milliseconds since the Unix epoch.
    #[serde(rename = "ts")]
    pub timestamp: i64,
    pub category: String,
}

impl LogEntry {
    pub fn new(id: impl Into<String>, timestamp: i64, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            timestamp,
            category: category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LogEntry;

    #[test]
    fn test_entry_json_shape() {
        let entry = LogEntry::new("ab12", 1_700_000_000_000, "运动");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "ab12", "ts": 1_700_000_000_000_i64, "category": "运动"})
        );
    }
}
