use crate::error::ActionError;

/// Ordered, duplicate free category labels. New labels go in front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStore {
    names: Vec<String>,
}

impl CategoryStore {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn from_defaults(defaults: &[&str]) -> Self {
        Self::new(defaults.iter().map(|v| v.to_string()).collect())
    }

    /// Adds a trimmed `name` in front. Comparison with existing labels is exact and case
    /// sensitive.
    pub fn add(&mut self, name: &str) -> Result<String, ActionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ActionError::EmptyInput);
        }
        if self.contains(name) {
            return Err(ActionError::DuplicateCategory(name.to_owned()));
        }
        self.names.insert(0, name.to_owned());
        Ok(name.to_owned())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|v| v == name)
    }

    pub fn list(&self) -> &[String] {
        &self.names
    }

    pub fn reset(&mut self, defaults: &[&str]) {
        *self = Self::from_defaults(defaults);
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ActionError;

    use super::CategoryStore;

    fn store() -> CategoryStore {
        CategoryStore::from_defaults(&["学习日语", "运动"])
    }

    #[test]
    fn test_add_inserts_in_front() {
        let mut store = store();
        assert_eq!(store.add("  读书 "), Ok("读书".to_owned()));
        assert_eq!(store.list(), &["读书", "学习日语", "运动"]);
    }

    #[test]
    fn test_add_empty() {
        let mut store = store();
        assert_eq!(store.add(""), Err(ActionError::EmptyInput));
        assert_eq!(store.add("   "), Err(ActionError::EmptyInput));
        assert_eq!(store, self::store());
    }

    #[test]
    fn test_add_duplicate() {
        let mut store = store();
        assert_eq!(
            store.add("运动"),
            Err(ActionError::DuplicateCategory("运动".into()))
        );
        assert_eq!(
            store.add(" 运动\t"),
            Err(ActionError::DuplicateCategory("运动".into()))
        );
        assert_eq!(store, self::store());
    }

    #[test]
    fn test_add_is_case_sensitive() {
        let mut store = CategoryStore::from_defaults(&["Run"]);
        assert!(store.add("run").is_ok());
        assert_eq!(store.list(), &["run", "Run"]);
    }
}
