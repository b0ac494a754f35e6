use std::{fmt::Display, ops::Deref};

/// Share of a whole. Displayed with one decimal place, `66.7%`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

impl Deref for Percentage {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Share of `part` in `whole`. An empty whole is treated as 1 so that nothing divides by zero.
pub fn count_percentage(part: usize, whole: usize) -> Percentage {
    let whole = whole.max(1);
    Percentage(part as f64 / whole as f64 * 100.)
}

#[cfg(test)]
mod tests {
    use super::count_percentage;

    #[test]
    fn test_count_percentage_display() {
        assert_eq!(count_percentage(2, 3).to_string(), "66.7%");
        assert_eq!(count_percentage(1, 3).to_string(), "33.3%");
        assert_eq!(count_percentage(3, 3).to_string(), "100.0%");
    }

    #[test]
    fn test_count_percentage_empty_whole() {
        assert_eq!(*count_percentage(0, 0), 0.);
        assert_eq!(*count_percentage(1, 0), 100.);
    }
}
