//! Insertion-ordered per-category accumulator
//!
//! Reports group amounts by category and must list categories in the order
//! they were first seen, so a plain `HashMap` will not do.

/// Ordered map from category name to an accumulated value
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotals<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for CategoryTotals<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> CategoryTotals<T> {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the value for a category
    pub fn get(&self, category: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, value)| value)
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no category has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Category names in first-seen order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Values in first-seen order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<T: Default> CategoryTotals<T> {
    /// Mutable access to a category's value, inserting the default on first use
    pub fn entry(&mut self, category: &str) -> &mut T {
        let index = match self.entries.iter().position(|(name, _)| name == category) {
            Some(index) => index,
            None => {
                self.entries.push((category.to_string(), T::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_inserts_default_once() {
        let mut totals: CategoryTotals<f64> = CategoryTotals::new();
        *totals.entry("Rent") += 100.0;
        *totals.entry("Rent") += 50.0;

        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get("Rent"), Some(&150.0));
        assert_eq!(totals.get("rent"), None);
    }

    #[test]
    fn test_first_seen_order() {
        let mut totals: CategoryTotals<u32> = CategoryTotals::new();
        for name in ["Rent", "Groceries", "Rent", "Fuel", "Groceries"] {
            *totals.entry(name) += 1;
        }

        let names: Vec<_> = totals.categories().collect();
        assert_eq!(names, vec!["Rent", "Groceries", "Fuel"]);
        let counts: Vec<_> = totals.values().copied().collect();
        assert_eq!(counts, vec![2, 2, 1]);
    }
}
