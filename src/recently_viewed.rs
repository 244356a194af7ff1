//! Recently Viewed Foods
//!
//! Bounded most-recently-used list persisted in local storage, plus the
//! projection into display rows.

use crate::models::ViewedItem;
use crate::storage::{BrowserStorage, StorageBackend};

/// Label shown when an item carries no category
pub const DEFAULT_CATEGORY_LABEL: &str = "Meal";

/// Persisted list of viewed items, most recent first. Storage failures are
/// logged and swallowed.
#[derive(Debug, Clone)]
pub struct RecentlyViewedStore<S: StorageBackend = BrowserStorage> {
    backend: S,
    key: String,
    capacity: usize,
}

impl<S: StorageBackend> RecentlyViewedStore<S> {
    pub fn new(backend: S, key: impl Into<String>, capacity: usize) -> Self {
        Self {
            backend,
            key: key.into(),
            capacity: capacity.max(1),
        }
    }

    /// Move `item` to the front, dropping any entry with the same name and
    /// anything past capacity. Blank names are rejected.
    pub fn add(&self, item: ViewedItem) {
        let Some(item) = normalize(item) else {
            log::warn!("Refusing to record a viewed item without a name");
            return;
        };

        let mut viewed = self.list();
        viewed.retain(|existing| existing.name != item.name);
        viewed.insert(0, item);
        viewed.truncate(self.capacity);

        if let Err(e) = self.backend.save(&self.key, &viewed) {
            log::error!("Error updating recently viewed: {}", e);
        }
    }

    /// Stored sequence, or empty when missing, corrupted or unavailable
    pub fn list(&self) -> Vec<ViewedItem> {
        match self.backend.load::<Vec<ViewedItem>>(&self.key) {
            Ok(Some(mut viewed)) => {
                viewed.truncate(self.capacity);
                viewed
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Error reading recently viewed: {}", e);
                Vec::new()
            }
        }
    }
}

fn normalize(item: ViewedItem) -> Option<ViewedItem> {
    let name = item.name.trim();
    if name.is_empty() {
        return None;
    }
    let calories = if item.calories.is_finite() && item.calories > 0.0 {
        item.calories
    } else {
        0.0
    };
    let category = item
        .category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());
    Some(ViewedItem::new(name, calories, category))
}

/// One line of the recently viewed panel
#[derive(Debug, Clone, PartialEq)]
pub enum RecentRow {
    Entry {
        name: String,
        calories: i64,
        category: String,
    },
    Empty,
}

/// First `limit` entries as rows, or a single `Empty` row
pub fn recent_rows(items: &[ViewedItem], limit: usize) -> Vec<RecentRow> {
    if items.is_empty() || limit == 0 {
        return vec![RecentRow::Empty];
    }
    items
        .iter()
        .take(limit)
        .map(|item| RecentRow::Entry {
            name: item.name.clone(),
            calories: item.calories.round() as i64,
            category: item
                .category
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY_LABEL.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const KEY: &str = "recentlyViewed";

    fn store(backend: &MemoryStorage) -> RecentlyViewedStore<MemoryStorage> {
        RecentlyViewedStore::new(backend.clone(), KEY, 10)
    }

    fn names(items: &[ViewedItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_repeat_view_moves_to_front() {
        let backend = MemoryStorage::new();
        let store = store(&backend);
        store.add(ViewedItem::new("Apple", 95.0, None));
        store.add(ViewedItem::new("Banana", 105.0, None));
        store.add(ViewedItem::new("Apple", 95.0, None));

        assert_eq!(names(&store.list()), vec!["Apple", "Banana"]);
    }

    #[test]
    fn test_eleventh_item_evicts_oldest() {
        let backend = MemoryStorage::new();
        let store = store(&backend);
        for i in 0..11 {
            store.add(ViewedItem::new(format!("Food {}", i), 100.0, None));
        }

        let viewed = store.list();
        assert_eq!(viewed.len(), 10);
        assert_eq!(viewed[0].name, "Food 10");
        assert!(viewed.iter().all(|i| i.name != "Food 0"));
    }

    #[test]
    fn test_length_bounded_for_mixed_sequences() {
        let backend = MemoryStorage::new();
        let store = store(&backend);
        for i in 0..40 {
            store.add(ViewedItem::new(format!("Food {}", (i * 7) % 13), 10.0, None));
            let viewed = store.list();
            assert!(viewed.len() <= 10);
            let mut unique = names(&viewed);
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), viewed.len());
        }
    }

    #[test]
    fn test_same_item_repeatedly_keeps_one_entry() {
        let backend = MemoryStorage::new();
        let store = store(&backend);
        for _ in 0..5 {
            store.add(ViewedItem::new("Rice", 200.0, Some("Grains".into())));
        }
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_corrupted_storage_reads_as_empty() {
        let backend = MemoryStorage::new();
        backend.put_raw(KEY, "{definitely not json");
        let store = store(&backend);
        assert!(store.list().is_empty());

        // Adding over corrupted data starts a fresh list
        store.add(ViewedItem::new("Kiwi", 42.0, None));
        assert_eq!(names(&store.list()), vec!["Kiwi"]);
    }

    #[test]
    fn test_unavailable_storage_is_swallowed() {
        let store = RecentlyViewedStore::new(MemoryStorage::unavailable(), KEY, 10);
        store.add(ViewedItem::new("Pear", 57.0, None));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_reads_legacy_entries_without_category() {
        let backend = MemoryStorage::new();
        backend.put_raw(KEY, r#"[{"name":"Soup","calories":120.6}]"#);
        let viewed = store(&backend).list();
        assert_eq!(viewed, vec![ViewedItem::new("Soup", 120.6, None)]);
    }

    #[test]
    fn test_null_calories_keep_history() {
        let backend = MemoryStorage::new();
        backend.put_raw(KEY, r#"[{"name":"A","calories":null},{"name":"B","calories":5}]"#);
        let store = store(&backend);
        assert_eq!(
            store.list(),
            vec![ViewedItem::new("A", 0.0, None), ViewedItem::new("B", 5.0, None)]
        );

        store.add(ViewedItem::new("C", 1.0, None));
        assert_eq!(names(&store.list()), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_blank_names_are_rejected_and_values_normalized() {
        let backend = MemoryStorage::new();
        let store = store(&backend);
        store.add(ViewedItem::new("   ", 10.0, None));
        assert!(backend.raw(KEY).is_none());

        store.add(ViewedItem::new("  Egg ", f64::NAN, Some(" ".into())));
        assert_eq!(store.list(), vec![ViewedItem::new("Egg", 0.0, None)]);
    }

    #[test]
    fn test_rows_show_first_five_with_defaults() {
        let items: Vec<ViewedItem> = (0..7)
            .map(|i| ViewedItem::new(format!("Food {}", i), 99.5, None))
            .collect();
        let rows = recent_rows(&items, 5);
        assert_eq!(rows.len(), 5);
        assert_eq!(
            rows[0],
            RecentRow::Entry {
                name: "Food 0".into(),
                calories: 100,
                category: "Meal".into(),
            }
        );
    }

    #[test]
    fn test_rows_empty_state() {
        assert_eq!(recent_rows(&[], 5), vec![RecentRow::Empty]);
    }
}
