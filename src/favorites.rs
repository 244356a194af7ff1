//! Favorite Markers
//!
//! The server owns favorites; the client keeps a confirmed copy plus
//! tentative toggles that are either confirmed or rolled back.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingToggle {
    pub food_name: String,
    pub was_favorite: bool,
}

impl PendingToggle {
    pub fn tentative(&self) -> bool {
        !self.was_favorite
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoriteBook {
    confirmed: HashSet<String>,
    pending: HashMap<String, bool>,
}

impl FavoriteBook {
    /// Replace the confirmed set with the server list; tentative toggles survive
    pub fn sync(&mut self, favorites: impl IntoIterator<Item = String>) {
        self.confirmed = favorites.into_iter().collect();
    }

    /// Take the server's flag from a fetched recommendation; a pending
    /// toggle still decides what is displayed
    pub fn seed(&mut self, name: &str, is_favorite: bool) {
        if is_favorite {
            self.confirmed.insert(name.to_string());
        } else {
            self.confirmed.remove(name);
        }
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.pending
            .get(name)
            .copied()
            .unwrap_or_else(|| self.confirmed.contains(name))
    }

    pub fn is_pending(&self, name: &str) -> bool {
        self.pending.contains_key(name)
    }

    /// Flip the displayed state. `None` while a toggle for the same food
    /// is still awaiting the server.
    pub fn begin(&mut self, name: &str) -> Option<PendingToggle> {
        if self.is_pending(name) {
            return None;
        }
        let toggle = PendingToggle {
            food_name: name.to_string(),
            was_favorite: self.is_favorite(name),
        };
        self.pending.insert(name.to_string(), toggle.tentative());
        Some(toggle)
    }

    pub fn confirm(&mut self, toggle: &PendingToggle) {
        self.pending.remove(&toggle.food_name);
        if toggle.tentative() {
            self.confirmed.insert(toggle.food_name.clone());
        } else {
            self.confirmed.remove(&toggle.food_name);
        }
    }

    pub fn rollback(&mut self, toggle: &PendingToggle) {
        self.pending.remove(&toggle.food_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_shows_tentative_state_until_confirmed() {
        let mut book = FavoriteBook::default();
        let toggle = book.begin("Salmon").unwrap();
        assert!(book.is_favorite("Salmon"));
        assert!(book.is_pending("Salmon"));

        book.confirm(&toggle);
        assert!(book.is_favorite("Salmon"));
        assert!(!book.is_pending("Salmon"));
    }

    #[test]
    fn test_rollback_restores_previous_state() {
        let mut book = FavoriteBook::default();
        book.sync(vec!["Tofu".to_string()]);
        let toggle = book.begin("Tofu").unwrap();
        assert!(!book.is_favorite("Tofu"));

        book.rollback(&toggle);
        assert!(book.is_favorite("Tofu"));
    }

    #[test]
    fn test_second_toggle_refused_while_pending() {
        let mut book = FavoriteBook::default();
        let _first = book.begin("Rice").unwrap();
        assert!(book.begin("Rice").is_none());
        assert!(book.begin("Beans").is_some());
    }

    #[test]
    fn test_sync_keeps_pending_overlay() {
        let mut book = FavoriteBook::default();
        let toggle = book.begin("Pasta").unwrap();
        book.sync(Vec::<String>::new());
        assert!(book.is_favorite("Pasta"));
        book.confirm(&toggle);
        assert!(book.is_favorite("Pasta"));
    }

    #[test]
    fn test_fresh_recommendation_clears_stale_favorite() {
        let mut book = FavoriteBook::default();
        book.sync(vec!["Tofu".to_string()]);
        book.seed("Tofu", false);
        assert!(!book.is_favorite("Tofu"));

        book.seed("Tofu", true);
        assert!(book.is_favorite("Tofu"));
    }

    #[test]
    fn test_seed_does_not_override_pending_toggle() {
        let mut book = FavoriteBook::default();
        let toggle = book.begin("Lentils").unwrap();
        book.seed("Lentils", false);
        assert!(book.is_favorite("Lentils"));
        book.confirm(&toggle);
        assert!(book.is_favorite("Lentils"));
    }

    #[test]
    fn test_server_direction_wins_after_confirm() {
        let mut book = FavoriteBook::default();
        let toggle = book.begin("Oats").unwrap();
        book.confirm(&toggle);
        book.seed("Oats", false);
        assert!(!book.is_favorite("Oats"));
    }
}
