//! ItemStore - base-level item storage that rearming draws clips from

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::ItemId;

/// Item counts held at a base
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemStore {
    items: AHashMap<ItemId, i32>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current count of an item
    pub fn get(&self, item: &ItemId) -> i32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Add items; non-positive amounts are ignored
    pub fn add(&mut self, item: ItemId, amount: i32) {
        if amount <= 0 {
            return;
        }
        *self.items.entry(item).or_insert(0) += amount;
    }

    /// Remove items, returns amount actually removed
    pub fn remove(&mut self, item: &ItemId, amount: i32) -> i32 {
        if amount <= 0 {
            return 0;
        }
        match self.items.get_mut(item) {
            Some(count) => {
                let removed = amount.min(*count);
                *count -= removed;
                if *count == 0 {
                    self.items.remove(item);
                }
                removed
            }
            None => 0,
        }
    }

    /// Total number of items of every kind
    pub fn total(&self) -> i32 {
        self.items.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_add_remove() {
        let mut store = ItemStore::new();
        let rounds = ItemId::new("STR_CANNON_ROUNDS_X50");
        store.add(rounds.clone(), 5);
        store.add(rounds.clone(), 3);
        assert_eq!(store.get(&rounds), 8);

        assert_eq!(store.remove(&rounds, 6), 6);
        assert_eq!(store.get(&rounds), 2);

        // Can't go below zero
        assert_eq!(store.remove(&rounds, 6), 2);
        assert_eq!(store.get(&rounds), 0);
        assert_eq!(store.total(), 0);
    }

    #[test]
    fn test_store_ignores_negative_amounts() {
        let mut store = ItemStore::new();
        let missiles = ItemId::new("STR_STINGRAY_MISSILES");
        store.add(missiles.clone(), -4);
        assert_eq!(store.get(&missiles), 0);

        store.add(missiles.clone(), 2);
        assert_eq!(store.remove(&missiles, -1), 0);
        assert_eq!(store.get(&missiles), 2);
    }

    #[test]
    fn test_remove_unknown_item() {
        let mut store = ItemStore::new();
        assert_eq!(store.remove(&ItemId::new("STR_NOTHING"), 1), 0);
    }
}
