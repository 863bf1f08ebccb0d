//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// String identifier of a craft weapon type (e.g. `STR_CANNON_UC`)
///
/// This is the value persisted as `type` in save records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeaponTypeId(pub String);

impl WeaponTypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WeaponTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// String identifier of an item (launchers, ammunition clips)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Simulation tick counter for the logistics scheduler
pub type Tick = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_type_id_equality() {
        let a = WeaponTypeId::new("STR_CANNON_UC");
        let b = WeaponTypeId::new("STR_CANNON_UC");
        let c = WeaponTypeId::new("STR_STINGRAY_UC");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_item_id_hash() {
        use std::collections::HashMap;
        let mut map: HashMap<ItemId, i32> = HashMap::new();
        map.insert(ItemId::new("STR_CANNON_ROUNDS_X50"), 4);
        assert_eq!(map.get(&ItemId::new("STR_CANNON_ROUNDS_X50")), Some(&4));
    }

    #[test]
    fn test_ids_display_raw_string() {
        assert_eq!(WeaponTypeId::new("STR_LASER_CANNON").to_string(), "STR_LASER_CANNON");
        assert_eq!(ItemId::new("STR_STINGRAY").as_str(), "STR_STINGRAY");
    }
}
