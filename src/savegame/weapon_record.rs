//! Save record for a single craft weapon.
//!
//! Only non-default flags are written: `rearming` and `disabled` appear in a
//! save only when true, and any field missing on load keeps the weapon's
//! current value.

use serde::{Deserialize, Serialize};

use crate::combat::CraftWeapon;
use crate::core::error::{ArmamentError, Result};
use crate::core::types::WeaponTypeId;
use crate::rules::WeaponRegistry;

/// Persisted state of a craft weapon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftWeaponRecord {
    #[serde(rename = "type")]
    pub weapon_type: WeaponTypeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ammo: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rearming: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl CraftWeaponRecord {
    /// Read a record from a TOML table, skipping fields of the wrong type
    ///
    /// Only a missing or non-string `type` is an error, since without it the
    /// weapon's rules cannot be found.
    pub fn from_toml_value(value: &toml::Value) -> Result<Self> {
        let weapon_type = value
            .get("type")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ArmamentError::InvalidRecord("missing weapon type".into()))?;

        let ammo = match value.get("ammo") {
            None => None,
            Some(v) => match v.as_integer().and_then(|n| i32::try_from(n).ok()) {
                Some(n) => Some(n),
                None => {
                    tracing::warn!("Ignoring malformed ammo for {}: {}", weapon_type, v);
                    None
                }
            },
        };

        Ok(Self {
            weapon_type: WeaponTypeId::new(weapon_type),
            ammo,
            rearming: read_flag(value, "rearming", weapon_type),
            disabled: read_flag(value, "disabled", weapon_type),
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let value: toml::Value = toml::from_str(content)?;
        Self::from_toml_value(&value)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Create the weapon this record describes and load its state
    pub fn instantiate<'a>(&self, registry: &'a WeaponRegistry) -> Result<CraftWeapon<'a>> {
        let rules = registry.require_weapon(self.weapon_type.as_str())?;
        let mut weapon = CraftWeapon::new(rules, 0);
        weapon.load(self);
        Ok(weapon)
    }
}

fn read_flag(value: &toml::Value, key: &str, weapon_type: &str) -> Option<bool> {
    let field = value.get(key)?;
    let flag = field.as_bool();
    if flag.is_none() {
        tracing::warn!("Ignoring malformed {} for {}: {}", key, weapon_type, field);
    }
    flag
}

impl<'a> CraftWeapon<'a> {
    /// Snapshot the weapon for saving
    pub fn save(&self) -> CraftWeaponRecord {
        CraftWeaponRecord {
            weapon_type: self.rules().id.clone(),
            ammo: Some(self.ammo()),
            rearming: self.rearming_flag().then_some(true),
            disabled: self.is_disabled().then_some(true),
        }
    }

    /// Merge a saved record into this weapon
    ///
    /// Ammo is restored without clamping; the next rearm or ammo change
    /// brings it back into range.
    pub fn load(&mut self, record: &CraftWeaponRecord) {
        if let Some(ammo) = record.ammo {
            self.restore_ammo(ammo);
        }
        if let Some(rearming) = record.rearming {
            self.set_rearming(rearming);
        }
        if let Some(disabled) = record.disabled {
            self.set_disabled(disabled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &str = r#"
[[items]]
id = "STR_CANNON_ROUNDS_X50"
clip_size = 50

[[weapons]]
id = "STR_CANNON_UC"
clip = "STR_CANNON_ROUNDS_X50"
ammo_max = 200
rearm_rate = 50

[weapons.projectile]
kind = "cannon_round"
speed = 8
accuracy = 25
damage = 10
range = 10
"#;

    fn registry() -> WeaponRegistry {
        let mut registry = WeaponRegistry::new();
        registry.load_str(RULES).unwrap();
        registry
    }

    #[test]
    fn test_save_omits_false_flags() {
        let registry = registry();
        let weapon = CraftWeapon::new(registry.weapon("STR_CANNON_UC").unwrap(), 120);
        let text = weapon.save().to_toml_string().unwrap();
        assert!(text.contains("type = \"STR_CANNON_UC\""));
        assert!(text.contains("ammo = 120"));
        assert!(!text.contains("rearming"));
        assert!(!text.contains("disabled"));
    }

    #[test]
    fn test_save_writes_raw_rearming_flag_while_disabled() {
        let registry = registry();
        let mut weapon = CraftWeapon::new(registry.weapon("STR_CANNON_UC").unwrap(), 0);
        weapon.set_rearming(true);
        weapon.set_disabled(true);
        let record = weapon.save();
        assert_eq!(record.rearming, Some(true));
        assert_eq!(record.disabled, Some(true));
    }

    #[test]
    fn test_load_keeps_values_for_missing_fields() {
        let registry = registry();
        let mut weapon = CraftWeapon::new(registry.weapon("STR_CANNON_UC").unwrap(), 80);
        weapon.set_rearming(true);

        let record = CraftWeaponRecord::from_toml_str("type = \"STR_CANNON_UC\"\ndisabled = true\n").unwrap();
        weapon.load(&record);
        assert_eq!(weapon.ammo(), 80);
        assert!(weapon.is_disabled());
        assert!(!weapon.is_rearming());
        assert_eq!(weapon.save().rearming, Some(true));
    }

    #[test]
    fn test_malformed_fields_are_ignored() {
        let record = CraftWeaponRecord::from_toml_str(
            "type = \"STR_CANNON_UC\"\nammo = \"lots\"\nrearming = 3\ndisabled = false\n",
        )
        .unwrap();
        assert_eq!(record.ammo, None);
        assert_eq!(record.rearming, None);
        assert_eq!(record.disabled, Some(false));
    }

    #[test]
    fn test_missing_type_is_an_error() {
        assert!(matches!(
            CraftWeaponRecord::from_toml_str("ammo = 5\n"),
            Err(ArmamentError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_instantiate_tolerates_out_of_range_ammo() {
        let registry = registry();
        let record = CraftWeaponRecord::from_toml_str("type = \"STR_CANNON_UC\"\nammo = 999\nrearming = true\n").unwrap();
        let weapon = record.instantiate(&registry).unwrap();
        assert_eq!(weapon.ammo(), 999);
        assert!(weapon.is_rearming());
    }

    #[test]
    fn test_instantiate_unknown_type() {
        let registry = registry();
        let record = CraftWeaponRecord::from_toml_str("type = \"STR_GAUSS_UC\"\n").unwrap();
        assert!(matches!(
            record.instantiate(&registry),
            Err(ArmamentError::UnknownWeapon(_))
        ));
    }
}
