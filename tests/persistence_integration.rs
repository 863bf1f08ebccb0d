//! Save/load integration tests for craft weapons

use craft_armament::{ArmamentError, CraftWeapon, CraftWeaponRecord, ScriptedRolls, WeaponRegistry};
use proptest::prelude::*;
use std::path::Path;

fn registry() -> WeaponRegistry {
    let mut registry = WeaponRegistry::new();
    registry
        .load_file(&Path::new(env!("CARGO_MANIFEST_DIR")).join("data/craft_weapons.toml"))
        .unwrap();
    registry
}

#[test]
fn test_save_then_reload_restores_state() {
    let registry = registry();
    let mut weapon = CraftWeapon::new(registry.require_weapon("STR_CANNON_UC").unwrap(), 0);
    weapon.set_ammo(130);
    weapon.set_rearming(true);

    let text = weapon.save().to_toml_string().unwrap();
    let restored = CraftWeaponRecord::from_toml_str(&text)
        .unwrap()
        .instantiate(&registry)
        .unwrap();

    assert_eq!(restored.rules().id.as_str(), "STR_CANNON_UC");
    assert_eq!(restored.ammo(), 130);
    assert!(restored.is_rearming());
    assert!(!restored.is_disabled());
}

#[test]
fn test_sparse_record_only_has_type_and_ammo() {
    let registry = registry();
    let weapon = CraftWeapon::new(registry.require_weapon("STR_STINGRAY_UC").unwrap(), 6);
    let record = weapon.save();
    assert_eq!(record.ammo, Some(6));
    assert_eq!(record.rearming, None);
    assert_eq!(record.disabled, None);
}

#[test]
fn test_out_of_range_save_is_corrected_by_next_rearm() {
    let registry = registry();
    let record = CraftWeaponRecord::from_toml_str("type = \"STR_STINGRAY_UC\"\nammo = 40\n").unwrap();
    let mut weapon = record.instantiate(&registry).unwrap();
    assert_eq!(weapon.ammo(), 40);

    assert_eq!(weapon.rearm(5, 1, &mut ScriptedRolls::default()), 0);
    assert_eq!(weapon.ammo(), 6);
    assert!(!weapon.is_rearming());
}

#[test]
fn test_unknown_type_in_save() {
    let registry = registry();
    let record = CraftWeaponRecord::from_toml_str("type = \"STR_DISRUPTOR_UC\"\nammo = 1\n").unwrap();
    assert!(matches!(
        record.instantiate(&registry),
        Err(ArmamentError::UnknownWeapon(id)) if id == "STR_DISRUPTOR_UC"
    ));
}

proptest! {
    #[test]
    fn prop_save_load_preserves_state(
        ammo in 0i32..=200,
        rearming in any::<bool>(),
        disabled in any::<bool>(),
    ) {
        let registry = registry();
        let rules = registry.require_weapon("STR_CANNON_UC").unwrap();
        let mut weapon = CraftWeapon::new(rules, ammo);
        weapon.set_rearming(rearming);
        weapon.set_disabled(disabled);

        let text = weapon.save().to_toml_string().unwrap();
        prop_assert_eq!(text.contains("rearming"), rearming);
        prop_assert_eq!(text.contains("disabled"), disabled);

        let mut restored = CraftWeapon::new(rules, 0);
        restored.load(&CraftWeaponRecord::from_toml_str(&text).unwrap());
        prop_assert_eq!(restored, weapon);
    }
}
