//! Projectiles handed to the interception simulation

use crate::rules::{ItemRule, ProjectileKind, ProjectileRule};

/// A projectile fired by a craft weapon
///
/// Damage is not resolved here. When the weapon uses the unified damage
/// formula, `damage_item` names the item the combat simulation should
/// resolve damage against.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile<'a> {
    pub kind: ProjectileKind,
    pub speed: i32,
    pub accuracy: i32,
    pub damage: i32,
    pub range: i32,
    pub shield_damage_modifier: i32,
    pub damage_item: Option<&'a ItemRule>,
}

impl<'a> Projectile<'a> {
    /// Build a projectile from the weapon's ballistic parameters
    pub fn from_rule(rule: &ProjectileRule, damage_item: Option<&'a ItemRule>) -> Self {
        Self {
            kind: rule.kind,
            speed: rule.speed,
            accuracy: rule.accuracy,
            damage: rule.damage,
            range: rule.range,
            shield_damage_modifier: rule.shield_damage_modifier,
            damage_item,
        }
    }

    /// True when damage comes from an item rather than the flat `damage` value
    pub fn uses_item_damage(&self) -> bool {
        self.damage_item.is_some()
    }
}
