//! Static craft weapon and item definitions
//!
//! A `WeaponRule` is shared by every craft weapon of the same type. It is
//! owned by the `WeaponRegistry` and borrowed by each `CraftWeapon`.

use serde::{Deserialize, Serialize};

use crate::core::types::{ItemId, WeaponTypeId};

/// Flight behaviour category of a craft projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectileKind {
    CannonRound,
    Missile,
    LaserBeam,
    PlasmaBeam,
    StingrayMissile,
    AvalancheMissile,
    FusionBall,
}

impl ProjectileKind {
    /// Beams are drawn instantly; everything else travels
    pub fn is_beam(&self) -> bool {
        matches!(self, ProjectileKind::LaserBeam | ProjectileKind::PlasmaBeam)
    }
}

/// Ballistic and damage parameters copied into every fired projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileRule {
    pub kind: ProjectileKind,
    pub speed: i32,
    pub accuracy: i32,
    pub damage: i32,
    pub range: i32,
    /// Percentage applied to damage against shields
    #[serde(default = "default_shield_damage_modifier")]
    pub shield_damage_modifier: i32,
}

fn default_shield_damage_modifier() -> i32 {
    100
}

/// An item referenced by a craft weapon, either its launcher or its clip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRule {
    pub id: ItemId,
    /// Rounds per clip; 0 for items that are not ammunition
    #[serde(default)]
    pub clip_size: i32,
    /// Damage formula input used when the weapon fires with a unified formula
    #[serde(default)]
    pub power: i32,
}

impl ItemRule {
    pub fn new(id: impl Into<String>, clip_size: i32, power: i32) -> Self {
        Self {
            id: ItemId::new(id),
            clip_size,
            power,
        }
    }
}

/// Definition of a craft weapon type
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponRule {
    pub id: WeaponTypeId,
    pub ammo_max: i32,
    pub rearm_rate: i32,
    pub statistical_bullet_saving: bool,
    pub unified_damage_formula: bool,
    pub launcher: Option<ItemRule>,
    pub clip: Option<ItemRule>,
    pub projectile: ProjectileRule,
}

impl WeaponRule {
    /// Rounds per clip of this weapon's own ammunition, 0 when rearming is unitless
    pub fn clip_size(&self) -> i32 {
        self.clip.as_ref().map_or(0, |clip| clip.clip_size)
    }

    pub fn launcher_item(&self) -> Option<&ItemRule> {
        self.launcher.as_ref()
    }

    pub fn clip_item(&self) -> Option<&ItemRule> {
        self.clip.as_ref()
    }

    /// Check every numeric field, collecting all problems
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.ammo_max < 0 {
            errors.push(format!("{}: ammo_max ({}) must not be negative", self.id, self.ammo_max));
        }
        if self.rearm_rate <= 0 {
            errors.push(format!("{}: rearm_rate ({}) must be positive", self.id, self.rearm_rate));
        }
        for item in self.launcher.iter().chain(self.clip.iter()) {
            if item.clip_size < 0 {
                errors.push(format!(
                    "{}: item {} has negative clip_size ({})",
                    self.id, item.id, item.clip_size
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
