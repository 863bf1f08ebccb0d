//! Craft Armament - ammunition, rearming and projectiles for craft weapons

pub mod combat;
pub mod core;
pub mod logistics;
pub mod rules;
pub mod savegame;

pub use combat::{CraftWeapon, Projectile, RearmStep, ScriptedRolls, UniformSource};
pub use crate::core::error::{ArmamentError, Result};
pub use logistics::{Craft, ItemStore, RearmReport};
pub use rules::{ItemRule, ProjectileKind, ProjectileRule, WeaponRegistry, WeaponRule};
pub use savegame::CraftWeaponRecord;
