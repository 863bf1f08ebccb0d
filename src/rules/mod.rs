//! Craft weapon rules loaded from TOML

pub mod craft_weapon;
mod registry;

pub use craft_weapon::{ItemRule, ProjectileKind, ProjectileRule, WeaponRule};
pub use registry::WeaponRegistry;
