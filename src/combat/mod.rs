pub mod craft_weapon;
pub mod projectile;
pub mod rng;

pub use craft_weapon::{CraftWeapon, RearmStep};
pub use projectile::Projectile;
pub use rng::{ScriptedRolls, UniformSource};
