//! Sparse save records for craft weapons

mod weapon_record;

pub use weapon_record::CraftWeaponRecord;
