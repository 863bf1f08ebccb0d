//! Craft hardpoints and the rearm pass
//!
//! A craft docked at a base services one weapon per tick: the first weapon
//! that still reports `is_rearming()` draws clips from the base stores.

use crate::combat::{CraftWeapon, UniformSource};
use crate::core::types::{ItemId, Tick};
use crate::logistics::stores::ItemStore;

/// What happened during one rearm tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RearmReport {
    /// No weapon needed ammo
    Idle,
    /// The weapon in `slot` was rearmed, debiting `clips_used` from stores
    Rearmed { slot: usize, clips_used: i32 },
    /// The weapon in `slot` could not be topped up; its rearming stops
    OutOfAmmo { slot: usize, clip: ItemId },
}

/// A craft with a fixed number of weapon hardpoints
#[derive(Debug, Clone)]
pub struct Craft<'a> {
    pub id: String,
    hardpoints: Vec<Option<CraftWeapon<'a>>>,
}

impl<'a> Craft<'a> {
    /// Create a craft with `hardpoints` empty weapon slots
    pub fn new(id: impl Into<String>, hardpoints: usize) -> Self {
        Self {
            id: id.into(),
            hardpoints: vec![None; hardpoints],
        }
    }

    pub fn hardpoints(&self) -> usize {
        self.hardpoints.len()
    }

    /// Mount a weapon, returning whatever was in the slot before
    ///
    /// Returns `Err(weapon)` when the slot does not exist.
    pub fn equip(
        &mut self,
        slot: usize,
        weapon: CraftWeapon<'a>,
    ) -> Result<Option<CraftWeapon<'a>>, CraftWeapon<'a>> {
        match self.hardpoints.get_mut(slot) {
            Some(hardpoint) => Ok(hardpoint.replace(weapon)),
            None => Err(weapon),
        }
    }

    pub fn unequip(&mut self, slot: usize) -> Option<CraftWeapon<'a>> {
        self.hardpoints.get_mut(slot).and_then(Option::take)
    }

    pub fn weapon(&self, slot: usize) -> Option<&CraftWeapon<'a>> {
        self.hardpoints.get(slot).and_then(Option::as_ref)
    }

    pub fn weapon_mut(&mut self, slot: usize) -> Option<&mut CraftWeapon<'a>> {
        self.hardpoints.get_mut(slot).and_then(Option::as_mut)
    }

    /// Mounted weapons with their slot index
    pub fn weapons(&self) -> impl Iterator<Item = (usize, &CraftWeapon<'a>)> {
        self.hardpoints
            .iter()
            .enumerate()
            .filter_map(|(slot, w)| w.as_ref().map(|w| (slot, w)))
    }

    /// Any mounted weapon still waiting for ammo
    pub fn is_rearming(&self) -> bool {
        self.weapons().any(|(_, w)| w.is_rearming())
    }

    /// Flag every mounted weapon below capacity for rearming
    ///
    /// Called when the craft returns to base.
    pub fn begin_rearm(&mut self) {
        for weapon in self.hardpoints.iter_mut().flatten() {
            let needs_ammo = !weapon.is_full();
            weapon.set_rearming(needs_ammo);
        }
    }

    /// Run one rearm tick against the base stores
    pub fn rearm<R>(&mut self, store: &mut ItemStore, rng: &mut R) -> RearmReport
    where
        R: UniformSource + ?Sized,
    {
        let Some((slot, weapon)) = self
            .hardpoints
            .iter_mut()
            .enumerate()
            .find_map(|(slot, w)| w.as_mut().filter(|w| w.is_rearming()).map(|w| (slot, w)))
        else {
            return RearmReport::Idle;
        };

        let Some(clip) = weapon.rules().clip_item() else {
            weapon.rearm(0, 0, rng);
            return RearmReport::Rearmed { slot, clips_used: 0 };
        };

        let available = store.get(&clip.id);
        if available <= 0 {
            tracing::warn!("{}: no {} in stores, weapon {} not rearmed", self.id, clip.id, slot);
            weapon.set_rearming(false);
            return RearmReport::OutOfAmmo {
                slot,
                clip: clip.id.clone(),
            };
        }

        let used = weapon.rearm(available, clip.clip_size, rng);
        store.remove(&clip.id, used);

        if used == available && weapon.is_rearming() {
            tracing::warn!("{}: ran out of {} while rearming weapon {}", self.id, clip.id, slot);
            weapon.set_rearming(false);
            return RearmReport::OutOfAmmo {
                slot,
                clip: clip.id.clone(),
            };
        }

        tracing::debug!(
            craft = %self.id,
            slot,
            clips_used = used,
            ammo = weapon.ammo(),
            "rearmed weapon"
        );
        RearmReport::Rearmed { slot, clips_used: used }
    }

    /// Tick `rearm` until no weapon needs ammo or `max_ticks` have passed
    pub fn rearm_until_done<R>(
        &mut self,
        store: &mut ItemStore,
        rng: &mut R,
        max_ticks: Tick,
    ) -> Vec<RearmReport>
    where
        R: UniformSource + ?Sized,
    {
        let mut reports = Vec::new();
        for _ in 0..max_ticks {
            let report = self.rearm(store, rng);
            if report == RearmReport::Idle {
                break;
            }
            reports.push(report);
        }
        reports
    }
}
