//! Craft weapon ammunition state
//!
//! One `CraftWeapon` exists per equipped hardpoint. It tracks the rounds
//! loaded, whether the weapon is waiting for resupply, and whether it has
//! been taken offline. Everything static comes from the borrowed `WeaponRule`.

use crate::combat::projectile::Projectile;
use crate::combat::rng::UniformSource;
use crate::rules::WeaponRule;

/// Result of a single rearm step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RearmStep {
    /// Rounds actually added to the weapon after clamping
    pub ammo_loaded: i32,
    /// Whole clips drawn from the pool before any saving
    pub clips_drawn: i32,
    /// Clips refunded by statistical bullet saving, 0 or 1
    pub clips_saved: i32,
}

impl RearmStep {
    /// Clips the supplying pool should actually be debited
    pub fn clips_used(&self) -> i32 {
        self.clips_drawn - self.clips_saved
    }
}

/// Ammunition state of one equipped craft weapon
#[derive(Debug, Clone, PartialEq)]
pub struct CraftWeapon<'a> {
    rules: &'a WeaponRule,
    ammo: i32,
    rearming: bool,
    disabled: bool,
}

impl<'a> CraftWeapon<'a> {
    /// Create a weapon of the given type
    ///
    /// `ammo` is taken as-is, even when out of range, so that saved games
    /// load unchanged. The next mutation clamps it.
    pub fn new(rules: &'a WeaponRule, ammo: i32) -> Self {
        Self {
            rules,
            ammo,
            rearming: false,
            disabled: false,
        }
    }

    pub fn rules(&self) -> &'a WeaponRule {
        self.rules
    }

    pub fn ammo(&self) -> i32 {
        self.ammo
    }

    /// Change the loaded ammo, clamping into `[0, ammo_max]`
    ///
    /// Returns false if the weapon ran out of ammo (the value was negative).
    pub fn set_ammo(&mut self, ammo: i32) -> bool {
        self.ammo = ammo;
        if self.ammo < 0 {
            self.ammo = 0;
            return false;
        }
        if self.ammo > self.rules.ammo_max {
            self.ammo = self.rules.ammo_max;
        }
        true
    }

    pub fn is_full(&self) -> bool {
        self.ammo >= self.rules.ammo_max
    }

    /// Whether the weapon is waiting for ammo; a disabled weapon never is
    pub fn is_rearming(&self) -> bool {
        if self.disabled {
            return false;
        }
        self.rearming
    }

    /// Stored rearming flag, regardless of `disabled`
    pub fn rearming_flag(&self) -> bool {
        self.rearming
    }

    /// Overwrite ammo without clamping, for restoring saved state
    pub(crate) fn restore_ammo(&mut self, ammo: i32) {
        self.ammo = ammo;
    }

    pub fn set_rearming(&mut self, rearming: bool) {
        self.rearming = rearming;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Take the weapon offline or back online; the rearming flag is kept
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Rearm from a pool of `available` clips holding `clip_size` rounds each
    ///
    /// Returns the number of clips the pool should be debited. A `clip_size`
    /// of 0 or less means the weapon reloads without clips: it gains a full
    /// `rearm_rate` and consumes nothing.
    pub fn rearm<R>(&mut self, available: i32, clip_size: i32, rng: &mut R) -> i32
    where
        R: UniformSource + ?Sized,
    {
        self.rearm_step(available, clip_size, rng).clips_used()
    }

    /// Same as `rearm`, reporting the full breakdown of the step
    pub fn rearm_step<R>(&mut self, available: i32, clip_size: i32, rng: &mut R) -> RearmStep
    where
        R: UniformSource + ?Sized,
    {
        let rules = self.rules;
        let mut ammo_used = rules.rearm_rate;
        let mut clips_drawn = 0;
        let mut clips_saved = 0;

        if clip_size > 0 {
            // +(clip_size - 1) rounds the capacity gap up to a whole clip
            let gap = rules
                .ammo_max
                .saturating_sub(self.ammo)
                .saturating_add(clip_size - 1);
            let needed = (rules.rearm_rate.min(gap) / clip_size).max(0);
            clips_drawn = needed.min(available.max(0));
            ammo_used = clips_drawn * clip_size;

            // Only a clip actually drawn this step can be refunded
            if clip_size > 1 && clips_drawn > 0 && rules.statistical_bullet_saving {
                let overused = self.ammo.saturating_add(ammo_used).saturating_sub(rules.ammo_max);
                if overused > 0 && rng.uniform_int(0, clip_size - 1) < overused {
                    clips_saved = 1;
                }
            }
        }

        let before = self.ammo;
        self.set_ammo(self.ammo.saturating_add(ammo_used));
        self.rearming = self.ammo < rules.ammo_max;

        let step = RearmStep {
            ammo_loaded: self.ammo.saturating_sub(before),
            clips_drawn,
            clips_saved,
        };
        tracing::trace!(
            weapon = %rules.id,
            available,
            clip_size,
            clips_drawn,
            clips_saved,
            ammo = self.ammo,
            rearming = self.rearming,
            "rearm step"
        );
        step
    }

    /// Fire one projectile
    ///
    /// Ammo is not checked or spent here; the interception loop decides
    /// whether the weapon may fire and debits ammo itself.
    pub fn fire(&self) -> Projectile<'a> {
        let rules = self.rules;
        let damage_item = if rules.unified_damage_formula {
            rules.clip_item().or(rules.launcher_item())
        } else {
            None
        };
        Projectile::from_rule(&rules.projectile, damage_item)
    }

    /// Number of whole clips currently loaded
    ///
    /// Without a clip item this falls back to dividing by the rearm rate,
    /// which approximates "rearm steps worth of ammo" rather than clips.
    pub fn clips_loaded(&self) -> i32 {
        match self.rules.clip_item() {
            Some(clip) if clip.clip_size > 0 => self.ammo.div_euclid(clip.clip_size),
            _ if self.rules.rearm_rate > 0 => self.ammo.div_euclid(self.rules.rearm_rate),
            _ => 0,
        }
    }
}
