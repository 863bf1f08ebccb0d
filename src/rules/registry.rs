//! Weapon registry for loading craft weapon rules.
//!
//! The `WeaponRegistry` owns every `WeaponRule` and `ItemRule` for the lifetime
//! of a simulation. Craft weapons borrow their rule from here, so the registry
//! must outlive every `CraftWeapon` created against it.

use ahash::AHashMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::craft_weapon::{ItemRule, ProjectileRule, WeaponRule};
use crate::core::error::{ArmamentError, Result};
use crate::core::types::{ItemId, WeaponTypeId};

/// On-disk layout of a rules file
#[derive(Debug, Default, Deserialize)]
struct RulesFile {
    #[serde(default)]
    items: Vec<ItemRule>,
    #[serde(default)]
    weapons: Vec<WeaponDef>,
}

/// Weapon entry as written in TOML, with items referenced by id
#[derive(Debug, Deserialize)]
struct WeaponDef {
    id: WeaponTypeId,
    ammo_max: i32,
    rearm_rate: i32,
    #[serde(default)]
    statistical_bullet_saving: bool,
    #[serde(default)]
    unified_damage_formula: bool,
    #[serde(default)]
    launcher: Option<ItemId>,
    #[serde(default)]
    clip: Option<ItemId>,
    projectile: ProjectileRule,
}

/// Registry of craft weapon and item rules
#[derive(Debug, Default)]
pub struct WeaponRegistry {
    weapons: AHashMap<WeaponTypeId, WeaponRule>,
    items: AHashMap<ItemId, ItemRule>,
}

impl WeaponRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item, replacing any previous item with the same id
    pub fn register_item(&mut self, item: ItemRule) {
        self.items.insert(item.id.clone(), item);
    }

    /// Register a fully resolved weapon rule after validating it
    pub fn register_weapon(&mut self, rule: WeaponRule) -> Result<()> {
        rule.validate().map_err(ArmamentError::InvalidRule)?;
        self.weapons.insert(rule.id.clone(), rule);
        Ok(())
    }

    /// Load rules from a TOML string
    pub fn load_str(&mut self, content: &str) -> Result<usize> {
        let file: RulesFile = toml::from_str(content)?;
        self.register_files(vec![file])
    }

    /// Load rules from a single TOML file
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let file = read_rules_file(path)?;
        let count = self.register_files(vec![file])?;
        tracing::debug!("Loaded {} craft weapons from {}", count, path.display());
        Ok(count)
    }

    /// Load all .toml files from a directory recursively
    ///
    /// Items from every file are registered before any weapon is resolved,
    /// so a weapon may reference an item declared in a sibling file.
    pub fn load_directory(&mut self, path: &Path) -> Result<usize> {
        let mut paths = Vec::new();
        collect_toml_files(path, &mut paths)?;
        paths.sort();

        let files = paths
            .iter()
            .map(|p| read_rules_file(p))
            .collect::<Result<Vec<_>>>()?;
        let count = self.register_files(files)?;
        tracing::debug!(
            "Loaded {} craft weapons from {} files under {}",
            count,
            paths.len(),
            path.display()
        );
        Ok(count)
    }

    /// Load from either a file or a directory
    pub fn load_path(&mut self, path: &Path) -> Result<usize> {
        if path.is_dir() {
            self.load_directory(path)
        } else {
            self.load_file(path)
        }
    }

    fn register_files(&mut self, files: Vec<RulesFile>) -> Result<usize> {
        let mut defs = Vec::new();
        for file in files {
            for item in file.items {
                self.register_item(item);
            }
            defs.extend(file.weapons);
        }

        let mut errors = Vec::new();
        let mut resolved = Vec::with_capacity(defs.len());
        for def in defs {
            let rule = self.resolve(def)?;
            match rule.validate() {
                Ok(()) => resolved.push(rule),
                Err(mut e) => errors.append(&mut e),
            }
        }
        if !errors.is_empty() {
            return Err(ArmamentError::InvalidRule(errors));
        }

        let count = resolved.len();
        for rule in resolved {
            self.weapons.insert(rule.id.clone(), rule);
        }
        Ok(count)
    }

    fn resolve(&self, def: WeaponDef) -> Result<WeaponRule> {
        let launcher = self.resolve_item(&def.id, def.launcher.as_ref())?;
        let clip = self.resolve_item(&def.id, def.clip.as_ref())?;

        Ok(WeaponRule {
            id: def.id,
            ammo_max: def.ammo_max,
            rearm_rate: def.rearm_rate,
            statistical_bullet_saving: def.statistical_bullet_saving,
            unified_damage_formula: def.unified_damage_formula,
            launcher,
            clip,
            projectile: def.projectile,
        })
    }

    fn resolve_item(&self, weapon: &WeaponTypeId, item: Option<&ItemId>) -> Result<Option<ItemRule>> {
        let Some(id) = item else {
            return Ok(None);
        };
        self.items
            .get(id)
            .cloned()
            .map(Some)
            .ok_or_else(|| ArmamentError::UnknownItem {
                weapon: weapon.to_string(),
                item: id.to_string(),
            })
    }

    /// Get a weapon rule by type id
    pub fn weapon(&self, id: &str) -> Option<&WeaponRule> {
        self.weapons.get(&WeaponTypeId::new(id))
    }

    /// Get a weapon rule, failing with `UnknownWeapon`
    pub fn require_weapon(&self, id: &str) -> Result<&WeaponRule> {
        self.weapon(id)
            .ok_or_else(|| ArmamentError::UnknownWeapon(id.to_string()))
    }

    /// Get an item rule by id
    pub fn item(&self, id: &str) -> Option<&ItemRule> {
        self.items.get(&ItemId::new(id))
    }

    /// All weapon rules, sorted by id
    pub fn weapons(&self) -> Vec<&WeaponRule> {
        let mut rules: Vec<&WeaponRule> = self.weapons.values().collect();
        rules.sort_by(|a, b| a.id.cmp(&b.id));
        rules
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

fn read_rules_file(path: &Path) -> Result<RulesFile> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn collect_toml_files(path: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(path)? {
        let entry_path = entry?.path();
        if entry_path.is_dir() {
            collect_toml_files(&entry_path, out)?;
        } else if entry_path.extension().map_or(false, |ext| ext == "toml") {
            out.push(entry_path);
        }
    }
    Ok(())
}
