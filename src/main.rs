//! Craft Armament - rearm driver
//!
//! Loads craft weapon rules, mounts the requested weapons on a craft and
//! ticks the rearm pass against a base store until the craft is ready or the
//! supply runs out. Prints the per-tick report and the resulting save records.

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use craft_armament::core::config::ArmamentConfig;
use craft_armament::core::error::{ArmamentError, Result};
use craft_armament::core::types::ItemId;
use craft_armament::{Craft, CraftWeapon, ItemStore, RearmReport, WeaponRegistry};

/// Rearm a craft from base stores
#[derive(Parser, Debug)]
#[command(name = "craft-armament")]
#[command(about = "Simulate craft weapon rearming against a finite ammunition store")]
struct Args {
    /// Config file (TOML); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rules file or directory, overrides the config
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Random seed for statistical bullet saving
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum rearm ticks, overrides the config
    #[arg(long)]
    ticks: Option<u64>,

    /// Weapon to mount as TYPE or TYPE=AMMO (repeatable)
    #[arg(long = "weapon", value_parser = parse_weapon)]
    weapons: Vec<(String, i32)>,

    /// Base stock as ITEM=COUNT (repeatable)
    #[arg(long = "stock", value_parser = parse_stock)]
    stock: Vec<(String, i32)>,

    /// List the loaded weapon types and exit
    #[arg(long)]
    list: bool,
}

fn parse_weapon(arg: &str) -> std::result::Result<(String, i32), String> {
    match arg.split_once('=') {
        None => Ok((arg.to_string(), 0)),
        Some((id, ammo)) => ammo
            .trim()
            .parse::<i32>()
            .map(|ammo| (id.trim().to_string(), ammo))
            .map_err(|e| format!("invalid ammo in '{}': {}", arg, e)),
    }
}

fn parse_stock(arg: &str) -> std::result::Result<(String, i32), String> {
    let (id, count) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected ITEM=COUNT, got '{}'", arg))?;
    let count = count
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid count in '{}': {}", arg, e))?;
    Ok((id.trim().to_string(), count))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ArmamentConfig::load(path)?,
        None => ArmamentConfig::default(),
    };
    if let Some(rules) = args.rules.clone() {
        config.rules_path = rules;
    }
    if let Some(ticks) = args.ticks {
        config.max_rearm_ticks = ticks;
    }
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .init();

    let mut registry = WeaponRegistry::new();
    registry.load_path(&config.rules_path)?;
    tracing::info!(
        "Loaded {} craft weapon types from {}",
        registry.len(),
        config.rules_path.display()
    );

    if args.list {
        for rule in registry.weapons() {
            println!(
                "{:<24} ammo {:>4}  rate {:>3}  clip {:>3}  {:?}",
                rule.id.as_str(),
                rule.ammo_max,
                rule.rearm_rate,
                rule.clip_size(),
                rule.projectile.kind
            );
        }
        return Ok(());
    }

    if args.weapons.is_empty() {
        return Err(ArmamentError::InvalidConfig(
            "no weapons to rearm, pass --weapon TYPE[=AMMO]".into(),
        ));
    }

    let mut craft = Craft::new("CRAFT-1", args.weapons.len());
    for (slot, (id, ammo)) in args.weapons.iter().enumerate() {
        let rules = registry.require_weapon(id)?;
        if craft.equip(slot, CraftWeapon::new(rules, *ammo)).is_err() {
            tracing::error!("Hardpoint {} missing on {}", slot, craft.id);
        }
    }

    let mut store = ItemStore::new();
    for (item, count) in &args.stock {
        store.add(ItemId::new(item.as_str()), *count);
    }

    let seed = args.seed.or(config.seed).unwrap_or_else(|| rand::random());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    tracing::info!("Rearming {} with seed {}", craft.id, seed);

    craft.begin_rearm();
    let reports = craft.rearm_until_done(&mut store, &mut rng, config.max_rearm_ticks);

    for (tick, report) in reports.iter().enumerate() {
        match report {
            RearmReport::Rearmed { slot, clips_used } => {
                println!("tick {:>4}: slot {} rearmed, {} clips used", tick + 1, slot, clips_used)
            }
            RearmReport::OutOfAmmo { slot, clip } => {
                println!("tick {:>4}: slot {} out of {}", tick + 1, slot, clip)
            }
            RearmReport::Idle => {}
        }
    }
    if craft.is_rearming() {
        tracing::warn!(
            "{} still rearming after {} ticks",
            craft.id,
            config.max_rearm_ticks
        );
    }

    println!();
    for (slot, weapon) in craft.weapons() {
        let projectile = weapon.fire();
        println!(
            "slot {}: {} ammo {}/{} ({} clips loaded), fires {:?} dmg {} range {}",
            slot,
            weapon.rules().id,
            weapon.ammo(),
            weapon.rules().ammo_max,
            weapon.clips_loaded(),
            projectile.kind,
            projectile.damage,
            projectile.range
        );
    }

    println!();
    for (_, weapon) in craft.weapons() {
        println!("[[weapons]]");
        print!("{}", weapon.save().to_toml_string()?);
    }

    Ok(())
}
