//! Skirmish - a small scripted engagement run through the rules engine
//!
//! Sets up two lances on a wooded map, declares a turn of fire, and
//! prints every to-hit breakdown and damage outcome. Useful for eyeballing
//! rule behavior without a front end.

use ironhex::attack::context::ArtilleryFire;
use ironhex::physical::{evaluate_physical, resolve_physical, PhysicalContext, PhysicalKind};
use ironhex::resolve::Dice;
use ironhex::unit::{AmmoBin, Location, Mount, MovementRecord};
use ironhex::{
    evaluate_attack, resolve_hits, AttackContext, AttackTarget, Catalog, GameState, HexCoord, Map,
    RuleOptions, SeededDice, Side, Terrain, Unit, UnitKind,
};

fn main() -> ironhex::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("ironhex=debug")
        .init();

    tracing::info!("Skirmish starting");

    let mut map = Map::new(30, 30);
    map.set_terrain(HexCoord::new(4, 0), Terrain::LightWoods);
    map.set_terrain(HexCoord::new(9, 0), Terrain::HeavyWoods);

    let mut state = GameState::new(map, Catalog::standard(), RuleOptions::default());

    let mut lancer = Unit::new(Side(0), "Lancer", UnitKind::Walker, 55);
    lancer.mounts.push(Mount::new("Medium Laser", Location::RightArm));
    lancer.mounts.push(Mount::new("LRM-15", Location::LeftTorso));
    lancer.ammo.push(AmmoBin::new("LRM Ammo", 8));
    lancer.position = HexCoord::new(0, 0);

    let mut battery = Unit::new(Side(0), "Battery", UnitKind::Tank, 60);
    battery.mounts.push(Mount::new("Sniper Cannon", Location::Body));
    battery.ammo.push(AmmoBin::new("Sniper Shells", 10));
    battery.position = HexCoord::new(0, 3);

    let mut raider = Unit::new(Side(1), "Raider", UnitKind::Walker, 50);
    raider.position = HexCoord::new(7, 0);
    raider.movement = MovementRecord::ran(6);

    let mut sentry = Unit::new(Side(1), "Sentry", UnitKind::Tank, 40);
    sentry.position = HexCoord::new(8, 1);

    let lancer_id = state.add_unit(lancer);
    let battery_id = state.add_unit(battery);
    let raider_id = state.add_unit(raider);
    let sentry_id = state.add_unit(sentry);

    let mut dice = SeededDice::new(2026);

    println!("=== Weapon attack phase ===");
    let declarations = vec![
        AttackContext::weapon_attack(lancer_id, AttackTarget::Unit(raider_id), 0),
        AttackContext::weapon_attack(lancer_id, AttackTarget::Unit(sentry_id), 1).with_ammo(0),
        AttackContext::weapon_attack(battery_id, AttackTarget::Hex(HexCoord::new(7, 0)), 0)
            .with_ammo(0)
            .as_artillery(ArtilleryFire::Direct),
    ];

    for ctx in &declarations {
        let tohit = evaluate_attack(&state, ctx)?;
        println!("to-hit: {}", tohit.describe());
        let roll = dice.two_d6();
        let outcomes = resolve_hits(&mut state, ctx, &tohit, roll, &mut dice)?;
        for outcome in &outcomes {
            println!("  rolled {roll}: {outcome:?}");
        }
    }

    println!("=== Physical attack phase ===");
    let kick = PhysicalContext::new(raider_id, lancer_id);
    // The raider closes in for a kick if it survived the turn
    if !state.unit(raider_id)?.status.destroyed {
        state.unit_mut(raider_id)?.position = HexCoord::new(1, 0);
        state.unit_mut(raider_id)?.facing = ironhex::Facing::West;
        let tohit = evaluate_physical(&state, PhysicalKind::Kick, &kick)?;
        println!("kick to-hit: {}", tohit.describe());
        let roll = dice.two_d6();
        let outcomes =
            resolve_physical(&mut state, PhysicalKind::Kick, &kick, &tohit, roll, &mut dice)?;
        for outcome in &outcomes {
            println!("  rolled {roll}: {outcome:?}");
        }
    }

    println!("=== After action ===");
    for unit in state.units() {
        println!(
            "{}: armor {}, heat {}, kills {}{}",
            unit.name,
            unit.armor,
            unit.heat,
            unit.kills,
            if unit.status.destroyed { " [destroyed]" } else { "" }
        );
    }

    Ok(())
}
