//! Runelight Headless Simulation Harness
//!
//! Generates a seeded world, drives the tick loop and a scripted play
//! session, and checks the simulation's invariants along the way.
//! Runs entirely in-process: no rendering, no input, no audio.
//!
//! Usage:
//!   cargo run -p runelight-simtest
//!   cargo run -p runelight-simtest -- --verbose
//!   cargo run -p runelight-simtest -- --seed 7 --ticks 5000
//!   cargo run -p runelight-simtest -- --config my-run.json

use std::path::PathBuf;

use clap::Parser;
use runelight_core::prelude::*;
use runelight_logic::geometry::Cell;
use runelight_logic::pathfinding::find_path;
use runelight_logic::skills::Skill;
use runelight_logic::templates::ResourceKind;
use runelight_logic::tiles::TileType;
use serde::Deserialize;

// ── Harness configuration (defaults ship with the repo) ─────────────────
const DEFAULT_CONFIG_JSON: &str = include_str!("../../../data/harness.json");

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HarnessConfig {
    ticks: u32,
    world: WorldConfig,
    simulation: SimulationConfig,
}

#[derive(Debug, thiserror::Error)]
enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Headless simulation harness for Runelight
#[derive(Debug, Parser)]
#[command(name = "runelight-simtest", about = "Headless simulation harness for Runelight", long_about = None)]
struct Cli {
    /// Print every check and raise the default log level to debug
    #[arg(long)]
    verbose: bool,

    /// World seed, overriding the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks for the free-running loop, overriding the config file
    #[arg(long)]
    ticks: Option<u32>,

    /// Harness config JSON; the bundled `data/harness.json` otherwise
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<HarnessConfig, ConfigError> {
    let mut config: HarnessConfig = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&text)?
        }
        None => serde_json::from_str(DEFAULT_CONFIG_JSON)?,
    };

    if let Some(seed) = cli.seed {
        config.world.seed = Some(seed);
    }
    if let Some(ticks) = cli.ticks {
        config.ticks = ticks;
    }
    if config.world.seed.is_none() {
        config.world.seed = Some(42);
    }
    Ok(config)
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn check(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };
    let config = &config;
    log::debug!("harness config: {config:?}");
    println!(
        "=== Runelight Simulation Harness (seed {}, {} ticks) ===\n",
        config.world.seed.unwrap_or_default(),
        config.ticks
    );

    let mut results = Vec::new();

    // 1. World generation
    results.extend(validate_generation(config));

    // 2. Pathfinding on open and generated maps
    results.extend(validate_pathfinding(config));

    // 3. Free-running tick loop invariants
    results.extend(validate_tick_loop(config));

    // 4. Scripted play session
    results.extend(validate_session(config));

    // 5. Determinism
    results.extend(validate_determinism(config));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || cli.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn new_engine(config: &HarnessConfig) -> SimulationEngine {
    let mut engine = SimulationEngine::new(config.simulation.clone());
    engine.generate(config.world.clone());
    engine
}

// ── 1. World Generation ─────────────────────────────────────────────────

fn validate_generation(config: &HarnessConfig) -> Vec<TestResult> {
    println!("--- World Generation ---");
    let engine = new_engine(config);
    let grid = &engine.grid;
    let c = grid.town_center();
    let mut results = Vec::new();

    let counts = grid.tile_counts();
    let summary: Vec<String> = TileType::ALL
        .iter()
        .zip(counts)
        .map(|(t, n)| format!("{} {}", t.name(), n))
        .collect();
    results.push(TestResult::check(
        "tiles_cover_grid",
        counts.iter().sum::<usize>() == (grid.size() * grid.size()) as usize,
        summary.join(", "),
    ));

    results.push(TestResult::check(
        "town_centre_walkable",
        grid.is_walkable(c),
        format!("centre {c}"),
    ));

    let hw = config.world.town_half_width + 1;
    let hh = config.world.town_half_height + 1;
    let gates = [c.offset(0, -hh), c.offset(0, hh), c.offset(-hw, 0), c.offset(hw, 0)];
    let open_gates = gates.iter().filter(|&&g| grid.is_walkable(g)).count();
    results.push(TestResult::check(
        "four_open_gates",
        open_gates == 4,
        format!("{open_gates}/4 gates walkable"),
    ));

    let doors_blocked = grid.buildings().iter().all(|b| !grid.is_walkable(b.door));
    results.push(TestResult::check(
        "doors_block",
        doors_blocked,
        format!("{} buildings", grid.buildings().len()),
    ));

    for kind in ResourceKind::ALL {
        let n = grid.resources().iter().filter(|r| r.kind == kind).count();
        results.push(TestResult::check(
            &format!("has_{}_nodes", kind.name()),
            n > 0,
            format!("{n} nodes"),
        ));
    }

    let monsters_on_grass = engine
        .actors()
        .iter()
        .filter(|a| a.kind == EntityKind::Monster)
        .all(|a| grid.tile(a.position) == Some(TileType::Grass));
    results.push(TestResult::check(
        "population",
        engine.npc_count() == 9 && engine.wanderer_count() == 4 && monsters_on_grass,
        format!(
            "{} NPCs, {} adventurers, {} monsters",
            engine.npc_count(),
            engine.wanderer_count(),
            engine.monster_count()
        ),
    ));

    results
}

// ── 2. Pathfinding ──────────────────────────────────────────────────────

fn validate_pathfinding(config: &HarnessConfig) -> Vec<TestResult> {
    println!("--- Pathfinding ---");
    let mut results = Vec::new();

    let open = WorldGrid::new(96, Cell::new(24, 24));
    let path = find_path(&open, Cell::new(24, 24), Cell::new(10, 10));
    results.push(TestResult::check(
        "open_field_28_steps",
        path.len() == 28 && path.last() == Some(&Cell::new(10, 10)),
        format!("{} waypoints", path.len()),
    ));

    let engine = new_engine(config);
    let grid = &engine.grid;
    let c = grid.town_center();
    let hh = config.world.town_half_height + 1;
    let exit = c.offset(0, hh);
    let path = find_path(grid, c, exit);
    results.push(TestResult::check(
        "town_to_south_gate",
        path.last() == Some(&exit) && path.len() as u32 >= c.manhattan(exit),
        format!("{} waypoints", path.len()),
    ));

    let valid = path.iter().all(|&cell| grid.is_walkable(cell));
    results.push(TestResult::check(
        "path_cells_walkable",
        valid,
        "every waypoint passes is_walkable",
    ));

    let door = grid.buildings().first().map(|b| b.door);
    let into_door = door.map(|d| find_path(grid, c, d).is_empty()).unwrap_or(true);
    results.push(TestResult::check(
        "door_unreachable_as_goal",
        into_door,
        format!("door {door:?}"),
    ));

    results
}

// ── 3. Tick Loop ────────────────────────────────────────────────────────

fn validate_tick_loop(config: &HarnessConfig) -> Vec<TestResult> {
    println!("--- Tick Loop ({} ticks) ---", config.ticks);
    let mut engine = new_engine(config);
    let mut results = Vec::new();

    let mut bad_steps = 0;
    let mut bad_monsters = 0;
    let mut max_markers = 0;
    let mut deaths = 0;
    let mut was_dead = false;

    let mut before = engine.actors();
    for _ in 0..config.ticks {
        engine.update();
        let after = engine.actors();
        for view in &after {
            let Some(prev) = before.iter().find(|v| v.entity == view.entity) else {
                continue;
            };
            let stepped = prev.position != view.position;
            if stepped && view.kind != EntityKind::Monster && prev.position.manhattan(view.position) != 1 {
                bad_steps += 1;
            }
        }
        for (_, monster) in engine.world.query::<&Monster>().iter() {
            if monster.is_alive() != monster.dead_timer.is_none() {
                bad_monsters += 1;
            }
        }
        if engine.player.dead && !was_dead {
            deaths += 1;
        }
        was_dead = engine.player.dead;
        max_markers = max_markers.max(engine.markers.len());
        engine.drain_events();
        before = after;
    }

    results.push(TestResult::check(
        "single_cell_steps",
        bad_steps == 0,
        format!("{bad_steps} multi-cell jumps"),
    ));
    results.push(TestResult::check(
        "dead_timer_iff_dead",
        bad_monsters == 0,
        format!("{bad_monsters} inconsistent monsters"),
    ));
    results.push(TestResult::check(
        "player_health_bounded",
        engine.player.hp <= engine.player.max_hp,
        format!("hp {}/{}, {deaths} deaths", engine.player.hp, engine.player.max_hp),
    ));
    results.push(TestResult::check(
        "markers_expire",
        engine.markers.iter().all(|m| m.ttl > 0),
        format!("peak {max_markers} markers"),
    ));
    results.push(TestResult::check(
        "tick_counter",
        engine.tick() == config.ticks as u64,
        format!("tick {}", engine.tick()),
    ));

    results
}

// ── 4. Scripted Session ─────────────────────────────────────────────────

fn run_until(
    engine: &mut SimulationEngine,
    max_ticks: u32,
    done: impl Fn(&SimulationEngine) -> bool,
) -> bool {
    for _ in 0..max_ticks {
        engine.update();
        if done(engine) {
            return true;
        }
    }
    false
}

/// Monsters roam while the player walks over, so re-engage whenever the
/// player has stopped short of them.
fn chase_and_slay(engine: &mut SimulationEngine, monster: hecs::Entity, max_ticks: u32) -> bool {
    for _ in 0..max_ticks {
        match engine.monster_state(monster) {
            Some((_, false)) => return true,
            None => return false,
            Some((cell, true)) => {
                let adjacent = cell.manhattan(engine.player.position()) <= 1;
                if engine.player.mover.is_idle() && !adjacent {
                    engine.interact_monster(monster);
                }
            }
        }
        engine.update();
    }
    matches!(engine.monster_state(monster), Some((_, false)))
}

fn validate_session(config: &HarnessConfig) -> Vec<TestResult> {
    println!("--- Scripted Session ---");
    let mut engine = new_engine(config);
    let mut results = Vec::new();
    let home = engine.grid.town_center();
    // Stray contact hits must not send the player home mid-script
    engine.player.max_hp = 500;
    engine.player.hp = 500;

    // Gather from the reachable tree closest to town
    let tree = engine
        .grid
        .resources()
        .iter()
        .enumerate()
        .filter(|(_, n)| n.kind == ResourceKind::Tree)
        .filter_map(|(i, n)| {
            let stand = engine.grid.adjacent_walkable(n.cell)?;
            let path = find_path(&engine.grid, home, stand);
            (!path.is_empty()).then_some((ResourceId(i), path.len()))
        })
        .min_by_key(|&(_, len)| len)
        .map(|(id, _)| id);

    match tree {
        Some(id) => {
            engine.interact_resource(id);
            let gathered = run_until(&mut engine, 400, |e| e.inventory.count("Logs") > 0);
            results.push(TestResult::check(
                "gather_logs",
                gathered && engine.player.skills.xp(Skill::Woodcutting) >= 12,
                format!("{} logs after {} ticks", engine.inventory.count("Logs"), engine.tick()),
            ));
        }
        None => results.push(TestResult::check("gather_logs", false, "no reachable tree")),
    }

    // Engage the closest live monster and fight it out
    let pos = engine.player.position();
    let target = engine
        .actors()
        .into_iter()
        .filter(|a| a.kind == EntityKind::Monster)
        .min_by_key(|a| a.position.manhattan(pos));
    match target {
        Some(monster) => {
            let slain = chase_and_slay(&mut engine, monster.entity, 3000);
            results.push(TestResult::check(
                "slay_monster",
                slain,
                format!("{} from {} slain: {slain}", monster.name, monster.position),
            ));
        }
        None => results.push(TestResult::check("slay_monster", false, "no monsters")),
    }

    // Shop, eat, save and load
    engine.drain_events();
    engine.player.hp = 10;
    engine.player.max_hp = 20;
    engine.buy("Bread");
    engine.chat("/eat");
    results.push(TestResult::check(
        "buy_and_eat",
        engine.player.hp == 16 && engine.inventory.count("Bread") == 0,
        format!("hp {} coins {}", engine.player.hp, engine.player.coins),
    ));

    engine.chat("/save");
    let coins = engine.player.coins;
    engine.player.coins = 0;
    engine.chat("/load");
    let messages: Vec<String> = engine
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            GameEvent::Message(m) => Some(m),
            _ => None,
        })
        .collect();
    results.push(TestResult::check(
        "quick_save_load",
        engine.player.coins == coins && messages.iter().any(|m| m == "Loaded saved game."),
        messages.join(" | "),
    ));

    results
}

// ── 5. Determinism ──────────────────────────────────────────────────────

fn validate_determinism(config: &HarnessConfig) -> Vec<TestResult> {
    println!("--- Determinism ---");
    let ticks = config.ticks.min(500);
    let mut a = new_engine(config);
    let mut b = new_engine(config);
    for _ in 0..ticks {
        a.update();
        b.update();
    }
    vec![TestResult::check(
        "same_seed_same_state",
        a.actors() == b.actors() && a.player.position() == b.player.position(),
        format!("{ticks} ticks compared"),
    )]
}
