//! Simulation engine - main entry point for running the simulation

use hecs::{Entity, World};
use rand::rngs::StdRng;
use rand::SeedableRng;
use runelight_logic::combat::CONTACT_MARKER_TTL;
use runelight_logic::geometry::{Cell, Facing};
use runelight_logic::items::{Equipment, SlotContainer};
use runelight_logic::zones::zone_at;

use crate::components::*;
use crate::config::{SimulationConfig, WorldConfig};
use crate::events::GameEvent;
use crate::generation::{generate_world, spawn_monsters, spawn_townsfolk};
use crate::systems::*;
use crate::world::WorldGrid;

/// Read-only snapshot of one actor, for renderers and tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorView {
    pub entity: Entity,
    pub kind: EntityKind,
    pub name: String,
    pub position: Cell,
    pub previous: Cell,
    pub facing: Facing,
    pub frame: u8,
    /// Current and max health, monsters only
    pub health: Option<(i32, i32)>,
    /// Monster the player has engaged, for highlighting
    pub engaged: bool,
}

/// Main simulation engine
pub struct SimulationEngine {
    /// ECS world containing NPCs, adventurers and monsters
    pub world: World,
    /// Terrain, props and resource nodes
    pub grid: WorldGrid,
    pub player: Player,
    pub inventory: SlotContainer,
    pub equipment: Equipment,
    pub bank: SlotContainer,
    /// Floating damage numbers
    pub markers: Vec<DamageMarker>,

    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: StdRng,
    pub(crate) config: SimulationConfig,
    pub(crate) world_config: WorldConfig,
    /// In-memory slot used by the `/save` and `/load` chat commands
    pub(crate) save_slot: Option<Vec<u8>>,
    tick: u64,
}

impl SimulationEngine {
    /// Create an empty simulation: all-grass map, nobody in it.
    pub fn new(config: SimulationConfig) -> Self {
        let defaults = WorldConfig::default();
        let grid = WorldGrid::new(defaults.size, defaults.town_center);
        let mut engine = Self::with_grid(grid, config);
        engine.rng = StdRng::from_entropy();
        engine
    }

    /// Create a simulation around an existing grid, with no actors and a
    /// fixed seed. The player starts at the grid's town centre.
    pub fn with_grid(grid: WorldGrid, config: SimulationConfig) -> Self {
        let world_config = WorldConfig {
            size: grid.size(),
            town_center: grid.town_center(),
            ..Default::default()
        };
        let player = Player::new(grid.town_center());
        Self {
            world: World::new(),
            grid,
            player,
            inventory: SlotContainer::inventory(),
            equipment: Equipment::default(),
            bank: SlotContainer::bank(),
            markers: Vec::new(),
            events: Vec::new(),
            rng: StdRng::seed_from_u64(0),
            config,
            world_config,
            save_slot: None,
            tick: 0,
        }
    }

    /// Generate a fresh world and populate it. Replaces all existing state.
    pub fn generate(&mut self, config: WorldConfig) {
        self.rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        self.world = World::new();
        self.grid = generate_world(&config, &mut self.rng);
        spawn_townsfolk(&mut self.world);
        spawn_monsters(&mut self.world, &self.grid, &config, &self.config, &mut self.rng);

        self.player = Player::new(self.grid.town_center());
        self.player.zone = zone_at(self.player.position(), self.grid.town_center());
        self.inventory = SlotContainer::inventory();
        self.equipment = Equipment::default();
        self.bank = SlotContainer::bank();
        self.markers.clear();
        self.events.clear();
        self.tick = 0;
        self.world_config = config;

        log::info!(
            "World ready: {} NPCs, {} adventurers, {} monsters",
            self.npc_count(),
            self.wanderer_count(),
            self.monster_count()
        );
    }

    /// Reseed the random source. Useful for reproducible runs on a grid
    /// built with [`with_grid`](Self::with_grid).
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Advance the simulation by one tick.
    pub fn update(&mut self) {
        self.tick += 1;

        // 1. Player
        self.update_player();

        // 2. Townsfolk
        patrol_system(&mut self.world, &self.grid, &mut self.rng, self.config.npc_patrol_radius);

        // 3. Adventurers
        wandering_system(
            &mut self.world,
            &self.grid,
            &mut self.rng,
            self.config.wanderer_move_chance,
            self.config.wanderer_radius,
        );

        // 4. Monsters
        let player_cell = (!self.player.dead).then(|| self.player.position());
        let hits = monster_system(
            &mut self.world,
            &self.grid,
            &mut self.rng,
            player_cell,
            &self.config,
            self.world_config.monster_bounds(),
        );
        self.apply_contact_hits(hits);

        // 5. Resource nodes
        let restored = resource_respawn_system(&mut self.grid);
        if restored > 0 {
            log::debug!("{restored} resource nodes restored");
        }

        // 6. Damage markers
        marker_system(&mut self.markers);
    }

    fn update_player(&mut self) {
        if self.player.dead {
            self.respawn_player();
            return;
        }

        self.player.mover.advance();

        let zone = zone_at(self.player.position(), self.grid.town_center());
        if zone != self.player.zone {
            self.player.zone = zone;
            self.push_message(format!("You enter {zone}."));
            self.events.push(GameEvent::ZoneChanged(zone));
        }

        if self.player.mover.is_idle() {
            if let Some(action) = self.player.pending_action {
                self.resolve_pending(action);
            }
        }

        if let Some(target) = self.player.target {
            match self.monster_state(target) {
                Some((cell, true)) if cell.manhattan(self.player.position()) <= 1 => {
                    self.attack_target(Combatant::Player, Combatant::Monster(target));
                }
                Some((_, true)) => {}
                _ => self.player.target = None,
            }
        }
    }

    /// Act on whatever the player walked off to do, now that the walk is
    /// over. The action stays queued until it can happen.
    fn resolve_pending(&mut self, action: PendingAction) {
        match action {
            PendingAction::Gather(id) => {
                let Some(node) = self.grid.resource(id) else {
                    self.player.pending_action = None;
                    return;
                };
                if !node.depleted && node.cell.manhattan(self.player.position()) <= 1 {
                    self.player.pending_action = None;
                    self.handle_resource(id);
                }
            }
            PendingAction::Engage(monster) => {
                if matches!(self.monster_state(monster), Some((_, true))) {
                    self.player.pending_action = None;
                    self.player.target = Some(monster);
                }
            }
        }
    }

    /// Immediate one-tick respawn at the town centre. No penalty.
    fn respawn_player(&mut self) {
        let center = self.grid.town_center();
        self.player.dead = false;
        self.player.hp = self.player.max_hp;
        self.player.stop();
        self.player.mover.teleport(center);
        log::info!("Player respawned at {center}");
    }

    fn apply_contact_hits(&mut self, hits: Vec<ContactHit>) {
        for hit in hits {
            if self.player.dead {
                break;
            }
            self.player.hp -= hit.damage;
            self.markers.push(DamageMarker::damage(
                self.player.position(),
                hit.damage,
                CONTACT_MARKER_TTL,
            ));
            log::debug!("{} hits the player for {}", hit.kind.name(), hit.damage);
            if self.player.hp <= 0 {
                self.player.dead = true;
                log::info!("Player slain by a {}", hit.kind.name());
            }
        }
    }

    /// Position and liveness of a monster, `None` if the entity is gone or
    /// is not a monster.
    pub fn monster_state(&self, entity: Entity) -> Option<(Cell, bool)> {
        let mut query = self.world.query_one::<(&Mover, &Monster)>(entity).ok()?;
        let state = query
            .get()
            .map(|(mover, monster)| (mover.position, monster.is_alive()));
        state
    }

    pub(crate) fn push_message(&mut self, text: impl Into<String>) {
        self.events.push(GameEvent::Message(text.into()));
    }

    /// Take every event queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events queued since the last drain, without taking them.
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn world_config(&self) -> &WorldConfig {
        &self.world_config
    }

    pub fn npc_count(&self) -> usize {
        self.world.query::<&Npc>().iter().count()
    }

    pub fn wanderer_count(&self) -> usize {
        self.world.query::<&Wanderer>().iter().count()
    }

    pub fn monster_count(&self) -> usize {
        self.world.query::<&Monster>().iter().count()
    }

    pub fn live_monster_count(&self) -> usize {
        self.world
            .query::<&Monster>()
            .iter()
            .filter(|(_, m)| m.is_alive())
            .count()
    }

    /// First live monster standing on `cell`.
    pub fn monster_at(&self, cell: Cell) -> Option<Entity> {
        self.world
            .query::<(&Mover, &Monster)>()
            .iter()
            .find(|(_, (mover, monster))| mover.position == cell && monster.is_alive())
            .map(|(entity, _)| entity)
    }

    /// First NPC within one cell of `cell`, diagonals included.
    pub fn npc_near(&self, cell: Cell) -> Option<Entity> {
        self.world
            .query::<(&Mover, &Npc)>()
            .iter()
            .find(|(_, (mover, _))| mover.position.chebyshev(cell) <= 1)
            .map(|(entity, _)| entity)
    }

    /// Snapshot of every actor in the ECS world. Dead monsters are left out.
    pub fn actors(&self) -> Vec<ActorView> {
        let mut views = Vec::new();
        for (entity, (kind, name, mover, monster)) in self
            .world
            .query::<(&EntityKind, &Name, &Mover, Option<&Monster>)>()
            .iter()
        {
            if monster.is_some_and(|m| !m.is_alive()) {
                continue;
            }
            views.push(ActorView {
                entity,
                kind: *kind,
                name: name.as_str().to_string(),
                position: mover.position,
                previous: mover.previous,
                facing: mover.facing,
                frame: mover.frame,
                health: monster.map(|m| (m.hp, m.max_hp())),
                engaged: monster.is_some_and(|m| m.engaged),
            });
        }
        views
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::spawn_monster;
    use runelight_logic::templates::MonsterKind;
    use runelight_logic::zones::Zone;

    fn open_engine() -> SimulationEngine {
        SimulationEngine::with_grid(WorldGrid::new(96, Cell::new(24, 24)), SimulationConfig::default())
    }

    #[test]
    fn generate_populates_world() {
        let mut engine = SimulationEngine::new(SimulationConfig::default());
        engine.generate(WorldConfig {
            seed: Some(1),
            ..Default::default()
        });
        assert_eq!(engine.npc_count(), 9);
        assert_eq!(engine.wanderer_count(), 4);
        assert!(engine.monster_count() <= 38);
        assert_eq!(engine.player.position(), Cell::new(24, 24));
        assert_eq!(engine.player.zone, Zone::Timbercross);
    }

    #[test]
    fn player_steps_once_per_tick() {
        let mut engine = open_engine();
        engine.move_to(Cell::new(27, 24));
        engine.update();
        assert_eq!(engine.player.position(), Cell::new(25, 24));
        assert_eq!(engine.player.mover.facing, Facing::Right);
        engine.update();
        engine.update();
        assert_eq!(engine.player.position(), Cell::new(27, 24));
        engine.update();
        assert_eq!(engine.player.position(), Cell::new(27, 24));
    }

    #[test]
    fn zone_change_notifies_once() {
        let mut engine = open_engine();
        engine.player.mover.teleport(Cell::new(24, 37));
        engine.move_to(Cell::new(24, 40));
        for _ in 0..5 {
            engine.update();
        }
        let events = engine.drain_events();
        let entered: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::ZoneChanged(_)))
            .collect();
        assert_eq!(entered, vec![&GameEvent::ZoneChanged(Zone::OuterFields)]);
        assert!(events.contains(&GameEvent::Message("You enter Outer Fields.".into())));
    }

    #[test]
    fn dead_player_respawns_next_tick() {
        let mut engine = open_engine();
        engine.player.mover.teleport(Cell::new(40, 40));
        engine.player.hp = -2;
        engine.player.dead = true;
        engine.update();
        assert!(!engine.player.dead);
        assert_eq!(engine.player.hp, engine.player.max_hp);
        assert_eq!(engine.player.position(), Cell::new(24, 24));
        assert_eq!(engine.player.coins, PLAYER_START_COINS);
    }

    #[test]
    fn contact_damage_can_kill() {
        let mut engine = open_engine();
        let zombie = spawn_monster(&mut engine.world, MonsterKind::Zombie, Cell::new(25, 24), 10_000);
        engine.player.hp = 1;
        engine.update();
        assert!(engine.player.dead);
        assert!(engine.player.hp <= 0);
        assert_eq!(engine.markers.len(), 1);
        assert_eq!(engine.markers[0].ttl, CONTACT_MARKER_TTL - 1);
        assert!(engine.monster_state(zombie).is_some());

        // Respawn happens at the start of the next tick
        engine.update();
        assert!(!engine.player.dead);
        assert_eq!(engine.player.position(), Cell::new(24, 24));
    }

    #[test]
    fn actors_skip_dead_monsters() {
        let mut engine = open_engine();
        let bat = spawn_monster(&mut engine.world, MonsterKind::Bat, Cell::new(60, 60), 10_000);
        assert_eq!(engine.actors().len(), 1);
        assert_eq!(engine.actors()[0].health, Some((14, 14)));
        engine.world.get::<&mut Monster>(bat).unwrap().slay(300);
        assert!(engine.actors().is_empty());
        assert_eq!(engine.live_monster_count(), 0);
        assert_eq!(engine.monster_count(), 1);
    }
}
