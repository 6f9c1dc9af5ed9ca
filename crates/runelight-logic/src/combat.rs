//! Combat formulas.

use crate::skills::Skill;

/// Max hit for any attacker that is not the player.
pub const NPC_MAX_HIT: i32 = 4;

/// Ticks a slain monster stays down before respawning.
pub const MONSTER_RESPAWN_TICKS: u32 = 300;

/// Coins lost when the player is slain by a direct attack.
pub const DEATH_COIN_PENALTY: u32 = 5;

/// Experience for slaying a monster.
pub const KILL_XP: [(Skill, u32); 3] = [
    (Skill::Attack, 18),
    (Skill::Strength, 10),
    (Skill::Defense, 8),
];

/// Lifetime of the damage marker spawned by an attack round.
pub const ATTACK_MARKER_TTL: u32 = 40;
/// Lifetime of the damage marker spawned by monster contact damage.
pub const CONTACT_MARKER_TTL: u32 = 30;

/// Player's max hit for a given Attack level.
pub fn player_max_hit(attack_level: u32) -> i32 {
    6 + (attack_level / 2) as i32
}

/// Coins left after the death penalty, floored at zero.
pub fn coins_after_death(coins: u32) -> u32 {
    coins.saturating_sub(DEATH_COIN_PENALTY)
}
