//! Skills, experience and level-ups.
//!
//! Every skill starts at level 1 with 0 xp. Experience is cumulative; a skill
//! levels up when its total reaches `level * 100`. A single grant raises the
//! level by at most one, even when it crosses several thresholds; the next
//! grant picks up the remainder.
//!
//! ```
//! use runelight_logic::skills::{Skill, SkillSet};
//!
//! let mut skills = SkillSet::new();
//! assert_eq!(skills.gain_xp(Skill::Mining, 250), Some(2));
//! assert_eq!(skills.level(Skill::Mining), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Experience per level step: the threshold for leaving level `n` is `n * XP_PER_LEVEL`.
pub const XP_PER_LEVEL: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    Attack,
    Strength,
    Defense,
    Hitpoints,
    Woodcutting,
    Mining,
    Fishing,
    Firemaking,
    Cooking,
    Magic,
}

impl Skill {
    /// All skills in panel order.
    pub const ALL: [Skill; 10] = [
        Skill::Attack,
        Skill::Strength,
        Skill::Defense,
        Skill::Hitpoints,
        Skill::Woodcutting,
        Skill::Mining,
        Skill::Fishing,
        Skill::Firemaking,
        Skill::Cooking,
        Skill::Magic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Skill::Attack => "Attack",
            Skill::Strength => "Strength",
            Skill::Defense => "Defense",
            Skill::Hitpoints => "Hitpoints",
            Skill::Woodcutting => "Woodcutting",
            Skill::Mining => "Mining",
            Skill::Fishing => "Fishing",
            Skill::Firemaking => "Firemaking",
            Skill::Cooking => "Cooking",
            Skill::Magic => "Magic",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Level and total experience of one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProgress {
    pub level: u32,
    pub xp: u32,
}

impl Default for SkillProgress {
    fn default() -> Self {
        Self { level: 1, xp: 0 }
    }
}

impl SkillProgress {
    /// Total xp at which the current level is left behind.
    pub fn next_threshold(&self) -> u32 {
        self.level * XP_PER_LEVEL
    }
}

/// Progress for every [`Skill`], indexed by the skill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    progress: [SkillProgress; 10],
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, skill: Skill) -> SkillProgress {
        self.progress[skill.index()]
    }

    pub fn level(&self, skill: Skill) -> u32 {
        self.get(skill).level
    }

    pub fn xp(&self, skill: Skill) -> u32 {
        self.get(skill).xp
    }

    /// Add experience. Returns the new level when this grant caused a level-up.
    pub fn gain_xp(&mut self, skill: Skill, amount: u32) -> Option<u32> {
        let entry = &mut self.progress[skill.index()];
        entry.xp = entry.xp.saturating_add(amount);
        if entry.xp >= entry.next_threshold() {
            entry.level += 1;
            Some(entry.level)
        } else {
            None
        }
    }

    /// Iterate skills with their progress in panel order.
    pub fn iter(&self) -> impl Iterator<Item = (Skill, SkillProgress)> + '_ {
        Skill::ALL.iter().map(move |&s| (s, self.get(s)))
    }

    /// Sum of all levels, shown on the stats line.
    pub fn total_level(&self) -> u32 {
        self.progress.iter().map(|p| p.level).sum()
    }
}
