//! Battle limits that guarantee termination and bound roster growth.

use serde::{Deserialize, Serialize};

use crate::state::TEAM_SIZE;

/// Round cap used when none is configured.
///
/// Fixed so that capped draws are reproducible across runs and in tests.
pub const DEFAULT_MAX_ROUNDS: u32 = 100;

/// Faint hooks one sweep may run before the rest are removed silently.
///
/// Bounds chains where faint hooks keep leaving spent units behind.
pub const MAX_FAINTS_PER_SWEEP: u32 = 100;

/// Knobs for a single battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BattleConfig {
    /// Exchanges allowed before the battle is called a draw.
    pub max_rounds: u32,
    /// Hooks cannot summon into a roster already holding this many units.
    pub max_roster_size: usize,
    /// Fire `on_hurt` on damaged fronts after each exchange.
    pub fire_on_hurt: bool,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            max_roster_size: TEAM_SIZE,
            fire_on_hurt: true,
        }
    }
}

impl BattleConfig {
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_max_roster_size(mut self, max_roster_size: usize) -> Self {
        self.max_roster_size = max_roster_size;
        self
    }

    pub fn with_on_hurt(mut self, fire_on_hurt: bool) -> Self {
        self.fire_on_hurt = fire_on_hurt;
        self
    }
}
