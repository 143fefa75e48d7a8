use alloc::string::{String, ToString};

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

fn default_level() -> u32 {
    1
}

/// A creature unit.
///
/// Identity is `name` plus `template_id`; everything else is combat state.
/// A unit never decides when it acts: the engine fires its hooks.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub name: String,
    /// Stable kind identifier, used to look up the unit's ability hooks.
    pub template_id: String,
    pub attack: i32,
    pub health: i32,
    #[serde(default = "default_level")]
    pub level: u32,
}

impl Unit {
    pub fn new(name: &str, template_id: &str, attack: i32, health: i32) -> Self {
        Self {
            name: name.to_string(),
            template_id: template_id.to_string(),
            attack,
            health,
            level: 1,
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Subtract `amount` from health.
    ///
    /// No floor is applied here; the engine decides when a unit faints, so
    /// hooks fired right after damage may observe negative health.
    pub fn apply_damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = self.health.saturating_add(amount.max(0));
    }

    /// Shift stats by the given deltas. Attack never drops below zero.
    pub fn buff(&mut self, attack: i32, health: i32) {
        self.attack = self.attack.saturating_add(attack).max(0);
        self.health = self.health.saturating_add(health);
    }

    pub fn level_up(&mut self, level_delta: u32) {
        self.level = self.level.saturating_add(level_delta);
    }

    pub fn is_fainted(&self) -> bool {
        self.health <= 0
    }

    pub fn same_kind(&self, other: &Unit) -> bool {
        self.template_id == other.template_id
    }

    /// Merge a duplicate into this unit.
    ///
    /// New attack is `max(a1, a2) + 1`, new health is `max(h1, h2) + 1` and the
    /// level goes up by one. Returns `false` (and changes nothing) when the
    /// two units are not the same kind.
    pub fn combine(&mut self, other: &Unit) -> bool {
        if !self.same_kind(other) {
            return false;
        }
        self.level_up(1);
        self.attack = self.attack.max(other.attack).saturating_add(1);
        self.health = self.health.max(other.health).saturating_add(1);
        true
    }
}
