//! Match orchestration: roster management between battles and applying
//! battle outcomes to the player's progression.

use alloc::vec::Vec;

use log::debug;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::abilities::{AbilityRegistry, TriggerEvent, TriggerKind};
use crate::battle::{BattleEngine, BattleReport, Outcome, Side};
use crate::error::{GameError, GameResult};
use crate::limits::BattleConfig;
use crate::rng::BattleRng;
use crate::roster::RosterHandle;
use crate::state::*;
use crate::types::Unit;

/// A player's persistent state across turns.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub credits: i32,
    pub lives: i32,
    pub ribbons: i32,
    /// Index 0 is the front.
    pub team: Vec<Unit>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            credits: STARTING_CREDITS,
            lives: STARTING_LIVES,
            ribbons: 0,
            team: Vec::new(),
        }
    }

    pub fn with_team(mut self, team: Vec<Unit>) -> Self {
        self.team = team;
        self
    }

    /// Pay for `unit`, add it to the back of the team and fire its `on_buy`
    /// hooks. Returns the slot the unit landed in.
    pub fn recruit(
        &mut self,
        unit: Unit,
        registry: &AbilityRegistry,
        rng: &mut dyn BattleRng,
    ) -> GameResult<usize> {
        if self.credits < RECRUIT_COST {
            return Err(GameError::NotEnoughCredits {
                have: self.credits,
                need: RECRUIT_COST,
            });
        }
        if self.team.len() >= TEAM_SIZE {
            return Err(GameError::TeamFull);
        }

        self.credits -= RECRUIT_COST;
        let template_id = unit.template_id.clone();
        debug!("recruited {} for {} credits", unit.name, RECRUIT_COST);
        self.team.push(unit);
        let slot = self.team.len() - 1;

        let mut no_enemies = Vec::new();
        let mut event = TriggerEvent {
            kind: TriggerKind::OnBuy,
            subject: slot,
            friendly: RosterHandle::new(&mut self.team, slot + 1, TEAM_SIZE),
            enemy: RosterHandle::new(&mut no_enemies, 0, 0),
            rng,
        };
        registry.dispatch(&template_id, &mut event);

        Ok(slot)
    }

    /// Remove the unit at `index` and refund part of its price.
    pub fn sell(&mut self, index: usize) -> GameResult<Unit> {
        if index >= self.team.len() {
            return Err(GameError::InvalidTeamSlot {
                index: index as u32,
            });
        }
        let unit = self.team.remove(index);
        self.credits += SELL_REFUND;
        debug!("sold {} for {} credits", unit.name, SELL_REFUND);
        Ok(unit)
    }

    /// Merge the unit at `second` into the unit at `first`.
    ///
    /// Both slots must hold the same kind of unit. The merged unit stays at
    /// `first` (shifted down by one if `second` was ahead of it).
    pub fn combine(&mut self, first: usize, second: usize) -> GameResult<usize> {
        let len = self.team.len();
        for index in [first, second] {
            if index >= len {
                return Err(GameError::InvalidTeamSlot {
                    index: index as u32,
                });
            }
        }
        let cannot = GameError::CannotCombine {
            first: first as u32,
            second: second as u32,
        };
        if first == second {
            return Err(cannot);
        }

        let donor = self.team[second].clone();
        if !self.team[first].combine(&donor) {
            return Err(cannot);
        }
        self.team.remove(second);

        let merged = if second < first { first - 1 } else { first };
        debug!(
            "combined into {} (level {})",
            self.team[merged].name, self.team[merged].level
        );
        Ok(merged)
    }

    /// Apply a battle result seen from `our_side`.
    pub fn apply_outcome(&mut self, outcome: Outcome, our_side: Side) {
        if outcome.is_win_for(our_side) {
            self.ribbons += 1;
        } else if outcome.is_loss_for(our_side) {
            self.lives -= LIVES_LOST_ON_DEFEAT;
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.lives <= 0 {
            GameStatus::Defeated
        } else if self.ribbons >= RIBBONS_TO_VICTORY {
            GameStatus::Victorious
        } else {
            GameStatus::InProgress
        }
    }
}

/// Whether the run is still going
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    InProgress,
    Defeated,
    Victorious,
}

/// Turn sequencing for a single player's run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub player: Player,
    /// Current turn (1-indexed)
    pub turn: u32,
    pub config: BattleConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            player: Player::new(),
            turn: 1,
            config: BattleConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    /// Refill the player's credits for the shop phase.
    pub fn start_turn(&mut self) {
        self.player.credits = STARTING_CREDITS;
        debug!(
            "turn {}: lives {}, ribbons {}",
            self.turn, self.player.lives, self.player.ribbons
        );
    }

    /// Battle phase: fight a snapshot of the player's team against `enemy`,
    /// apply the outcome and advance to the next turn.
    ///
    /// An invalid roster fails the call before anything changes.
    pub fn battle(
        &mut self,
        enemy: &[Unit],
        registry: &AbilityRegistry,
        seed: u64,
    ) -> GameResult<BattleReport> {
        let engine = BattleEngine::new(registry).with_config(self.config);
        let report = engine.resolve(&self.player.team, enemy, seed)?;

        self.player.apply_outcome(report.outcome, Side::A);
        self.turn += 1;
        Ok(report)
    }

    pub fn status(&self) -> GameStatus {
        self.player.status()
    }

    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }
}
