use alloc::vec::Vec;

use log::{debug, trace, warn};
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::abilities::{AbilityRegistry, TriggerEvent, TriggerKind};
use crate::error::{BattleError, BattleResult};
use crate::limits::{BattleConfig, MAX_FAINTS_PER_SWEEP};
use crate::rng::XorShiftRng;
use crate::roster::RosterHandle;
use crate::types::Unit;

/// One of the two rosters in a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Terminal result of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Win(Side),
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Win(side) => Some(*side),
            Outcome::Draw => None,
        }
    }

    pub fn is_win_for(&self, side: Side) -> bool {
        self.winner() == Some(side)
    }

    pub fn is_loss_for(&self, side: Side) -> bool {
        self.winner() == Some(side.opponent())
    }
}

/// What `resolve` hands back once the battle is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleReport {
    pub outcome: Outcome,
    /// Damage exchanges that took place.
    pub rounds: u32,
    /// Set when the draw came from the round cap rather than mutual exhaustion.
    pub round_cap_hit: bool,
}

impl BattleReport {
    pub fn is_capped_draw(&self) -> bool {
        self.round_cap_hit && self.outcome == Outcome::Draw
    }
}

/// Transient state of one battle. Built from copies, dropped after the report.
struct BattleState {
    team_a: Vec<Unit>,
    team_b: Vec<Unit>,
    rounds: u32,
    round_cap_hit: bool,
    rng: XorShiftRng,
}

impl BattleState {
    fn team(&self, side: Side) -> &Vec<Unit> {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    fn team_mut(&mut self, side: Side) -> &mut Vec<Unit> {
        match side {
            Side::A => &mut self.team_a,
            Side::B => &mut self.team_b,
        }
    }

    /// (friendly, enemy, rng) as seen from `side`.
    fn split(&mut self, side: Side) -> (&mut Vec<Unit>, &mut Vec<Unit>, &mut XorShiftRng) {
        match side {
            Side::A => (&mut self.team_a, &mut self.team_b, &mut self.rng),
            Side::B => (&mut self.team_b, &mut self.team_a, &mut self.rng),
        }
    }

    fn both_standing(&self) -> bool {
        !self.team_a.is_empty() && !self.team_b.is_empty()
    }

    fn outcome(&self) -> Outcome {
        match (self.team_a.is_empty(), self.team_b.is_empty()) {
            (false, true) => Outcome::Win(Side::A),
            (true, false) => Outcome::Win(Side::B),
            _ => Outcome::Draw,
        }
    }
}

/// Resolves battles between two rosters with a fixed registry and config.
///
/// The engine holds no per-battle state, so one engine can be shared by
/// any number of threads resolving independent battles.
#[derive(Debug, Clone, Copy)]
pub struct BattleEngine<'r> {
    registry: &'r AbilityRegistry,
    config: BattleConfig,
}

impl<'r> BattleEngine<'r> {
    pub fn new(registry: &'r AbilityRegistry) -> Self {
        Self {
            registry,
            config: BattleConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    /// Fight `team_a` against `team_b`.
    ///
    /// Both rosters are copied; the caller's units are never touched. `seed`
    /// feeds the random source handed to hooks, the engine itself draws
    /// nothing from it.
    pub fn resolve(&self, team_a: &[Unit], team_b: &[Unit], seed: u64) -> BattleResult<BattleReport> {
        validate_roster(Side::A, team_a)?;
        validate_roster(Side::B, team_b)?;

        let mut state = BattleState {
            team_a: team_a.to_vec(),
            team_b: team_b.to_vec(),
            rounds: 0,
            round_cap_hit: false,
            rng: XorShiftRng::seed_from_u64(seed),
        };

        // 1. Start of battle: A in order, then B in order.
        for side in [Side::A, Side::B] {
            let mut index = 0;
            while index < state.team(side).len() {
                self.fire(&mut state, TriggerKind::StartOfBattle, side, index, 0);
                index += 1;
            }
        }
        self.sweep_fainted(&mut state, 0);

        // 2. Front units engage until one side is exhausted.
        while state.both_standing() {
            if state.rounds >= self.config.max_rounds {
                state.round_cap_hit = true;
                break;
            }
            state.rounds += 1;
            self.exchange(&mut state);
            self.faint_check(&mut state, Side::A);
            self.faint_check(&mut state, Side::B);
            self.sweep_fainted(&mut state, 1);
        }

        let report = BattleReport {
            outcome: state.outcome(),
            rounds: state.rounds,
            round_cap_hit: state.round_cap_hit,
        };
        debug!(
            "battle resolved: {:?} after {} rounds (cap hit: {})",
            report.outcome, report.rounds, report.round_cap_hit
        );
        Ok(report)
    }

    /// Simultaneous damage exchange between the two fronts.
    fn exchange(&self, state: &mut BattleState) {
        // Snapshot both attacks before touching either health.
        let damage_to_a = state.team_b[0].attack.max(0);
        let damage_to_b = state.team_a[0].attack.max(0);

        state.team_a[0].apply_damage(damage_to_a);
        state.team_b[0].apply_damage(damage_to_b);

        trace!(
            "round {}: {} ({} hp) vs {} ({} hp)",
            state.rounds,
            state.team_a[0].name,
            state.team_a[0].health,
            state.team_b[0].name,
            state.team_b[0].health
        );

        if !self.config.fire_on_hurt {
            return;
        }
        if damage_to_a > 0 {
            self.fire(state, TriggerKind::OnHurt, Side::A, 0, 1);
        }
        if damage_to_b > 0 && !state.team_b.is_empty() {
            self.fire(state, TriggerKind::OnHurt, Side::B, 0, 1);
        }
    }

    /// Faint the front of `side` if its health is spent: hooks first, then
    /// the engine commits the removal.
    fn faint_check(&self, state: &mut BattleState, side: Side) {
        let fainted = state.team(side).first().map_or(false, Unit::is_fainted);
        if !fainted {
            return;
        }
        self.fire(state, TriggerKind::OnFaint, side, 0, 1);
        let unit = state.team_mut(side).remove(0);
        trace!("{:?} front {} fainted", side, unit.name);
    }

    /// Faint every unit hooks left at `health <= 0`, A before B, until neither
    /// roster holds one.
    ///
    /// Each faint runs its hooks and is then removed at the index it held.
    /// Past [`MAX_FAINTS_PER_SWEEP`] the remaining spent units are removed
    /// without hooks.
    fn sweep_fainted(&self, state: &mut BattleState, enemy_floor: usize) {
        let mut fainted = 0;
        loop {
            let Some((side, index)) = [Side::A, Side::B].into_iter().find_map(|side| {
                state
                    .team(side)
                    .iter()
                    .position(Unit::is_fainted)
                    .map(|index| (side, index))
            }) else {
                return;
            };

            if fainted >= MAX_FAINTS_PER_SWEEP {
                state.team_a.retain(|unit| !unit.is_fainted());
                state.team_b.retain(|unit| !unit.is_fainted());
                warn!("faint sweep hit its limit of {}", MAX_FAINTS_PER_SWEEP);
                return;
            }
            fainted += 1;

            self.fire(state, TriggerKind::OnFaint, side, index, enemy_floor);
            let unit = state.team_mut(side).remove(index);
            trace!("{:?} unit {} at {} fainted outside the exchange", side, unit.name, index);
        }
    }

    /// Dispatch `kind` for `friendly[subject]`.
    ///
    /// Friendly summons land behind the subject; `enemy_floor` pins the
    /// enemy's engaged front (1) or leaves the whole roster open (0).
    fn fire(&self, state: &mut BattleState, kind: TriggerKind, side: Side, subject: usize, enemy_floor: usize) {
        let capacity = self.config.max_roster_size;
        let (friendly, enemy, rng) = state.split(side);
        let Some(template_id) = friendly.get(subject).map(|unit| unit.template_id.clone()) else {
            return;
        };
        if !self.registry.has_abilities(&template_id) {
            return;
        }

        let mut event = TriggerEvent {
            kind,
            subject,
            friendly: RosterHandle::new(friendly, subject + 1, capacity),
            enemy: RosterHandle::new(enemy, enemy_floor, capacity),
            rng,
        };
        self.registry.dispatch(&template_id, &mut event);
    }
}

/// Resolve a battle with the default [`BattleConfig`].
pub fn resolve(
    team_a: &[Unit],
    team_b: &[Unit],
    registry: &AbilityRegistry,
    seed: u64,
) -> BattleResult<BattleReport> {
    BattleEngine::new(registry).resolve(team_a, team_b, seed)
}

fn validate_roster(side: Side, units: &[Unit]) -> BattleResult<()> {
    for (index, unit) in units.iter().enumerate() {
        if unit.attack < 0 || unit.health <= 0 || unit.level == 0 {
            return Err(BattleError::InvalidUnitState {
                side,
                index: index as u32,
                attack: unit.attack,
                health: unit.health,
                level: unit.level,
            });
        }
    }
    Ok(())
}
