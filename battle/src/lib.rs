//! Combat resolution core for the autogame auto-battler.
//!
//! Two ordered rosters go in, a deterministic [`BattleReport`] comes out.
//! Unit behaviour is expressed only through [`Ability`] hooks bound per
//! template in an [`AbilityRegistry`]; the engine never knows what an ability
//! does, only when to fire it.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod abilities;
pub mod battle;
pub mod error;
pub mod game;
pub mod limits;
pub mod rng;
pub mod roster;
pub mod state;
pub mod stock;
pub mod types;

#[cfg(test)]
mod tests;

pub use abilities::{Ability, AbilityRegistry, TriggerEvent, TriggerKind};
pub use battle::{resolve, BattleEngine, BattleReport, Outcome, Side};
pub use error::{BattleError, BattleResult, GameError, GameResult};
pub use game::{Game, GameStatus, Player};
pub use limits::BattleConfig;
pub use rng::{BattleRng, XorShiftRng};
pub use roster::RosterHandle;
pub use stock::StockAbility;
pub use types::Unit;
