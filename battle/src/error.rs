//! Error types for battle resolution and roster management
//!
//! Plain enums so they stay no_std compatible and SCALE encodable.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use crate::battle::Side;

/// Errors returned by [`BattleEngine::resolve`](crate::BattleEngine::resolve).
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, thiserror::Error)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "type", rename_all = "camelCase"))]
pub enum BattleError {
    /// A unit entered combat with negative attack, non-positive health or level 0.
    #[error("invalid unit state on side {side:?} at index {index}: attack {attack}, health {health}, level {level}")]
    InvalidUnitState {
        side: Side,
        index: u32,
        attack: i32,
        health: i32,
        level: u32,
    },
}

/// Errors from the match orchestrator's roster management
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, thiserror::Error)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "type", rename_all = "camelCase"))]
pub enum GameError {
    #[error("not enough credits: have {have}, need {need}")]
    NotEnoughCredits { have: i32, need: i32 },
    #[error("team is full")]
    TeamFull,
    #[error("invalid team slot {index}")]
    InvalidTeamSlot { index: u32 },
    /// Combine needs two distinct slots holding the same kind of unit
    #[error("cannot combine slots {first} and {second}")]
    CannotCombine { first: u32, second: u32 },
    #[error(transparent)]
    Battle(#[from] BattleError),
}

pub type BattleResult<T> = Result<T, BattleError>;

/// Result type alias for orchestrator operations
pub type GameResult<T> = Result<T, GameError>;
