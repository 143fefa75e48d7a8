//! Data-driven abilities.
//!
//! A small catalogue of common effects that can be bound to templates from
//! JSON, so rosters and their abilities can be described without code.

use serde::{Deserialize, Serialize};

use crate::abilities::{Ability, TriggerEvent};
use crate::types::Unit;

/// Ability effects that need no custom code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StockAbility {
    /// On faint, put `unit` straight behind the fainting unit so it takes
    /// over the front once the engine removes the fallen one.
    SummonOnFaint { unit: Unit },
    /// At start of battle, give every other ally the stat deltas.
    BuffAlliesOnStart { attack: i32, health: i32 },
    /// Gain attack each time this unit is hurt.
    GrowOnHurt { attack: i32 },
    /// Heal by `health` each time this unit is hurt, ahead of the faint check.
    HealOnHurt { health: i32 },
    /// At start of battle, damage one random enemy.
    SnipeOnStart { damage: i32 },
    /// At start of battle, `chance` percent of the time, call `unit` in at
    /// the back of the roster.
    ReinforceOnStart { unit: Unit, chance: u32 },
    /// When bought, give every other team member the stat deltas.
    RallyOnBuy { attack: i32, health: i32 },
}

impl StockAbility {
    fn buff_others(event: &mut TriggerEvent<'_>, attack: i32, health: i32) {
        let subject = event.subject;
        for (index, ally) in event.friendly.iter_mut().enumerate() {
            if index != subject {
                ally.buff(attack, health);
            }
        }
    }
}

impl Ability for StockAbility {
    fn on_buy(&self, event: &mut TriggerEvent<'_>) {
        if let StockAbility::RallyOnBuy { attack, health } = self {
            Self::buff_others(event, *attack, *health);
        }
    }

    fn on_start_of_battle(&self, event: &mut TriggerEvent<'_>) {
        match self {
            StockAbility::BuffAlliesOnStart { attack, health } => {
                Self::buff_others(event, *attack, *health);
            }
            StockAbility::SnipeOnStart { damage } => {
                let len = event.enemy.len();
                if let Some(index) = event.rng.choose_index(len) {
                    if let Some(target) = event.enemy.get_mut(index) {
                        target.apply_damage(*damage);
                    }
                }
            }
            StockAbility::ReinforceOnStart { unit, chance } => {
                if event.rng.roll_percent(*chance) {
                    event.friendly.summon_back(unit.clone());
                }
            }
            _ => {}
        }
    }

    fn on_hurt(&self, event: &mut TriggerEvent<'_>) {
        match self {
            StockAbility::GrowOnHurt { attack } => {
                if let Some(unit) = event.subject_mut() {
                    unit.buff(*attack, 0);
                }
            }
            StockAbility::HealOnHurt { health } => {
                if let Some(unit) = event.subject_mut() {
                    unit.heal(*health);
                }
            }
            _ => {}
        }
    }

    fn on_faint(&self, event: &mut TriggerEvent<'_>) {
        if let StockAbility::SummonOnFaint { unit } = self {
            let behind = event.subject + 1;
            event.friendly.summon(behind, unit.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::{resolve, Outcome, Side};
    use crate::abilities::AbilityRegistry;
    use alloc::vec;

    #[test]
    fn stock_ability_from_json() {
        let json = r#"{"type": "summonOnFaint", "unit": {"name": "Bee", "templateId": "bee", "attack": 1, "health": 1}}"#;
        let ability: StockAbility = serde_json::from_str(json).unwrap();

        assert_eq!(
            ability,
            StockAbility::SummonOnFaint {
                unit: Unit::new("Bee", "bee", 1, 1)
            }
        );
    }

    #[test]
    fn reinforcement_follows_its_chance() {
        let squire = Unit::new("Squire", "squire", 2, 2);
        let registry = |chance| {
            AbilityRegistry::new().with(
                "knight",
                StockAbility::ReinforceOnStart {
                    unit: squire.clone(),
                    chance,
                },
            )
        };
        let team_a = vec![Unit::new("Knight", "knight", 1, 1)];
        let team_b = vec![Unit::new("Pawn", "pawn", 1, 2)];

        // Knight and Pawn trade, the Squire finishes the Pawn in round 2.
        let always = resolve(&team_a, &team_b, &registry(100), 3).unwrap();
        assert_eq!(always.outcome, Outcome::Win(Side::A));
        assert_eq!(always.rounds, 2);

        let never = resolve(&team_a, &team_b, &registry(0), 3).unwrap();
        assert_eq!(never.outcome, Outcome::Win(Side::B));
        assert_eq!(never.rounds, 1);
    }
}
