//! Parallel battle runner.
//!
//! Every (matchup, seed) pair is an independent battle with its own copied
//! rosters, so they fan out over the rayon pool with nothing shared but the
//! read-only registry.

use std::ops::Range;

use autogame_battle::{AbilityRegistry, BattleConfig, BattleEngine, BattleReport, Outcome, Side};
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::matchups::Matchup;

/// Aggregated results of one matchup over a range of seeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupSummary {
    pub name: String,
    pub battles: u64,
    pub wins_a: u64,
    pub wins_b: u64,
    pub draws: u64,
    /// Draws that came from the round cap
    pub capped_draws: u64,
    pub invalid: u64,
    pub mean_rounds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MatchupSummary {
    fn record(&mut self, report: &BattleReport) {
        self.battles += 1;
        match report.outcome {
            Outcome::Win(Side::A) => self.wins_a += 1,
            Outcome::Win(Side::B) => self.wins_b += 1,
            Outcome::Draw => {
                self.draws += 1;
                if report.round_cap_hit {
                    self.capped_draws += 1;
                }
            }
        }
    }
}

pub fn run_matchups(
    matchups: &[Matchup],
    registry: &AbilityRegistry,
    config: BattleConfig,
    seeds: Range<u64>,
) -> Vec<MatchupSummary> {
    let engine = BattleEngine::new(registry).with_config(config);

    matchups
        .par_iter()
        .map(|matchup| {
            let results: Vec<_> = seeds
                .clone()
                .into_par_iter()
                .map(|seed| engine.resolve(&matchup.team_a, &matchup.team_b, seed))
                .collect();

            let mut summary = MatchupSummary {
                name: matchup.name.clone(),
                ..Default::default()
            };
            let mut total_rounds = 0u64;
            for result in results {
                match result {
                    Ok(report) => {
                        total_rounds += u64::from(report.rounds);
                        summary.record(&report);
                    }
                    Err(err) => {
                        summary.invalid += 1;
                        summary.error.get_or_insert_with(|| err.to_string());
                    }
                }
            }
            if summary.battles > 0 {
                summary.mean_rounds = total_rounds as f64 / summary.battles as f64;
            }

            if let Some(err) = &summary.error {
                warn!("{}: {}", summary.name, err);
            } else {
                info!(
                    "{}: {} battles, A {} / B {} / draw {} ({} capped)",
                    summary.name,
                    summary.battles,
                    summary.wins_a,
                    summary.wins_b,
                    summary.draws,
                    summary.capped_draws
                );
            }
            summary
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use autogame_battle::{StockAbility, Unit};

    fn unit(name: &str, attack: i32, health: i32) -> Unit {
        Unit::new(name, name, attack, health)
    }

    #[test]
    fn summarises_each_matchup_in_order() {
        let matchups = vec![
            Matchup {
                name: "front to back".into(),
                team_a: vec![unit("A1", 3, 7)],
                team_b: vec![unit("B1", 2, 2), unit("B2", 3, 1)],
            },
            Matchup {
                name: "mutual".into(),
                team_a: vec![unit("A1", 1, 3)],
                team_b: vec![unit("B1", 3, 1)],
            },
        ];

        let summaries = run_matchups(&matchups, &AbilityRegistry::new(), BattleConfig::default(), 0..8);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "front to back");
        assert_eq!((summaries[0].battles, summaries[0].wins_a), (8, 8));
        assert_eq!(summaries[0].mean_rounds, 2.0);
        assert_eq!((summaries[1].draws, summaries[1].capped_draws), (8, 0));
    }

    #[test]
    fn counts_capped_draws() {
        let registry =
            AbilityRegistry::new().with("troll", StockAbility::HealOnHurt { health: 1 });
        let troll = Unit::new("Troll", "troll", 1, 3);
        let matchups = vec![Matchup {
            name: "trolls".into(),
            team_a: vec![troll.clone()],
            team_b: vec![troll],
        }];

        let config = BattleConfig::default().with_max_rounds(5);
        let summaries = run_matchups(&matchups, &registry, config, 0..3);

        assert_eq!(summaries[0].capped_draws, 3);
        assert_eq!(summaries[0].mean_rounds, 5.0);
    }

    #[test]
    fn reports_invalid_rosters() {
        let matchups = vec![Matchup {
            name: "broken".into(),
            team_a: vec![unit("Broken", -1, 5)],
            team_b: vec![unit("Fine", 1, 1)],
        }];

        let summaries = run_matchups(&matchups, &AbilityRegistry::new(), BattleConfig::default(), 0..4);

        assert_eq!(summaries[0].invalid, 4);
        assert_eq!(summaries[0].battles, 0);
        assert!(summaries[0].error.as_deref().unwrap().contains("invalid unit state"));
    }

    #[test]
    fn seeded_abilities_are_reproducible() {
        let registry = AbilityRegistry::new().with("sniper", StockAbility::SnipeOnStart { damage: 3 });
        let matchups = vec![Matchup {
            name: "snipers".into(),
            team_a: vec![Unit::new("Sniper", "sniper", 1, 4), unit("A2", 2, 3)],
            team_b: vec![Unit::new("Sniper", "sniper", 1, 4), unit("B2", 2, 3)],
        }];

        let first = run_matchups(&matchups, &registry, BattleConfig::default(), 10..60);
        let second = run_matchups(&matchups, &registry, BattleConfig::default(), 10..60);

        assert_eq!(first, second);
    }
}
