//! Matchup files: rosters plus the stock abilities bound to their templates.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use autogame_battle::{AbilityRegistry, BattleConfig, StockAbility, Unit};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupFile {
    /// template id -> abilities, fired in listed order
    #[serde(default)]
    pub abilities: BTreeMap<String, Vec<StockAbility>>,
    #[serde(default)]
    pub config: Option<BattleConfig>,
    pub matchups: Vec<Matchup>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    pub name: String,
    pub team_a: Vec<Unit>,
    pub team_b: Vec<Unit>,
}

impl MatchupFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn registry(&self) -> AbilityRegistry {
        let mut registry = AbilityRegistry::new();
        for (template_id, abilities) in &self.abilities {
            for ability in abilities {
                registry.register(template_id, ability.clone());
            }
        }
        registry
    }
}
