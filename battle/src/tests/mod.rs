
use std::sync::{Arc, Mutex};

use crate::abilities::{Ability, AbilityRegistry, TriggerEvent};
use crate::battle::{BattleEngine, BattleReport};
use crate::limits::BattleConfig;
use crate::types::Unit;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

/// A unit whose template id is its name.
fn unit(name: &str, attack: i32, health: i32) -> Unit {
    Unit::new(name, name, attack, health)
}

fn run_battle(team_a: &[Unit], team_b: &[Unit]) -> BattleReport {
    run_with(team_a, team_b, &AbilityRegistry::new(), BattleConfig::default())
}

fn run_with(
    team_a: &[Unit],
    team_b: &[Unit],
    registry: &AbilityRegistry,
    config: BattleConfig,
) -> BattleReport {
    BattleEngine::new(registry)
        .with_config(config)
        .resolve(team_a, team_b, 42)
        .expect("rosters should be valid")
}

/// Shared, ordered record of hook invocations.
#[derive(Clone, Default)]
struct TriggerLog(Arc<Mutex<Vec<String>>>);

impl TriggerLog {
    fn push(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }

    fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    /// Entries after the start-of-battle phase.
    fn combat_entries(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|e| !e.starts_with("StartOfBattle"))
            .collect()
    }
}

/// Logs "<Kind> <subject name> <subject health>" for every hook it sees.
struct Recorder(TriggerLog);

impl Recorder {
    fn record(&self, event: &TriggerEvent<'_>) {
        let subject = event.subject().expect("subject must be in the friendly roster");
        self.0
            .push(format!("{:?} {} {}", event.kind, subject.name, subject.health));
    }
}

impl Ability for Recorder {
    fn on_buy(&self, event: &mut TriggerEvent<'_>) {
        self.record(event);
    }

    fn on_start_of_battle(&self, event: &mut TriggerEvent<'_>) {
        self.record(event);
    }

    fn on_hurt(&self, event: &mut TriggerEvent<'_>) {
        self.record(event);
    }

    fn on_faint(&self, event: &mut TriggerEvent<'_>) {
        self.record(event);
    }
}

/// Restores the subject to a fixed health whenever it is hurt.
struct RestoreHealth(i32);

impl Ability for RestoreHealth {
    fn on_hurt(&self, event: &mut TriggerEvent<'_>) {
        if let Some(unit) = event.subject_mut() {
            unit.health = self.0;
        }
    }
}

/// Registry that records every hook fired by any of `templates`.
fn recording_registry(templates: &[&str]) -> (AbilityRegistry, TriggerLog) {
    let log = TriggerLog::default();
    let mut registry = AbilityRegistry::new();
    for template in templates {
        registry.register(template, Recorder(log.clone()));
    }
    (registry, log)
}
