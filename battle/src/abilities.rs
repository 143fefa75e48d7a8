//! Ability hooks and the registry that binds them to unit templates.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::rng::BattleRng;
use crate::roster::RosterHandle;
use crate::types::Unit;

/// Points at which the engine (or the orchestrator) fires hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerKind {
    OnBuy,
    StartOfBattle,
    OnHurt,
    OnFaint,
}

/// Everything a hook may see or touch.
///
/// The subject is `friendly[subject]`. Summons on the friendly roster always
/// land behind the subject, so the index stays valid for the whole call.
pub struct TriggerEvent<'a> {
    pub kind: TriggerKind,
    pub subject: usize,
    pub friendly: RosterHandle<'a>,
    pub enemy: RosterHandle<'a>,
    pub rng: &'a mut dyn BattleRng,
}

impl<'a> TriggerEvent<'a> {
    pub fn subject(&self) -> Option<&Unit> {
        self.friendly.get(self.subject)
    }

    pub fn subject_mut(&mut self) -> Option<&mut Unit> {
        self.friendly.get_mut(self.subject)
    }
}

/// Capability interface for unit abilities.
///
/// Every hook defaults to a no-op, so an ability implements only the
/// triggers it cares about. Hooks run synchronously and must be done with
/// their effects when they return.
pub trait Ability: Send + Sync {
    fn on_buy(&self, _event: &mut TriggerEvent<'_>) {}

    fn on_start_of_battle(&self, _event: &mut TriggerEvent<'_>) {}

    /// Fired right after the subject took damage, before any faint check.
    fn on_hurt(&self, _event: &mut TriggerEvent<'_>) {}

    /// Fired while the fainted subject is still at the front of its roster.
    /// The engine removes it once every hook has returned.
    fn on_faint(&self, _event: &mut TriggerEvent<'_>) {}
}

/// Maps unit templates to their abilities.
///
/// A template may carry several abilities; they fire in registration order.
/// Templates with nothing registered simply have no hooks.
#[derive(Default)]
pub struct AbilityRegistry {
    abilities: BTreeMap<String, Vec<Box<dyn Ability>>>,
}

impl AbilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, template_id: &str, ability: impl Ability + 'static) {
        self.register_boxed(template_id, Box::new(ability));
    }

    pub fn register_boxed(&mut self, template_id: &str, ability: Box<dyn Ability>) {
        self.abilities
            .entry(template_id.to_string())
            .or_default()
            .push(ability);
    }

    pub fn with(mut self, template_id: &str, ability: impl Ability + 'static) -> Self {
        self.register(template_id, ability);
        self
    }

    pub fn has_abilities(&self, template_id: &str) -> bool {
        self.abilities
            .get(template_id)
            .map_or(false, |list| !list.is_empty())
    }

    /// Number of templates with at least one ability.
    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    /// Fire every ability bound to `template_id` for `event.kind`.
    pub fn dispatch(&self, template_id: &str, event: &mut TriggerEvent<'_>) {
        let Some(list) = self.abilities.get(template_id) else {
            return;
        };
        for ability in list {
            match event.kind {
                TriggerKind::OnBuy => ability.on_buy(event),
                TriggerKind::StartOfBattle => ability.on_start_of_battle(event),
                TriggerKind::OnHurt => ability.on_hurt(event),
                TriggerKind::OnFaint => ability.on_faint(event),
            }
        }
    }
}

impl core::fmt::Debug for AbilityRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.abilities.iter().map(|(id, list)| (id, list.len())))
            .finish()
    }
}
