//! Engine-owned roster access for ability hooks.
//!
//! Hooks never hold the roster itself. They get a [`RosterHandle`] that allows
//! stat changes and insertion but no removal, and that refuses to insert in
//! front of units the engine is still working on.

use alloc::vec::Vec;
use core::slice;

use crate::types::Unit;

/// Mutable view of one roster for the duration of a hook call.
#[derive(Debug)]
pub struct RosterHandle<'a> {
    units: &'a mut Vec<Unit>,
    floor: usize,
    capacity: usize,
}

impl<'a> RosterHandle<'a> {
    /// `floor` is the lowest index an insertion may land at; `capacity` caps
    /// the roster length reachable through [`summon`](Self::summon).
    pub(crate) fn new(units: &'a mut Vec<Unit>, floor: usize, capacity: usize) -> Self {
        Self {
            units,
            floor,
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn front(&self) -> Option<&Unit> {
        self.units.first()
    }

    pub fn get(&self, index: usize) -> Option<&Unit> {
        self.units.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Unit> {
        self.units.get_mut(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Unit> {
        self.units.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Unit> {
        self.units.iter_mut()
    }

    /// Lowest index a summon can currently land at.
    pub fn insertion_floor(&self) -> usize {
        self.floor.min(self.units.len())
    }

    pub fn is_full(&self) -> bool {
        self.units.len() >= self.capacity
    }

    /// Insert `unit` at `index`, clamped into `[insertion_floor, len]`.
    ///
    /// Returns the index the unit landed at, or `None` when the roster is
    /// full.
    pub fn summon(&mut self, index: usize, unit: Unit) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let at = index.clamp(self.insertion_floor(), self.units.len());
        self.units.insert(at, unit);
        Some(at)
    }

    /// Append `unit` at the back of the roster.
    pub fn summon_back(&mut self, unit: Unit) -> Option<usize> {
        let back = self.units.len();
        self.summon(back, unit)
    }
}
