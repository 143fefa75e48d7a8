//! Seeded randomness for ability effects.
//!
//! The engine itself never draws from these; a source is threaded through
//! every [`TriggerEvent`](crate::TriggerEvent) so that abilities with random
//! effects stay reproducible from the battle seed.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

/// Random number source handed to ability hooks.
pub trait BattleRng {
    /// Next raw draw. Every other method is built on this one.
    fn next_u32(&mut self) -> u32;

    /// Uniform-ish draw in `[0, max)`; 0 when `max` is 0.
    fn gen_range(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        (self.next_u32() as usize) % max
    }

    /// Pick an index into a collection of `len` items, `None` when empty.
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.gen_range(len))
        }
    }

    /// True with probability `percent`/100.
    fn roll_percent(&mut self, percent: u32) -> bool {
        (self.gen_range(100) as u32) < percent.min(100)
    }
}

/// Per-battle random source, seeded from the `resolve` seed.
///
/// Replaying a battle with the same seed hands hooks the same draws in the
/// same order, which is what keeps simulation runs reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    /// Battle seeds are u64; the xorshift32 state is their folded halves,
    /// bumped to 1 when the fold is 0.
    pub fn seed_from_u64(seed: u64) -> Self {
        let state = ((seed as u32) ^ ((seed >> 32) as u32)).max(1);
        Self { state }
    }
}

impl BattleRng for XorShiftRng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}
