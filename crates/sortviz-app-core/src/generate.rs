// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Seeded random arrays for reset.

use crate::prefs::{ArrayPrefs, PrefsError};

/// Stateful `xoroshiro128+` pseudo-random number generator.
///
/// * Not cryptographically secure.
/// * Matching seeds yield identical sequences across platforms, so a seed
///   fully reproduces a sequence of generated arrays.
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    state: [u64; 2],
}

impl Prng {
    /// Constructs a PRNG from a single 64-bit seed via SplitMix64 expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        let mut state = [splitmix64(&mut sm_state), splitmix64(&mut sm_state)];
        if state == [0, 0] {
            state[0] = 0x9e37_79b9_7f4a_7c15;
        }
        Self { state }
    }

    /// Returns the next raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// Returns the next integer in the inclusive range spanned by `a` and `b`.
    ///
    /// Uses rejection sampling to avoid modulo bias.
    pub fn next_in_range(&mut self, a: i64, b: i64) -> i64 {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let Some(span) = max.abs_diff(min).checked_add(1) else {
            // Full i64 range: every u64 maps to exactly one value.
            return min.wrapping_add_unsigned(self.next_u64());
        };
        if span == 1 {
            return min;
        }

        let offset = if span.is_power_of_two() {
            self.next_u64() & (span - 1)
        } else {
            let bound = u64::MAX - u64::MAX % span;
            loop {
                let candidate = self.next_u64();
                if candidate < bound {
                    break candidate % span;
                }
            }
        };
        min.wrapping_add_unsigned(offset)
    }
}

/// Produces fresh arrays of a fixed shape from a seeded [`Prng`].
#[derive(Debug, Clone)]
pub struct ArrayGenerator {
    shape: ArrayPrefs,
    prng: Prng,
}

impl ArrayGenerator {
    /// Builds a generator for `shape`, seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError`] if the shape is empty or its range inverted.
    pub fn new(shape: ArrayPrefs, seed: u64) -> Result<Self, PrefsError> {
        shape.validate()?;
        Ok(Self {
            shape,
            prng: Prng::from_seed_u64(seed),
        })
    }

    /// Shape of generated arrays.
    pub fn shape(&self) -> ArrayPrefs {
        self.shape
    }

    /// Generates the next array: `len` values uniform in `[min_value, max_value]`.
    pub fn generate(&mut self) -> Vec<i64> {
        let ArrayPrefs {
            len,
            min_value,
            max_value,
        } = self.shape;
        (0..len)
            .map(|_| self.prng.next_in_range(min_value, max_value))
            .collect()
    }
}
