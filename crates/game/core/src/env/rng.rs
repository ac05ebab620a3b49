//! RNG oracle for reproducible random number generation.
//!
//! Every roll the combat core makes (critical, dodge, variance, status
//! attachment, hazard damage, hazard selection) is drawn through
//! [`RngOracle`], so a seeded generator replays a fight exactly and tests can
//! force individual outcomes.

/// Source of randomness for combat rolls.
pub trait RngOracle {
    /// Generate the next random u32 value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Returns true with probability `chance` (clamped to `[0, 1]`).
    ///
    /// A chance of zero never succeeds; a chance of one always does.
    fn roll_chance(&mut self, chance: f64) -> bool {
        let chance = chance.clamp(0.0, 1.0);
        self.next_unit() < chance
    }

    /// Uniform value in `[min, max]`.
    fn range_f64(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        min + self.next_unit() * (max - min)
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = f64::from(max - min) + 1.0;
        let offset = (self.next_unit() * span) as u32;
        min + offset.min(max - min)
    }

    /// Picks an index in `0..len`, or `None` for an empty slice.
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = (self.next_unit() * len as f64) as usize;
        Some(index.min(len - 1))
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Same seed, same sequence.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let output = Self::pcg_output(self.state);
        self.state = Self::pcg_step(self.state);
        output
    }
}

/// Replays a fixed list of unit values, cycling when exhausted.
///
/// Lets a caller force specific outcomes: a value of `0.99` fails any roll
/// below 99%, `0.0` passes any roll above 0%, and `0.5` lands a `[0.8, 1.2]`
/// variance roll exactly on `1.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceRng {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let mut values: Vec<f64> = values.into();
        if values.is_empty() {
            values.push(0.5);
        }
        for value in &mut values {
            *value = value.clamp(0.0, 0.999_999);
        }
        Self { values, cursor: 0 }
    }

    /// Always yields the same unit value.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RngOracle for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_unit() * (f64::from(u32::MAX) + 1.0)) as u32
    }

    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Compute a seed from an encounter seed and a sequence number.
///
/// Use a different `stream` for independent generators within the same
/// encounter (e.g. one for the player's rolls, one for hazards).
pub fn compute_seed(encounter_seed: u64, nonce: u64, stream: u32) -> u64 {
    // These constants are based on SplitMix64 and FxHash multipliers
    let mut hash = encounter_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(stream).wrapping_mul(0x517cc1b727220a95);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_reproducible() {
        let mut a = PcgRng::new(42);
        let mut b = PcgRng::new(42);
        let first: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let second: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_eq!(first, second);
        assert_ne!(first[0], first[1]);
    }

    #[test]
    fn unit_values_stay_in_range() {
        let mut rng = PcgRng::new(7);
        for _ in 0..1_000 {
            let unit = rng.next_unit();
            assert!((0.0..1.0).contains(&unit));
            let roll = rng.range(3, 6);
            assert!((3..=6).contains(&roll));
        }
    }

    #[test]
    fn chance_edges_are_exact() {
        let mut rng = SequenceRng::new(vec![0.0, 0.999]);
        assert!(!rng.roll_chance(0.0));
        assert!(rng.roll_chance(1.0));
    }

    #[test]
    fn sequence_rng_cycles_and_counts_draws() {
        let mut rng = SequenceRng::new(vec![0.1, 0.9]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.9);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn variance_midpoint_is_one() {
        let mut rng = SequenceRng::constant(0.5);
        assert!((rng.range_f64(0.8, 1.2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pick_index_bounds() {
        let mut rng = SequenceRng::constant(0.999);
        assert_eq!(rng.pick_index(0), None);
        assert_eq!(rng.pick_index(4), Some(3));
    }

    #[test]
    fn seeds_differ_per_stream() {
        assert_ne!(compute_seed(1, 0, 0), compute_seed(1, 0, 1));
        assert_eq!(compute_seed(9, 3, 2), compute_seed(9, 3, 2));
    }
}
