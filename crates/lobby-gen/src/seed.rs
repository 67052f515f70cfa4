//! Seeded generators for spawn placement.
//!
//! Every fill owns its generator; nothing here touches process-wide state.
//! [`LibcRand`] reproduces musl's `srand`/`rand` pair, which is what wasm32
//! C toolchains link, so spawn coordinates match those builds draw for draw.
//! [`SpawnRng`] selects between that stream and a portable ChaCha8 stream.

use std::fmt;
use std::str::FromStr;

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::GenerateError;

// ---------------------------------------------------------------------------
// musl-compatible LCG
// ---------------------------------------------------------------------------

const LCG_MULTIPLIER: u64 = 6364136223846793005;

/// 64-bit LCG with the musl libc `rand()` output function.
///
/// Seeding stores `seed - 1` computed in 32-bit unsigned arithmetic, so seed
/// `0` starts from `0xFFFF_FFFF`. Each draw returns the top 31 bits of the
/// advanced state; [`RngCore::next_u32`] therefore never sets bit 31.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibcRand {
    state: u64,
}

impl LibcRand {
    /// Equivalent of `srand(seed)`.
    pub fn new(seed: i32) -> Self {
        Self {
            state: u64::from((seed as u32).wrapping_sub(1)),
        }
    }

    /// Equivalent of `rand()`: a non-negative value in `0..=i32::MAX`.
    #[inline]
    pub fn next_draw(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(LCG_MULTIPLIER).wrapping_add(1);
        (self.state >> 33) as u32
    }
}

impl RngCore for LibcRand {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_draw()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }
}

impl SeedableRng for LibcRand {
    /// Little-endian `i32` seed.
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i32::from_le_bytes(seed))
    }
}

// ---------------------------------------------------------------------------
// Algorithm selection
// ---------------------------------------------------------------------------

/// Which generator drives spawn placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RngAlgorithm {
    /// musl-compatible LCG, matching wasm32 C builds.
    #[default]
    Libc,
    /// ChaCha8 stream, identical on every platform and target.
    ChaCha8,
}

impl RngAlgorithm {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Libc => "libc",
            Self::ChaCha8 => "chacha8",
        }
    }
}

impl fmt::Display for RngAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RngAlgorithm {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "libc" => Ok(Self::Libc),
            "chacha8" => Ok(Self::ChaCha8),
            _ => Err(GenerateError::UnknownRngAlgorithm(s.to_string())),
        }
    }
}

/// A scoped spawn generator constructed from a seed.
#[derive(Clone, Debug)]
pub enum SpawnRng {
    /// See [`LibcRand`].
    Libc(LibcRand),
    /// ChaCha8 seeded from the seed's 32-bit pattern.
    ChaCha8(ChaCha8Rng),
}

impl SpawnRng {
    /// Build the generator for `algorithm`, seeded from `seed`.
    pub fn new(algorithm: RngAlgorithm, seed: i32) -> Self {
        match algorithm {
            RngAlgorithm::Libc => Self::Libc(LibcRand::new(seed)),
            RngAlgorithm::ChaCha8 => {
                Self::ChaCha8(ChaCha8Rng::seed_from_u64(u64::from(seed as u32)))
            }
        }
    }

    /// The algorithm backing this generator.
    pub fn algorithm(&self) -> RngAlgorithm {
        match self {
            Self::Libc(_) => RngAlgorithm::Libc,
            Self::ChaCha8(_) => RngAlgorithm::ChaCha8,
        }
    }
}

impl RngCore for SpawnRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        match self {
            Self::Libc(rng) => rng.next_u32(),
            Self::ChaCha8(rng) => rng.next_u32(),
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            Self::Libc(rng) => rng.next_u64(),
            Self::ChaCha8(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Self::Libc(rng) => rng.fill_bytes(dest),
            Self::ChaCha8(rng) => rng.fill_bytes(dest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(seed: i32, n: usize) -> Vec<u32> {
        let mut rng = LibcRand::new(seed);
        (0..n).map(|_| rng.next_draw()).collect()
    }

    #[test]
    fn test_libc_rand_matches_musl_reference() {
        assert_eq!(
            draws(1, 6),
            [0, 740882966, 1616430695, 1708849955, 1669437588, 406334850]
        );
        assert_eq!(
            draws(42, 6),
            [311430560, 131117839, 1110653038, 92942940, 1421832848, 1535304859]
        );
    }

    #[test]
    fn test_libc_rand_seed_zero_wraps_in_32_bits() {
        assert_eq!(draws(0, 3), [2049033599, 2025915578, 1407788582]);
    }

    #[test]
    fn test_libc_rand_draws_are_non_negative() {
        let mut rng = LibcRand::new(-123_456);
        for _ in 0..10_000 {
            assert!(rng.next_u32() <= i32::MAX as u32);
        }
    }

    #[test]
    fn test_libc_rand_reseed_restarts_sequence() {
        let mut rng = LibcRand::new(9);
        let first: Vec<u32> = (0..16).map(|_| rng.next_u32()).collect();
        rng = LibcRand::new(9);
        let second: Vec<u32> = (0..16).map(|_| rng.next_u32()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_seed_is_little_endian_i32() {
        let a = LibcRand::from_seed(42i32.to_le_bytes());
        assert_eq!(a, LibcRand::new(42));
    }

    #[test]
    fn test_spawn_rng_chacha8_deterministic() {
        let mut a = SpawnRng::new(RngAlgorithm::ChaCha8, 7);
        let mut b = SpawnRng::new(RngAlgorithm::ChaCha8, 7);
        for _ in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_spawn_rng_algorithms_differ() {
        let mut libc = SpawnRng::new(RngAlgorithm::Libc, 7);
        let mut chacha = SpawnRng::new(RngAlgorithm::ChaCha8, 7);
        let a: Vec<u32> = (0..8).map(|_| libc.next_u32()).collect();
        let b: Vec<u32> = (0..8).map(|_| chacha.next_u32()).collect();
        assert_ne!(a, b);
        assert_eq!(libc.algorithm(), RngAlgorithm::Libc);
        assert_eq!(chacha.algorithm(), RngAlgorithm::ChaCha8);
    }

    #[test]
    fn test_algorithm_parse_and_display() {
        assert_eq!("libc".parse::<RngAlgorithm>(), Ok(RngAlgorithm::Libc));
        assert_eq!("ChaCha8".parse::<RngAlgorithm>(), Ok(RngAlgorithm::ChaCha8));
        assert_eq!(RngAlgorithm::ChaCha8.to_string(), "chacha8");
        assert_eq!(
            "xorshift".parse::<RngAlgorithm>(),
            Err(GenerateError::UnknownRngAlgorithm("xorshift".to_string()))
        );
    }
}
