//! Spawn point placement on the flat lobby plane.
//!
//! Points are written as `[x, y, z]` triples into a flat `f32` buffer, with
//! `x` and `y` drawn from the supplied generator and `z` pinned to zero.

use rand::RngCore;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::seed::{RngAlgorithm, SpawnRng};

/// Spawn coordinates are drawn from `0..SPAWN_COORD_RANGE`.
pub const SPAWN_COORD_RANGE: u32 = 100;

/// Floats per spawn point in a flat buffer.
pub const SPAWN_POINT_STRIDE: usize = 3;

/// Upper bound accepted by [`SpawnPoint::is_valid`].
const LOBBY_EXTENT: f32 = 100.0;

/// A position on the lobby plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl SpawnPoint {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Decode consecutive `[x, y, z]` triples. A trailing partial triple is ignored.
    pub fn from_buffer(buffer: &[f32]) -> Vec<Self> {
        buffer
            .chunks_exact(SPAWN_POINT_STRIDE)
            .map(|c| Self::new(c[0], c[1], c[2]))
            .collect()
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &SpawnPoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Whether `other` lies within `range` (inclusive).
    pub fn is_in_range(&self, other: &SpawnPoint, range: f32) -> bool {
        self.distance(other) <= range
    }

    /// All components finite and inside the lobby cube `[0, 100]`.
    pub fn is_valid(&self) -> bool {
        [self.x, self.y, self.z]
            .iter()
            .all(|c| c.is_finite() && (0.0..=LOBBY_EXTENT).contains(c))
    }
}

/// Floats needed for `num_points` triples, or `None` if that overflows `usize`.
pub fn spawn_buffer_len(num_points: usize) -> Option<usize> {
    num_points.checked_mul(SPAWN_POINT_STRIDE)
}

fn required_len(num_points: usize) -> usize {
    spawn_buffer_len(num_points)
        .unwrap_or_else(|| panic!("{num_points} spawn points overflow the buffer length"))
}

#[inline]
fn draw_coord<R: RngCore + ?Sized>(rng: &mut R) -> f32 {
    (rng.next_u32() % SPAWN_COORD_RANGE) as f32
}

/// Write `num_points` spawn triples into the front of `buffer`.
///
/// For each point `x` is drawn before `y`; `z` is always `0.0`. Floats past
/// `3 * num_points` are left untouched.
///
/// # Panics
///
/// Panics if `3 * num_points` overflows `usize` or `buffer` holds fewer
/// than `3 * num_points` floats.
pub fn fill_spawn_points<R: RngCore + ?Sized>(buffer: &mut [f32], num_points: usize, rng: &mut R) {
    let len = required_len(num_points);
    for point in buffer[..len].chunks_exact_mut(SPAWN_POINT_STRIDE) {
        point[0] = draw_coord(rng);
        point[1] = draw_coord(rng);
        point[2] = 0.0;
    }
    debug!(num_points, "filled spawn points");
}

/// Seed a fresh generator, fill a buffer and decode it.
///
/// # Panics
///
/// Panics if `3 * num_points` overflows `usize`.
pub fn generate_spawn_points(
    num_points: usize,
    seed: i32,
    algorithm: RngAlgorithm,
) -> Vec<SpawnPoint> {
    let mut rng = SpawnRng::new(algorithm, seed);
    let mut buffer = vec![0.0; required_len(num_points)];
    fill_spawn_points(&mut buffer, num_points, &mut rng);
    SpawnPoint::from_buffer(&buffer)
}

/// Uniformly choose one of `points`, or `None` if there are none.
pub fn pick_spawn_point<R: RngCore + ?Sized>(
    points: &[SpawnPoint],
    rng: &mut R,
) -> Option<SpawnPoint> {
    points.choose(rng).copied()
}
