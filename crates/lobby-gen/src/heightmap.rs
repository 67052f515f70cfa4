//! Placeholder heightmap filler for lobby layouts.
//!
//! Each cell is a pure function of its index and the seed. The formula stands
//! in for a coherent noise function and is kept stable so that hosts comparing
//! layouts across builds see identical grids.

use tracing::debug;

/// Height values wrap at this modulus.
pub const HEIGHTMAP_MODULUS: i32 = 256;

/// Fills flat integer grids with `(index * seed) % 256`.
///
/// Multiplication wraps on 32-bit overflow and the remainder truncates toward
/// zero, so negative products yield values in `-255..=0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeightmapFiller {
    seed: i32,
}

impl HeightmapFiller {
    /// Create a filler for the given seed.
    pub fn new(seed: i32) -> Self {
        Self { seed }
    }

    /// Height of the cell at `index`.
    #[inline]
    pub fn sample(&self, index: usize) -> i32 {
        (index as i32).wrapping_mul(self.seed) % HEIGHTMAP_MODULUS
    }

    /// Write `size` cells into the front of `buffer`.
    ///
    /// Cells past `size` are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` holds fewer than `size` cells.
    pub fn fill(&self, buffer: &mut [i32], size: usize) {
        for (i, cell) in buffer[..size].iter_mut().enumerate() {
            *cell = self.sample(i);
        }
        debug!(size, seed = self.seed, "filled heightmap");
    }

    /// The seed this filler multiplies by.
    pub fn seed(&self) -> i32 {
        self.seed
    }
}

/// Fill the first `size` cells of `buffer` for `seed`.
///
/// # Panics
///
/// Panics if `buffer` holds fewer than `size` cells.
pub fn fill_heightmap(buffer: &mut [i32], size: usize, seed: i32) {
    HeightmapFiller::new(seed).fill(buffer, size);
}

/// Allocate and fill a heightmap of `size` cells.
pub fn generate_heightmap(size: usize, seed: i32) -> Vec<i32> {
    let mut cells = vec![0; size];
    fill_heightmap(&mut cells, size, seed);
    cells
}
