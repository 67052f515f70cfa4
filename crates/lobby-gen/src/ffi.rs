//! C-ABI exports for wasm and native hosts.
//!
//! The host allocates both buffers (typically inside the module's linear
//! memory) and reads them back after the call. Neither export allocates or
//! frees. A non-positive count performs no writes and never dereferences the
//! pointer. A null pointer with a positive count, or a point count whose
//! buffer length overflows `usize`, is logged and ignored.

use std::slice;

use tracing::error;

use crate::seed::LibcRand;
use crate::spawn::spawn_buffer_len;
use crate::{GenerateError, fill_heightmap, fill_spawn_points};

/// Borrow `len` elements at `ptr`, treating `len == 0` as an empty slice.
///
/// # Safety
///
/// If `len > 0` and `ptr` is non-null, `ptr` must be valid for `len` writes
/// and not aliased for the lifetime of the returned slice.
unsafe fn host_buffer<'a, T>(
    ptr: *mut T,
    len: usize,
    export: &'static str,
) -> Result<&'a mut [T], GenerateError> {
    if len == 0 {
        return Ok(&mut []);
    }
    if ptr.is_null() {
        return Err(GenerateError::NullBuffer { export });
    }
    // SAFETY: non-null and, per the caller contract, valid for `len` writes.
    Ok(unsafe { slice::from_raw_parts_mut(ptr, len) })
}

fn count_to_len(count: i32) -> usize {
    usize::try_from(count).unwrap_or(0)
}

fn spawn_host_len(num_points: usize, export: &'static str) -> Result<usize, GenerateError> {
    spawn_buffer_len(num_points).ok_or(GenerateError::CountOverflow {
        export,
        count: num_points,
    })
}

/// Fill `size` cells of `buffer` with `(i * seed) % 256`.
///
/// # Safety
///
/// When `size > 0`, `buffer` must be null or valid for `size` consecutive
/// `i32` writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn generate_heightmap(buffer: *mut i32, size: i32, seed: i32) {
    let size = count_to_len(size);
    // SAFETY: forwarded caller contract.
    match unsafe { host_buffer(buffer, size, "generate_heightmap") } {
        Ok(cells) => fill_heightmap(cells, size, seed),
        Err(e) => error!("{e}"),
    }
}

/// Seed a fresh musl-compatible generator with `seed` and write `num_points`
/// `[x, y, 0.0]` triples into `buffer`.
///
/// # Safety
///
/// When `num_points > 0`, `buffer` must be null or valid for
/// `3 * num_points` consecutive `f32` writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn generate_spawn_points(buffer: *mut f32, num_points: i32, seed: i32) {
    let num_points = count_to_len(num_points);
    // SAFETY: forwarded caller contract.
    let floats = spawn_host_len(num_points, "generate_spawn_points")
        .and_then(|len| unsafe { host_buffer(buffer, len, "generate_spawn_points") });
    match floats {
        Ok(floats) => {
            let mut rng = LibcRand::new(seed);
            fill_spawn_points(floats, num_points, &mut rng);
        }
        Err(e) => error!("{e}"),
    }
}
