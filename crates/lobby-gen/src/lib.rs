//! Lobby layout generation: placeholder heightmaps and seeded spawn points.
//!
//! Both generators write into caller-owned flat buffers. The [`ffi`] module
//! exposes them over the C ABI for wasm hosts; native hosts use the safe
//! slice-based functions re-exported here.

mod error;
mod heightmap;
mod seed;
mod spawn;

pub mod ffi;

pub use error::GenerateError;
pub use heightmap::{HEIGHTMAP_MODULUS, HeightmapFiller, fill_heightmap, generate_heightmap};
pub use seed::{LibcRand, RngAlgorithm, SpawnRng};
pub use spawn::{
    SPAWN_COORD_RANGE, SPAWN_POINT_STRIDE, SpawnPoint, fill_spawn_points, generate_spawn_points,
    pick_spawn_point, spawn_buffer_len,
};
