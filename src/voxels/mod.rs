//! # Voxels Module
//!
//! Everything that stores or edits blocks: block identity, the dense
//! per-chunk grid, the chunk store with its streaming policy, and the
//! raycast-driven edit operations.

pub mod block;
pub mod chunk;
pub mod raycast;
pub mod world;

pub use block::{BlockId, AIR};
pub use chunk::{Chunk, VoxelGrid, CHUNK_DIMENSION};
pub use raycast::{break_voxel, place_voxel, raycast, RaycastHit};
pub use world::VoxelWorld;
