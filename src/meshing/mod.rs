//! # Meshing Module
//!
//! Converts dense voxel grids into renderable, culled geometry. The
//! greedy mesher in [`greedy`] is the entry point; [`face`] holds the
//! merged-quad representation and [`mesh`] the GPU-ready buffers.

pub mod face;
pub mod greedy;
pub mod mesh;

pub use face::QuadFace;
pub use greedy::{collect_quads, mesh_grid};
pub use mesh::{MeshData, Vertex};
