#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Terravox
//!
//! A voxel world engine core: dense chunked voxel storage, greedy
//! surface meshing, viewer-centered chunk streaming, view-frustum
//! culling, and raycast-driven block edits.
//!
//! This crate is the simulation half of a voxel game. It owns the
//! world data and everything derived from it, and hands a rendering
//! backend ready-to-upload vertex/index buffers plus a visibility test;
//! it opens no window and talks to no GPU.
//!
//! ## Key Modules
//!
//! * `voxels` - Block identity, chunked storage, streaming, and edits
//! * `meshing` - The greedy face-merging mesher and its buffer types
//! * `terrain` - Biome classification and surface-height generation
//! * `rendering` - Texture-atlas UV lookup and the view-frustum culler
//!
//! ## Usage
//!
//! ```no_run
//! use terravox::settings::EngineSettings;
//!
//! fn main() {
//!     terravox::run_demo(&EngineSettings::default());
//! }
//! ```

use cgmath::{perspective, Deg, Matrix4, Point3, Vector3};
use log::info;

pub mod meshing;
pub mod rendering;
pub mod settings;
pub mod terrain;
pub mod voxels;

pub use meshing::{MeshData, Vertex};
pub use rendering::{Frustum, TextureAtlas};
pub use settings::EngineSettings;
pub use terrain::BiomeManager;
pub use voxels::{VoxelWorld, CHUNK_DIMENSION};

/// Maximum reach of the demo's block interactions, in world units.
const DEMO_REACH: f32 = 6.0;

/// Runs a headless simulation: streams chunks around a moving viewer,
/// culls against the viewer's frustum, and periodically digs at the
/// terrain, logging what a renderer would draw each tick.
///
/// This exercises every engine subsystem end to end without a
/// rendering backend; it doubles as the binary's main loop and as a
/// smoke test for deployments.
///
/// # Arguments
/// * `settings` - Runtime configuration (seed, radius, tick count)
pub fn run_demo(settings: &EngineSettings) {
    info!(
        "starting demo: seed {}, radius {}, {} ticks",
        settings.seed, settings.render_radius, settings.ticks
    );

    let biomes = BiomeManager::new(settings.seed);
    let atlas = TextureAtlas::with_default_blocks(256, 256, 16);
    let mut world = VoxelWorld::new(CHUNK_DIMENSION);
    let mut frustum = Frustum::new();

    let projection = perspective(Deg(70.0), 16.0 / 9.0, 0.1, 400.0);
    let mut viewer = Point3::new(0.0, CHUNK_DIMENSION as f32 * 0.75, 0.0);
    let heading = Vector3::new(1.0, 0.0, 0.0);

    for tick in 0..settings.ticks {
        viewer += heading * settings.viewer_speed;

        world.update_chunks(viewer, settings.render_radius, Some(&biomes), Some(&atlas));

        let view = Matrix4::look_at_rh(viewer, viewer + heading, Vector3::unit_y());
        frustum.update_from_vp(&(projection * view));

        let mut visible = 0usize;
        let mut triangles = 0usize;
        for chunk in world.chunks() {
            let (min, max) = chunk.aabb();
            if frustum.is_box_visible(min, max) {
                visible += 1;
                triangles += chunk.mesh().triangle_count();
            }
        }

        // Dig straight down every few ticks to exercise the edit path.
        if tick % 10 == 0 {
            let down = Vector3::new(0.0, -1.0, 0.0);
            if let Some(hit) = voxels::raycast(&world, viewer, down, DEMO_REACH) {
                voxels::break_voxel(&mut world, &hit);
            }
        }

        info!(
            "tick {}: {} chunks resident, {} visible, {} triangles in view",
            tick,
            world.chunk_count(),
            visible,
            triangles
        );
    }

    info!("demo finished: {} chunks resident", world.chunk_count());
}
