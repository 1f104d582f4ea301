//! # Chunk Module
//!
//! A chunk is one streamed unit of the world: a dense voxel grid at a
//! fixed column position, the mesh derived from it, and a dirty flag
//! tying the two together. The world streams chunks in and out around
//! the viewer; each chunk owns its own terrain fill and mesh rebuild.

use cgmath::{Point2, Point3};
use log::{debug, warn};

use crate::meshing::{mesh_grid, MeshData};
use crate::rendering::TextureAtlas;
use crate::terrain::{self, BiomeManager};
use crate::voxels::block::{block_type::BlockType, BlockId, AIR};

pub mod grid;

pub use grid::VoxelGrid;

/// Side length of a chunk in voxels.
pub const CHUNK_DIMENSION: i32 = 16;

/// One streamed column of the world: voxel storage plus derived mesh.
///
/// The mesh is a cache of the grid's surface. Any voxel write that
/// changes stored data sets the dirty flag; [`Chunk::rebuild_mesh`]
/// clears it. A dirty chunk must not be drawn with its stale mesh.
#[derive(Debug)]
pub struct Chunk {
    /// Chunk coordinates: world position divided by the chunk size.
    position: Point2<i32>,
    grid: VoxelGrid,
    mesh: MeshData,
    dirty: bool,
}

impl Chunk {
    /// Creates an empty (all-air) chunk at the given chunk coordinates.
    ///
    /// The fresh chunk is marked dirty: its (empty) mesh has never been
    /// built, so the streaming step meshes it before first draw.
    ///
    /// # Arguments
    /// * `size` - Side length of the chunk in voxels
    /// * `position` - Chunk coordinates on the XZ plane
    pub fn new(size: i32, position: Point2<i32>) -> Self {
        Chunk {
            position,
            grid: VoxelGrid::new(size),
            mesh: MeshData::new(),
            dirty: true,
        }
    }

    /// Returns the chunk's coordinates on the XZ plane.
    #[inline]
    pub fn position(&self) -> Point2<i32> {
        self.position
    }

    /// Returns the side length of the chunk in voxels.
    #[inline]
    pub fn size(&self) -> i32 {
        self.grid.size()
    }

    /// Returns the block id at local coordinates.
    ///
    /// Out-of-range coordinates read as air, matching the grid.
    #[inline]
    pub fn get_voxel(&self, x: i32, y: i32, z: i32) -> BlockId {
        self.grid.get(x, y, z)
    }

    /// Writes a block id at local coordinates.
    ///
    /// The dirty flag is set only when the stored value actually
    /// changes; writing air over air or a block over an identical block
    /// leaves the mesh valid.
    ///
    /// # Returns
    /// `true` if the stored value changed.
    pub fn set_voxel(&mut self, x: i32, y: i32, z: i32, id: BlockId) -> bool {
        let changed = self.grid.set(x, y, z, id);
        if changed {
            self.dirty = true;
        }
        changed
    }

    /// Whether the mesh is stale relative to the grid.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the chunk's current mesh.
    ///
    /// Callers should check [`Chunk::is_dirty`] first; a dirty chunk's
    /// mesh describes an older state of the grid.
    #[inline]
    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// Read access to the underlying grid, for the mesher and raycasts.
    #[inline]
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Regenerates the mesh from the grid and clears the dirty flag.
    ///
    /// Rebuilding a clean chunk is harmless; it produces an identical
    /// mesh. Without an atlas every face uses the full-texture UV rect.
    pub fn rebuild_mesh(&mut self, atlas: Option<&TextureAtlas>) {
        self.mesh = mesh_grid(&self.grid, atlas);
        self.dirty = false;
        debug!(
            "rebuilt mesh for chunk ({}, {}): {} triangles",
            self.position.x,
            self.position.y,
            self.mesh.triangle_count()
        );
    }

    /// Fills the grid with generated terrain, column by column.
    ///
    /// Each column asks the biome manager for its biome and surface
    /// height, lays down strata below the surface, and floods up to the
    /// water level in biomes that hold water. The chunk is marked dirty
    /// afterwards so the streaming step remeshes it.
    ///
    /// Without a biome manager the fill is skipped and the chunk stays
    /// all air; the engine keeps running on an empty world.
    pub fn fill_terrain(&mut self, biomes: Option<&BiomeManager>) {
        let biomes = match biomes {
            Some(biomes) => biomes,
            None => {
                warn!(
                    "no biome manager, leaving chunk ({}, {}) empty",
                    self.position.x, self.position.y
                );
                return;
            }
        };

        let size = self.grid.size();
        let water_level = terrain::water_level(size);

        for x in 0..size {
            for z in 0..size {
                let world_x = self.position.x * size + x;
                let world_z = self.position.y * size + z;
                let biome = biomes.biome_at(world_x, world_z);
                let height = biomes.surface_height(world_x, world_z, size);

                for y in 0..size {
                    let block = if y < height {
                        biome.strata_block(y, height).id()
                    } else if y <= water_level && biome.has_water() {
                        BlockType::WATER.id()
                    } else {
                        AIR
                    };
                    self.grid.set(x, y, z, block);
                }
            }
        }
        self.dirty = true;
    }

    /// Returns the chunk's world-space bounding box for frustum culling.
    ///
    /// # Returns
    /// `(min, max)` corners in world units.
    pub fn aabb(&self) -> (Point3<f32>, Point3<f32>) {
        let size = self.grid.size() as f32;
        let min = Point3::new(
            self.position.x as f32 * size,
            0.0,
            self.position.y as f32 * size,
        );
        let max = Point3::new(min.x + size, size, min.z + size);
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_chunk_is_dirty_and_empty() {
        let chunk = Chunk::new(CHUNK_DIMENSION, Point2::new(0, 0));
        assert!(chunk.is_dirty());
        assert!(chunk.mesh().is_empty());
        assert_eq!(chunk.get_voxel(5, 5, 5), AIR);
    }

    #[test]
    fn voxel_writes_track_the_dirty_flag() {
        let mut chunk = Chunk::new(8, Point2::new(0, 0));
        chunk.rebuild_mesh(None);
        assert!(!chunk.is_dirty());

        // A no-op write keeps the mesh valid.
        assert!(!chunk.set_voxel(1, 1, 1, AIR));
        assert!(!chunk.is_dirty());

        assert!(chunk.set_voxel(1, 1, 1, BlockType::STONE.id()));
        assert!(chunk.is_dirty());

        chunk.rebuild_mesh(None);
        assert!(!chunk.is_dirty());
        assert!(!chunk.mesh().is_empty());
    }

    #[test]
    fn rebuilding_a_clean_chunk_is_harmless() {
        let mut chunk = Chunk::new(8, Point2::new(0, 0));
        chunk.set_voxel(2, 2, 2, BlockType::DIRT.id());
        chunk.rebuild_mesh(None);
        let before = chunk.mesh().triangle_count();
        chunk.rebuild_mesh(None);
        assert_eq!(chunk.mesh().triangle_count(), before);
        assert!(!chunk.is_dirty());
    }

    #[test]
    fn terrain_fill_produces_surface_and_marks_dirty() {
        let biomes = BiomeManager::new(42);
        let mut chunk = Chunk::new(CHUNK_DIMENSION, Point2::new(3, -2));
        chunk.fill_terrain(Some(&biomes));
        assert!(chunk.is_dirty());

        // Every column has a solid bottom cell and an air top cell.
        for x in 0..CHUNK_DIMENSION {
            for z in 0..CHUNK_DIMENSION {
                assert_ne!(chunk.get_voxel(x, 0, z), AIR, "column ({},{})", x, z);
                assert_eq!(
                    chunk.get_voxel(x, CHUNK_DIMENSION - 1, z),
                    AIR,
                    "column ({},{})",
                    x,
                    z
                );
            }
        }
    }

    #[test]
    fn terrain_fill_is_deterministic_per_seed() {
        let biomes = BiomeManager::new(7);
        let mut a = Chunk::new(CHUNK_DIMENSION, Point2::new(1, 1));
        let mut b = Chunk::new(CHUNK_DIMENSION, Point2::new(1, 1));
        a.fill_terrain(Some(&biomes));
        b.fill_terrain(Some(&biomes));
        for x in 0..CHUNK_DIMENSION {
            for y in 0..CHUNK_DIMENSION {
                for z in 0..CHUNK_DIMENSION {
                    assert_eq!(a.get_voxel(x, y, z), b.get_voxel(x, y, z));
                }
            }
        }
    }

    #[test]
    fn missing_biome_manager_leaves_chunk_empty() {
        let mut chunk = Chunk::new(CHUNK_DIMENSION, Point2::new(0, 0));
        chunk.fill_terrain(None);
        for x in 0..CHUNK_DIMENSION {
            for z in 0..CHUNK_DIMENSION {
                assert_eq!(chunk.get_voxel(x, 0, z), AIR);
            }
        }
    }

    #[test]
    fn aabb_covers_the_chunk_in_world_space() {
        let chunk = Chunk::new(16, Point2::new(-1, 2));
        let (min, max) = chunk.aabb();
        assert_eq!(min, Point3::new(-16.0, 0.0, 32.0));
        assert_eq!(max, Point3::new(0.0, 16.0, 48.0));
    }
}
