//! # Voxel World Module
//!
//! The chunk store and streaming controller. The world owns every
//! loaded chunk, keyed by chunk coordinates on the XZ plane, and keeps
//! the loaded set equal to a disc of chunks around the viewer. Chunk
//! lookup is O(1) through a hash map, so world-space voxel reads and
//! writes during raycasts stay cheap.

use std::collections::HashMap;

use cgmath::{Point2, Point3};
use log::info;

use crate::rendering::TextureAtlas;
use crate::terrain::BiomeManager;
use crate::voxels::block::{BlockId, AIR};
use crate::voxels::chunk::Chunk;

/// The chunk store plus the streaming policy around a viewer.
///
/// All chunks share one side length, fixed at construction. Chunk
/// coordinates are the floor division of world coordinates by that
/// side length, so negative world positions map to negative chunk
/// coordinates without any seams at zero.
#[derive(Debug)]
pub struct VoxelWorld {
    chunks: HashMap<Point2<i32>, Chunk>,
    chunk_size: i32,
}

impl VoxelWorld {
    /// Creates an empty world.
    ///
    /// # Arguments
    /// * `chunk_size` - Side length of every chunk in voxels
    ///
    /// # Panics
    /// Panics if `chunk_size` is not positive.
    pub fn new(chunk_size: i32) -> Self {
        assert!(
            chunk_size > 0,
            "chunk size must be positive, got {}",
            chunk_size
        );
        VoxelWorld {
            chunks: HashMap::new(),
            chunk_size,
        }
    }

    /// Returns the side length of every chunk in voxels.
    #[inline]
    pub fn chunk_size(&self) -> i32 {
        self.chunk_size
    }

    /// Returns the number of loaded chunks.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns the loaded chunk at the given chunk coordinates, if any.
    #[inline]
    pub fn chunk_at(&self, coord: Point2<i32>) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Iterates over every loaded chunk.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    /// Maps a world XZ position to the chunk coordinates containing it.
    ///
    /// Floor division, so `(-1, -1)` lands in chunk `(-1, -1)` rather
    /// than sharing chunk `(0, 0)` with the origin.
    #[inline]
    pub fn chunk_coord_of(&self, world_x: i32, world_z: i32) -> Point2<i32> {
        Point2::new(
            world_x.div_euclid(self.chunk_size),
            world_z.div_euclid(self.chunk_size),
        )
    }

    /// Maps a world position to coordinates local to its chunk.
    ///
    /// Every component lands in `[0, chunk_size)`, including for
    /// negative world coordinates.
    #[inline]
    pub fn world_to_local(&self, world: Point3<i32>) -> Point3<i32> {
        Point3::new(
            world.x.rem_euclid(self.chunk_size),
            world.y,
            world.z.rem_euclid(self.chunk_size),
        )
    }

    /// Reads the block at a world position.
    ///
    /// Positions in unloaded chunks, or outside the vertical range,
    /// read as air.
    pub fn get_voxel_world(&self, world: Point3<i32>) -> BlockId {
        let coord = self.chunk_coord_of(world.x, world.z);
        match self.chunks.get(&coord) {
            Some(chunk) => {
                let local = self.world_to_local(world);
                chunk.get_voxel(local.x, local.y, local.z)
            }
            None => AIR,
        }
    }

    /// Writes the block at a world position.
    ///
    /// Writes into unloaded chunks or outside the vertical range are
    /// rejected. A write that changes stored data marks the chunk dirty
    /// through [`Chunk::set_voxel`]; the next streaming update remeshes
    /// it.
    ///
    /// # Returns
    /// `true` if a stored value changed.
    pub fn set_voxel_world(&mut self, world: Point3<i32>, id: BlockId) -> bool {
        if world.y < 0 || world.y >= self.chunk_size {
            return false;
        }
        let coord = self.chunk_coord_of(world.x, world.z);
        let local = self.world_to_local(world);
        match self.chunks.get_mut(&coord) {
            Some(chunk) => chunk.set_voxel(local.x, local.y, local.z, id),
            None => false,
        }
    }

    /// Runs one streaming update around the viewer.
    ///
    /// Loads every chunk whose coordinates fall inside the Euclidean
    /// disc of `radius` around the viewer's chunk (filling terrain and
    /// meshing before it becomes visible), unloads every chunk outside
    /// the disc, and remeshes any chunk a voxel edit left dirty. The
    /// update is idempotent: running it twice from the same viewer
    /// position changes nothing the second time.
    ///
    /// # Arguments
    /// * `viewer` - Viewer position in world units
    /// * `radius` - Streaming radius in chunks
    /// * `biomes` - Terrain source for newly loaded chunks
    /// * `atlas` - UV source for meshing
    pub fn update_chunks(
        &mut self,
        viewer: Point3<f32>,
        radius: i32,
        biomes: Option<&BiomeManager>,
        atlas: Option<&TextureAtlas>,
    ) {
        let size = self.chunk_size as f32;
        let center = Point2::new(
            (viewer.x / size).floor() as i32,
            (viewer.z / size).floor() as i32,
        );

        let mut loaded = 0usize;
        for dx in -radius..=radius {
            for dz in -radius..=radius {
                if dx * dx + dz * dz > radius * radius {
                    continue;
                }
                let coord = Point2::new(center.x + dx, center.y + dz);
                if self.chunks.contains_key(&coord) {
                    continue;
                }
                let mut chunk = Chunk::new(self.chunk_size, coord);
                chunk.fill_terrain(biomes);
                chunk.rebuild_mesh(atlas);
                self.chunks.insert(coord, chunk);
                loaded += 1;
            }
        }

        let before = self.chunks.len();
        self.chunks.retain(|coord, _| {
            let dx = coord.x - center.x;
            let dz = coord.y - center.y;
            dx * dx + dz * dz <= radius * radius
        });
        let unloaded = before - self.chunks.len();

        let mut remeshed = 0usize;
        for chunk in self.chunks.values_mut() {
            if chunk.is_dirty() {
                chunk.rebuild_mesh(atlas);
                remeshed += 1;
            }
        }

        if loaded > 0 || unloaded > 0 || remeshed > 0 {
            info!(
                "streaming update at chunk ({}, {}): {} loaded, {} unloaded, {} remeshed, {} resident",
                center.x,
                center.y,
                loaded,
                unloaded,
                remeshed,
                self.chunks.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::block_type::BlockType;
    use crate::voxels::chunk::CHUNK_DIMENSION;

    #[test]
    fn streaming_loads_the_euclidean_disc() {
        let mut world = VoxelWorld::new(CHUNK_DIMENSION);
        world.update_chunks(Point3::new(0.0, 8.0, 0.0), 2, None, None);
        // Radius 2 disc: dx*dx + dz*dz <= 4 admits 13 coordinates.
        assert_eq!(world.chunk_count(), 13);
        assert!(world.chunk_at(Point2::new(2, 0)).is_some());
        assert!(world.chunk_at(Point2::new(2, 1)).is_none());
        assert!(world.chunk_at(Point2::new(1, 1)).is_some());
    }

    #[test]
    fn streaming_is_idempotent() {
        let mut world = VoxelWorld::new(CHUNK_DIMENSION);
        let viewer = Point3::new(24.0, 8.0, -40.0);
        world.update_chunks(viewer, 2, None, None);
        let count = world.chunk_count();
        world.update_chunks(viewer, 2, None, None);
        assert_eq!(world.chunk_count(), count);
    }

    #[test]
    fn moving_the_viewer_unloads_distant_chunks() {
        let mut world = VoxelWorld::new(CHUNK_DIMENSION);
        world.update_chunks(Point3::new(0.0, 8.0, 0.0), 1, None, None);
        assert!(world.chunk_at(Point2::new(0, 0)).is_some());

        // Ten chunks away; nothing from the old disc survives.
        world.update_chunks(Point3::new(160.0, 8.0, 0.0), 1, None, None);
        assert!(world.chunk_at(Point2::new(0, 0)).is_none());
        assert!(world.chunk_at(Point2::new(10, 0)).is_some());
    }

    #[test]
    fn negative_world_coordinates_map_to_negative_chunks() {
        let world = VoxelWorld::new(16);
        assert_eq!(world.chunk_coord_of(-1, -1), Point2::new(-1, -1));
        assert_eq!(
            world.world_to_local(Point3::new(-1, 5, -1)),
            Point3::new(15, 5, 15)
        );
        assert_eq!(world.chunk_coord_of(0, 0), Point2::new(0, 0));
        assert_eq!(world.chunk_coord_of(16, -16), Point2::new(1, -1));
    }

    #[test]
    fn world_reads_and_writes_round_trip_across_chunks() {
        let mut world = VoxelWorld::new(CHUNK_DIMENSION);
        world.update_chunks(Point3::new(0.0, 8.0, 0.0), 2, None, None);

        let position = Point3::new(-1, 3, -1);
        assert!(world.set_voxel_world(position, BlockType::STONE.id()));
        assert_eq!(world.get_voxel_world(position), BlockType::STONE.id());

        // The write landed in chunk (-1, -1) and dirtied it.
        let chunk = world.chunk_at(Point2::new(-1, -1)).unwrap();
        assert!(chunk.is_dirty());
        assert_eq!(chunk.get_voxel(15, 3, 15), BlockType::STONE.id());
    }

    #[test]
    fn out_of_range_writes_are_rejected() {
        let mut world = VoxelWorld::new(CHUNK_DIMENSION);
        world.update_chunks(Point3::new(0.0, 8.0, 0.0), 1, None, None);
        assert!(!world.set_voxel_world(Point3::new(0, -1, 0), 1));
        assert!(!world.set_voxel_world(Point3::new(0, CHUNK_DIMENSION, 0), 1));
        // Unloaded chunk.
        assert!(!world.set_voxel_world(Point3::new(1000, 5, 1000), 1));
    }

    #[test]
    fn dirty_chunks_are_remeshed_by_the_next_update() {
        let mut world = VoxelWorld::new(CHUNK_DIMENSION);
        let viewer = Point3::new(0.0, 8.0, 0.0);
        world.update_chunks(viewer, 1, None, None);

        world.set_voxel_world(Point3::new(4, 4, 4), BlockType::DIRT.id());
        assert!(world.chunk_at(Point2::new(0, 0)).unwrap().is_dirty());

        world.update_chunks(viewer, 1, None, None);
        let chunk = world.chunk_at(Point2::new(0, 0)).unwrap();
        assert!(!chunk.is_dirty());
        assert!(!chunk.mesh().is_empty());
    }
}
