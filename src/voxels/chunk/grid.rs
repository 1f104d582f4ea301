//! # Voxel Grid Module
//!
//! A dense cubic array of block ids, the fundamental storage the rest
//! of the engine operates on. Out-of-range reads are defined to return
//! air; this is relied on by the mesher's face-visibility tests at
//! chunk boundaries, so a chunk never has to reach into its neighbors.

use cgmath::Point3;

use super::super::block::{is_solid, BlockId, AIR};

/// A dense cubic grid of block ids with side length `size`.
///
/// Cells are addressed by local coordinates in `[0, size)` on each
/// axis. The grid is owned exclusively by its chunk; all mutation goes
/// through [`VoxelGrid::set`], which reports whether the stored value
/// actually changed so the owner can maintain its dirty flag.
#[derive(Debug, Clone)]
pub struct VoxelGrid {
    /// Side length of the cube, in cells.
    size: i32,
    /// Block ids in x-major, then y, then z order.
    data: Vec<BlockId>,
}

impl VoxelGrid {
    /// Creates a new grid filled with air.
    ///
    /// # Arguments
    /// * `size` - Side length of the cubic grid, in cells
    ///
    /// # Panics
    /// Panics if `size` is not positive. A non-positive chunk size is a
    /// programming error and is rejected eagerly at construction rather
    /// than deep inside the meshing or streaming code.
    pub fn new(size: i32) -> Self {
        assert!(size > 0, "voxel grid size must be positive, got {}", size);
        VoxelGrid {
            size,
            data: vec![AIR; (size * size * size) as usize],
        }
    }

    /// Returns the side length of the grid in cells.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[inline]
    fn index(&self, x: i32, y: i32, z: i32) -> usize {
        (x + self.size * y + self.size * self.size * z) as usize
    }

    #[inline]
    fn in_range(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && x < self.size && y >= 0 && y < self.size && z >= 0 && z < self.size
    }

    /// Returns the block id at the given local coordinates.
    ///
    /// Out-of-range coordinates read as air by convention; this never
    /// errors.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> BlockId {
        if !self.in_range(x, y, z) {
            return AIR;
        }
        self.data[self.index(x, y, z)]
    }

    /// Returns the block id at a point, for callers holding `Point3`.
    #[inline]
    pub fn get_point(&self, p: Point3<i32>) -> BlockId {
        self.get(p.x, p.y, p.z)
    }

    /// Overwrites the block id at the given local coordinates.
    ///
    /// Out-of-range writes are no-ops. Writing the value already stored
    /// is also a no-op, so callers can use the return value to decide
    /// whether derived state (the chunk mesh) went stale.
    ///
    /// # Returns
    /// `true` if the stored value changed.
    pub fn set(&mut self, x: i32, y: i32, z: i32, id: BlockId) -> bool {
        if !self.in_range(x, y, z) {
            return false;
        }
        let index = self.index(x, y, z);
        if self.data[index] == id {
            return false;
        }
        self.data[index] = id;
        true
    }

    /// Checks whether a coordinate is air or lies outside the grid.
    ///
    /// This is the neighbor-visibility rule used for face culling: a
    /// face is exposed iff the cell behind it satisfies this predicate.
    /// Boundary faces are therefore always exposed.
    #[inline]
    pub fn is_air_or_outside(&self, x: i32, y: i32, z: i32) -> bool {
        !is_solid(self.get(x, y, z))
    }
}
