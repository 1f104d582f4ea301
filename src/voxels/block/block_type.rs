//! # Block Type Module
//!
//! This module defines the different types of blocks in the voxel world.
//! It provides functionality for block type identification and conversion
//! from the compact per-cell integer representation.

use num_derive::FromPrimitive;

use super::BlockId;

/// Enumerates all block types in the voxel world.
///
/// Each variant's discriminant is the `BlockId` stored in voxel grids.
/// The `FromPrimitive` derive allows conversion back from the stored
/// integer, which is used by the texture atlas and terrain generator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// An air block, which is non-solid and never rendered.
    AIR = 0,

    /// A grass block with a green top, grassy sides, and a dirt bottom.
    GRASS = 1,

    /// A basic dirt block, found beneath grass surfaces.
    DIRT = 2,

    /// A water block, filling low terrain up to the water level.
    WATER = 3,

    /// A sand block, the surface material of deserts.
    SAND = 4,

    /// A stone block, the bedrock material of every biome.
    STONE = 5,

    /// A snow block, the surface material of tundra.
    SNOW = 6,

    /// A wooden log block.
    WOOD = 7,

    /// A leaf block for tree canopies.
    LEAVES = 8,
}

impl BlockType {
    /// Converts a stored `BlockId` back to a `BlockType`.
    ///
    /// # Arguments
    /// * `id` - The block id as stored in a voxel grid
    ///
    /// # Returns
    /// The corresponding `BlockType`, or `None` if the id is not a
    /// registered block type.
    pub fn from_id(id: BlockId) -> Option<Self> {
        num::FromPrimitive::from_u8(id)
    }

    /// Returns the `BlockId` for this block type.
    #[inline]
    pub fn id(self) -> BlockId {
        self as BlockId
    }

    /// Generates a random solid block type (excluding `AIR`).
    ///
    /// This is primarily used for test fixtures.
    ///
    /// # Returns
    /// A random `BlockType` that is not `BlockType::AIR`.
    pub fn random_solid() -> Self {
        num::FromPrimitive::from_u8(fastrand::u8(1..=8)).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_id() {
        for id in 0..=8u8 {
            let block = BlockType::from_id(id).unwrap();
            assert_eq!(block.id(), id);
        }
        assert_eq!(BlockType::from_id(200), None);
    }

    #[test]
    fn random_solid_is_never_air() {
        for _ in 0..64 {
            assert_ne!(BlockType::random_solid(), BlockType::AIR);
        }
    }
}
