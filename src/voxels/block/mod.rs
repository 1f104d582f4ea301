//! # Block Module
//!
//! This module provides the core block-related functionality for the voxel engine.
//! It includes block type definitions and block face handling.

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
///
/// A value of `0` always means air; every nonzero value is a solid,
/// opaque block. This is the type stored per cell in a voxel grid.
pub type BlockId = u8;

/// The block id reserved for air (empty space).
pub const AIR: BlockId = 0;

/// Checks whether a block id represents a solid block.
///
/// Opacity is binary in this engine: air is the only non-solid block,
/// so any nonzero id is solid.
#[inline]
pub fn is_solid(id: BlockId) -> bool {
    id != AIR
}
