//! # Texture Atlas Module
//!
//! UV bookkeeping for a block texture atlas. The atlas itself (the
//! image) belongs to the rendering backend; this module only maps
//! `(block, face)` pairs to normalized UV rectangles inside it.

use std::collections::HashMap;

use log::warn;

use crate::voxels::block::{block_side::BlockSide, BlockId};

/// The fallback UV rectangle used when a block type has no registered
/// tiles: the full atlas, `[min_u, min_v, max_u, max_v]`.
pub const DEFAULT_UV_RECT: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Default tile index registrations for the built-in block types.
///
/// Keyed by block id; the value lists tile indices per face in
/// [`BlockSide`] order (FRONT, BACK, BOTTOM, TOP, LEFT, RIGHT). A
/// single-element list uses that tile for all six faces.
static DEFAULT_BLOCK_TILES: phf::Map<u8, &'static [u8]> = phf::phf_map! {
    0u8 => &[0],                  // Air (never rendered, registered for completeness)
    1u8 => &[1, 1, 2, 0, 1, 1],   // Grass: green top, dirt bottom, grassy sides
    2u8 => &[2],                  // Dirt
    3u8 => &[3],                  // Water
    4u8 => &[4],                  // Sand
    5u8 => &[5],                  // Stone
    6u8 => &[6],                  // Snow
    7u8 => &[7],                  // Wood
    8u8 => &[8],                  // Leaves
};

/// Maps block types to normalized UV rectangles in a tile-grid atlas.
///
/// The atlas is described by its pixel dimensions and square tile size;
/// tiles are numbered left-to-right, top-to-bottom. Lookups for
/// unregistered block types return [`DEFAULT_UV_RECT`] rather than
/// failing, so a missing registration degrades to a visual artifact,
/// never an error.
#[derive(Debug, Clone)]
pub struct TextureAtlas {
    atlas_width: u32,
    atlas_height: u32,
    tile_size: u32,
    block_tiles: HashMap<BlockId, Vec<u8>>,
}

impl TextureAtlas {
    /// Creates an empty atlas description.
    ///
    /// # Arguments
    /// * `atlas_width` - Atlas width in pixels
    /// * `atlas_height` - Atlas height in pixels
    /// * `tile_size` - Side length of one square tile in pixels
    ///
    /// # Panics
    /// Panics if the tile size is zero or does not evenly divide the
    /// atlas dimensions; a malformed atlas description is a programming
    /// error caught at construction.
    pub fn new(atlas_width: u32, atlas_height: u32, tile_size: u32) -> Self {
        assert!(tile_size > 0, "tile size must be positive");
        assert!(
            atlas_width % tile_size == 0 && atlas_height % tile_size == 0,
            "atlas dimensions {}x{} are not a multiple of tile size {}",
            atlas_width,
            atlas_height,
            tile_size
        );
        TextureAtlas {
            atlas_width,
            atlas_height,
            tile_size,
            block_tiles: HashMap::new(),
        }
    }

    /// Creates an atlas pre-registered with the engine's built-in block
    /// types from the compile-time default table.
    pub fn with_default_blocks(atlas_width: u32, atlas_height: u32, tile_size: u32) -> Self {
        let mut atlas = TextureAtlas::new(atlas_width, atlas_height, tile_size);
        for (&block, &tiles) in DEFAULT_BLOCK_TILES.entries() {
            atlas.register_block(block, tiles);
        }
        atlas
    }

    /// Registers the tile indices for a block type.
    ///
    /// # Arguments
    /// * `block` - The block id to register
    /// * `tiles` - Tile indices per face in [`BlockSide`] order. If fewer
    ///   than six indices are provided, the first one is used for every
    ///   face. An empty slice is rejected with a warning.
    pub fn register_block(&mut self, block: BlockId, tiles: &[u8]) {
        if tiles.is_empty() {
            warn!("empty tile indices for block type {}, ignoring", block);
            return;
        }
        self.block_tiles.insert(block, tiles.to_vec());
    }

    /// Looks up the UV rectangle for one face of a block.
    ///
    /// # Arguments
    /// * `block` - The block id
    /// * `side` - The face being textured
    ///
    /// # Returns
    /// `[min_u, min_v, max_u, max_v]` in normalized atlas coordinates.
    /// Unregistered block types fall back to [`DEFAULT_UV_RECT`].
    pub fn tex_coords(&self, block: BlockId, side: BlockSide) -> [f32; 4] {
        let tiles = match self.block_tiles.get(&block) {
            Some(tiles) => tiles,
            None => return DEFAULT_UV_RECT,
        };
        let tile = *tiles.get(side as usize).unwrap_or(&tiles[0]) as u32;

        let tiles_per_row = self.atlas_width / self.tile_size;
        let tile_x = tile % tiles_per_row;
        let tile_y = tile / tiles_per_row;

        let tile_w = self.tile_size as f32 / self.atlas_width as f32;
        let tile_h = self.tile_size as f32 / self.atlas_height as f32;
        let min_u = tile_x as f32 * tile_w;
        let min_v = tile_y as f32 * tile_h;

        [min_u, min_v, min_u + tile_w, min_v + tile_h]
    }
}
