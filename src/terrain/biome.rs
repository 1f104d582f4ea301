//! # Biome Module
//!
//! Defines the characteristics of each terrain type: surface height
//! parameters and the block palette used to fill a column of voxels.

use crate::voxels::block::block_type::BlockType;

/// The kinds of biome the world can classify a column as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiomeKind {
    /// Gentle grassland.
    Plains,
    /// Grassland with dense tree decoration.
    Forest,
    /// Hot, dry, sandy terrain. Never holds water.
    Desert,
    /// High stone terrain with strong height variation.
    Mountains,
    /// Cold, snow-covered terrain. Never holds water.
    Tundra,
    /// Sea floor; surface height is clamped below the water level.
    Ocean,
}

/// A terrain type's generation parameters and block palette.
///
/// Heights are in blocks: a column's surface height is
/// `base_height + noise * height_variation`, clamped to the chunk's
/// vertical range by the terrain fill.
#[derive(Debug, Clone, Copy)]
pub struct Biome {
    kind: BiomeKind,
    base_height: f32,
    height_variation: f32,
    surface_block: BlockType,
    subsurface_block: BlockType,
    bedrock_block: BlockType,
}

impl Biome {
    /// Creates a biome with the palette implied by its kind.
    ///
    /// # Arguments
    /// * `kind` - The biome classification
    /// * `base_height` - Mean surface height in blocks
    /// * `height_variation` - Amplitude of the height noise in blocks
    pub fn new(kind: BiomeKind, base_height: f32, height_variation: f32) -> Self {
        let (surface_block, subsurface_block) = match kind {
            BiomeKind::Plains | BiomeKind::Forest => (BlockType::GRASS, BlockType::DIRT),
            BiomeKind::Desert => (BlockType::SAND, BlockType::SAND),
            BiomeKind::Mountains => (BlockType::STONE, BlockType::STONE),
            BiomeKind::Tundra => (BlockType::SNOW, BlockType::DIRT),
            BiomeKind::Ocean => (BlockType::SAND, BlockType::SAND),
        };
        Biome {
            kind,
            base_height,
            height_variation,
            surface_block,
            subsurface_block,
            bedrock_block: BlockType::STONE,
        }
    }

    /// Returns the biome classification.
    pub fn kind(&self) -> BiomeKind {
        self.kind
    }

    /// Returns the mean surface height in blocks.
    pub fn base_height(&self) -> f32 {
        self.base_height
    }

    /// Returns the height-noise amplitude in blocks.
    pub fn height_variation(&self) -> f32 {
        self.height_variation
    }

    /// Whether low-lying columns of this biome fill with water up to
    /// the water level.
    pub fn has_water(&self) -> bool {
        !matches!(self.kind, BiomeKind::Desert | BiomeKind::Tundra)
    }

    /// Returns the block for a cell below the column's surface.
    ///
    /// The stratification is fixed: bedrock from the bottom up to three
    /// blocks below the surface, then two subsurface blocks, then the
    /// surface block at `height - 1`.
    ///
    /// # Arguments
    /// * `y` - The cell's height, expected in `[0, height)`
    /// * `height` - The column's surface height
    pub fn strata_block(&self, y: i32, height: i32) -> BlockType {
        if y < 1 || y < height - 3 {
            self.bedrock_block
        } else if y < height - 1 {
            self.subsurface_block
        } else {
            self.surface_block
        }
    }

    /// Returns a human-readable name for logs and debug overlays.
    pub fn name(&self) -> &'static str {
        match self.kind {
            BiomeKind::Plains => "Plains",
            BiomeKind::Forest => "Forest",
            BiomeKind::Desert => "Desert",
            BiomeKind::Mountains => "Mountains",
            BiomeKind::Tundra => "Tundra",
            BiomeKind::Ocean => "Ocean",
        }
    }
}
