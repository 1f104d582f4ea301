//! # Terrain Module
//!
//! The terrain oracle: maps world columns to biomes and surface
//! heights. The chunk fill consumes only this module's outputs, so the
//! shape of the terrain (noise, thresholds, palettes) stays decoupled
//! from voxel storage and meshing.

use std::cell::RefCell;
use std::num::NonZeroUsize;

use cgmath::Point2;
use log::info;
use lru::LruCache;
use noise::{NoiseFn, Perlin};

pub mod biome;

pub use biome::{Biome, BiomeKind};

/// Frequency of the moisture/temperature classification noise.
const CLASSIFY_FREQUENCY: f64 = 0.005;
/// Frequency of the elevation classification noise.
const ELEVATION_FREQUENCY: f64 = 0.0025;
/// Frequency of the base height noise.
const BASE_FREQUENCY: f64 = 0.02;
/// Frequency of the height detail noise.
const DETAIL_FREQUENCY: f64 = 0.1;
/// Amplitude of the detail noise relative to the base noise.
const DETAIL_AMPLITUDE: f64 = 0.2;

/// Number of recently-classified columns kept in the biome cache.
const BIOME_CACHE_SIZE: usize = 4096;

/// Returns the world's water level for a given chunk height.
///
/// Columns at or below this height fill with water in biomes that
/// allow it.
#[inline]
pub fn water_level(chunk_size: i32) -> i32 {
    chunk_size / 3
}

/// Classifies world columns into biomes and supplies surface heights.
///
/// Classification samples moisture, temperature, and elevation noise
/// per column; results are memoized in an LRU cache since neighboring
/// cells of a chunk fill ask for the same columns repeatedly. The
/// manager is shared immutably by all chunks; the cache uses interior
/// mutability and the engine's single-threaded tick model.
#[derive(Debug)]
pub struct BiomeManager {
    seed: u32,
    classify_noise: Perlin,
    base_noise: Perlin,
    detail_noise: Perlin,
    biomes: Vec<Biome>,
    cache: RefCell<LruCache<Point2<i32>, usize>>,
}

impl BiomeManager {
    /// Creates a biome manager seeded for a reproducible world.
    ///
    /// # Arguments
    /// * `seed` - World seed; all noise sources derive from it
    pub fn new(seed: u32) -> Self {
        let biomes = vec![
            Biome::new(BiomeKind::Plains, 10.0, 5.0),
            Biome::new(BiomeKind::Desert, 8.0, 3.0),
            Biome::new(BiomeKind::Mountains, 20.0, 15.0),
            Biome::new(BiomeKind::Forest, 12.0, 7.0),
            Biome::new(BiomeKind::Tundra, 9.0, 4.0),
        ];
        info!("initialized {} biome types, seed {}", biomes.len(), seed);
        BiomeManager {
            seed,
            classify_noise: Perlin::new(seed),
            base_noise: Perlin::new(seed.wrapping_add(1)),
            detail_noise: Perlin::new(seed.wrapping_add(2)),
            biomes,
            cache: RefCell::new(LruCache::new(NonZeroUsize::new(BIOME_CACHE_SIZE).unwrap())),
        }
    }

    /// Returns the world seed.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Reseeds every noise source and invalidates cached lookups.
    pub fn set_seed(&mut self, seed: u32) {
        self.seed = seed;
        self.classify_noise = Perlin::new(seed);
        self.base_noise = Perlin::new(seed.wrapping_add(1));
        self.detail_noise = Perlin::new(seed.wrapping_add(2));
        self.cache.borrow_mut().clear();
    }

    fn classify(&self, x: i32, z: i32) -> usize {
        let (fx, fz) = (x as f64, z as f64);
        let moisture = self
            .classify_noise
            .get([fx * CLASSIFY_FREQUENCY, fz * CLASSIFY_FREQUENCY]);
        // Swapped axes decorrelate temperature from moisture without a
        // second noise source.
        let temperature = self
            .classify_noise
            .get([fz * CLASSIFY_FREQUENCY, fx * CLASSIFY_FREQUENCY]);
        let elevation = self
            .classify_noise
            .get([fx * ELEVATION_FREQUENCY, fz * ELEVATION_FREQUENCY]);

        if elevation > 0.5 {
            2 // Mountains
        } else if temperature > 0.3 && moisture < -0.3 {
            1 // Desert
        } else if temperature < -0.3 {
            4 // Tundra
        } else if moisture > 0.2 {
            3 // Forest
        } else {
            0 // Plains
        }
    }

    /// Returns the biome governing the column at world `(x, z)`.
    ///
    /// Never fails: every column classifies into one of the built-in
    /// biomes.
    pub fn biome_at(&self, x: i32, z: i32) -> &Biome {
        let key = Point2::new(x, z);
        if let Some(&index) = self.cache.borrow_mut().get(&key) {
            return &self.biomes[index];
        }
        let index = self.classify(x, z);
        self.cache.borrow_mut().put(key, index);
        &self.biomes[index]
    }

    /// Samples the normalized height noise for a column.
    ///
    /// # Returns
    /// A value in `[0, 1]`: base noise plus a smaller detail octave,
    /// remapped from `[-1, 1]`.
    pub fn height_noise(&self, x: i32, z: i32) -> f64 {
        let (fx, fz) = (x as f64, z as f64);
        let base = self.base_noise.get([fx * BASE_FREQUENCY, fz * BASE_FREQUENCY]);
        let detail = self
            .detail_noise
            .get([fx * DETAIL_FREQUENCY, fz * DETAIL_FREQUENCY])
            * DETAIL_AMPLITUDE;
        ((base + detail + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Computes the surface height of a column in blocks.
    ///
    /// Combines the biome's base height and variation with the height
    /// noise, clamped to `[1, chunk_size - 1]`. Ocean columns are
    /// additionally clamped below the water level so they always
    /// flood.
    ///
    /// # Arguments
    /// * `x`, `z` - World column coordinates
    /// * `chunk_size` - Vertical extent of a chunk in blocks
    pub fn surface_height(&self, x: i32, z: i32, chunk_size: i32) -> i32 {
        let biome = self.biome_at(x, z);
        let noise = self.height_noise(x, z) as f32;
        let mut height = (biome.base_height() + noise * biome.height_variation()) as i32;
        height = height.clamp(1, chunk_size - 1);
        if biome.kind() == BiomeKind::Ocean {
            height = height.min((water_level(chunk_size) - 3).max(1));
        }
        height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_deterministic_and_cached() {
        let biomes = BiomeManager::new(12345);
        let first = biomes.biome_at(100, -250).kind();
        let second = biomes.biome_at(100, -250).kind();
        assert_eq!(first, second);
    }

    #[test]
    fn height_noise_stays_normalized() {
        let biomes = BiomeManager::new(7);
        for x in -50..50 {
            let n = biomes.height_noise(x * 13, x * -7);
            assert!((0.0..=1.0).contains(&n), "noise {} out of range", n);
        }
    }

    #[test]
    fn surface_height_stays_in_chunk_range() {
        let biomes = BiomeManager::new(99);
        for x in -100..100 {
            let h = biomes.surface_height(x * 3, -x * 5, 16);
            assert!((1..16).contains(&h), "height {} out of range", h);
        }
    }

    #[test]
    fn reseeding_changes_the_world() {
        let mut biomes = BiomeManager::new(1);
        let before: Vec<i32> = (0..32).map(|x| biomes.surface_height(x * 11, 0, 16)).collect();
        biomes.set_seed(2);
        let after: Vec<i32> = (0..32).map(|x| biomes.surface_height(x * 11, 0, 16)).collect();
        assert_ne!(before, after);
    }
}
