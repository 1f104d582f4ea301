//! End-to-end checks of the engine through its public API: streaming a
//! generated world around a viewer, culling it, and editing it.

use cgmath::{perspective, Deg, Matrix4, Point2, Point3, Vector3};

use terravox::voxels::{self, block::block_type::BlockType};
use terravox::{BiomeManager, Frustum, TextureAtlas, VoxelWorld, CHUNK_DIMENSION};

#[test]
fn streaming_converges_to_the_disc_and_stays_there() {
    let biomes = BiomeManager::new(1234);
    let atlas = TextureAtlas::with_default_blocks(256, 256, 16);
    let mut world = VoxelWorld::new(CHUNK_DIMENSION);
    let viewer = Point3::new(8.0, 12.0, 8.0);

    world.update_chunks(viewer, 2, Some(&biomes), Some(&atlas));
    assert_eq!(world.chunk_count(), 13);

    // Every resident chunk is meshed and clean after the update.
    for chunk in world.chunks() {
        assert!(!chunk.is_dirty());
        assert!(!chunk.mesh().is_empty());
    }

    // A second tick from the same position changes nothing.
    world.update_chunks(viewer, 2, Some(&biomes), Some(&atlas));
    assert_eq!(world.chunk_count(), 13);
}

#[test]
fn edits_across_the_origin_land_in_the_negative_chunk() {
    let biomes = BiomeManager::new(77);
    let mut world = VoxelWorld::new(CHUNK_DIMENSION);
    world.update_chunks(Point3::new(0.0, 12.0, 0.0), 2, Some(&biomes), None);

    let position = Point3::new(-1, 10, -1);
    world.set_voxel_world(position, BlockType::STONE.id());
    assert_eq!(world.get_voxel_world(position), BlockType::STONE.id());

    let chunk = world
        .chunk_at(Point2::new(-1, -1))
        .expect("chunk (-1,-1) must be resident at radius 2");
    assert_eq!(chunk.get_voxel(15, 10, 15), BlockType::STONE.id());
}

#[test]
fn dig_and_place_cycle_through_the_raycast() {
    let biomes = BiomeManager::new(42);
    let atlas = TextureAtlas::with_default_blocks(256, 256, 16);
    let mut world = VoxelWorld::new(CHUNK_DIMENSION);
    // Well above the chunk top so placements never touch the player box.
    let viewer = Point3::new(8.5, 25.5, 8.5);
    world.update_chunks(viewer, 2, Some(&biomes), Some(&atlas));

    // Terrain always has a surface below the chunk top.
    let down = Vector3::new(0.0, -1.0, 0.0);
    let hit = voxels::raycast(&world, viewer, down, 20.0).expect("ground below the viewer");
    assert_eq!(hit.normal, Vector3::new(0, 1, 0));

    let surface = hit.voxel;
    assert!(voxels::break_voxel(&mut world, &hit));
    let deeper = voxels::raycast(&world, viewer, down, 20.0).expect("ground below the hole");
    assert!(deeper.voxel.y < surface.y);

    // Put a block back on the new surface; the viewer is far enough up.
    assert!(voxels::place_voxel(
        &mut world,
        &deeper,
        BlockType::STONE.id(),
        viewer
    ));
    assert_eq!(
        world.get_voxel_world(deeper.voxel + deeper.normal),
        BlockType::STONE.id()
    );

    // The edits dirtied the chunk; the next update remeshes it.
    let coord = world.chunk_coord_of(surface.x, surface.z);
    assert!(world.chunk_at(coord).unwrap().is_dirty());
    world.update_chunks(viewer, 2, Some(&biomes), Some(&atlas));
    assert!(!world.chunk_at(coord).unwrap().is_dirty());
}

#[test]
fn frustum_never_culls_the_chunk_the_viewer_stands_in() {
    let biomes = BiomeManager::new(9);
    let mut world = VoxelWorld::new(CHUNK_DIMENSION);
    let viewer = Point3::new(8.0, 12.0, 8.0);
    world.update_chunks(viewer, 2, Some(&biomes), None);

    let projection = perspective(Deg(70.0), 16.0 / 9.0, 0.1, 400.0);
    let view = Matrix4::look_at_rh(viewer, viewer + Vector3::unit_x(), Vector3::unit_y());
    let mut frustum = Frustum::new();
    frustum.update_from_vp(&(projection * view));

    let own = world.chunk_at(Point2::new(0, 0)).unwrap();
    let (min, max) = own.aabb();
    assert!(frustum.is_box_visible(min, max));
}
