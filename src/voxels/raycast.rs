//! # Raycast Module
//!
//! Fixed-step ray marching through the voxel world, and the two edit
//! operations built on it: breaking the hit voxel and placing a block
//! against the hit face. This is the interaction path; the streaming
//! update picks up the dirty flags the edits leave behind.

use cgmath::{InnerSpace, Point3, Vector3};

use crate::voxels::block::{is_solid, BlockId, AIR};
use crate::voxels::world::VoxelWorld;

/// Distance advanced per ray sample, in world units.
///
/// Small enough that a ray cannot tunnel through a full voxel between
/// samples at any angle.
pub const RAY_STEP: f32 = 0.1;

/// Player collision half-extents around the viewer, used to reject
/// block placements that would intersect the player.
const PLAYER_EXTENT_DOWN: Vector3<f32> = Vector3::new(0.3, 1.7, 0.3);
const PLAYER_EXTENT_UP: Vector3<f32> = Vector3::new(0.3, 0.3, 0.3);

/// The result of a successful raycast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaycastHit {
    /// The solid voxel the ray entered.
    pub voxel: Point3<i32>,
    /// Unit normal of the struck face, pointing back toward the ray
    /// origin. The placement target is `voxel + normal`.
    pub normal: Vector3<i32>,
}

/// Marches a ray through the world until it enters a solid voxel.
///
/// The ray advances in fixed [`RAY_STEP`] increments and floors each
/// sample to a voxel coordinate. The struck face is inferred from the
/// dominant axis of the travel direction, pointing opposite to it.
///
/// # Arguments
/// * `world` - The voxel world to march through
/// * `origin` - Ray start in world units
/// * `direction` - Ray direction; normalized internally
/// * `max_distance` - Give-up distance in world units
///
/// # Returns
/// The first solid voxel along the ray, or `None` if the ray exhausts
/// `max_distance`, or the direction is degenerate.
pub fn raycast(
    world: &VoxelWorld,
    origin: Point3<f32>,
    direction: Vector3<f32>,
    max_distance: f32,
) -> Option<RaycastHit> {
    if direction.magnitude2() <= f32::EPSILON {
        return None;
    }
    let direction = direction.normalize();

    let mut traveled = 0.0;
    while traveled <= max_distance {
        let sample = origin + direction * traveled;
        let voxel = Point3::new(
            sample.x.floor() as i32,
            sample.y.floor() as i32,
            sample.z.floor() as i32,
        );
        if is_solid(world.get_voxel_world(voxel)) {
            return Some(RaycastHit {
                voxel,
                normal: face_normal(direction),
            });
        }
        traveled += RAY_STEP;
    }
    None
}

/// Picks the struck face from the travel direction: the dominant axis,
/// signed opposite to the direction of travel.
fn face_normal(direction: Vector3<f32>) -> Vector3<i32> {
    let (ax, ay, az) = (direction.x.abs(), direction.y.abs(), direction.z.abs());
    if ax >= ay && ax >= az {
        Vector3::new(if direction.x > 0.0 { -1 } else { 1 }, 0, 0)
    } else if ay >= az {
        Vector3::new(0, if direction.y > 0.0 { -1 } else { 1 }, 0)
    } else {
        Vector3::new(0, 0, if direction.z > 0.0 { -1 } else { 1 })
    }
}

/// Removes the voxel a raycast hit, replacing it with air.
///
/// # Returns
/// `true` if a block was actually removed.
pub fn break_voxel(world: &mut VoxelWorld, hit: &RaycastHit) -> bool {
    world.set_voxel_world(hit.voxel, AIR)
}

/// Places a block against the face a raycast hit.
///
/// The target cell is `hit.voxel + hit.normal`. The placement is
/// rejected when the target is already solid, lies outside the world's
/// vertical range, or would intersect the viewer's collision box.
///
/// # Arguments
/// * `world` - The world to edit
/// * `hit` - The raycast result identifying the face
/// * `block` - The block id to place
/// * `viewer` - Viewer position, for the self-intersection check
///
/// # Returns
/// `true` if the block was placed.
pub fn place_voxel(
    world: &mut VoxelWorld,
    hit: &RaycastHit,
    block: BlockId,
    viewer: Point3<f32>,
) -> bool {
    let target = hit.voxel + hit.normal;
    if is_solid(world.get_voxel_world(target)) {
        return false;
    }

    let player_min = viewer - PLAYER_EXTENT_DOWN;
    let player_max = viewer + PLAYER_EXTENT_UP;
    let block_min = Point3::new(target.x as f32, target.y as f32, target.z as f32);
    let block_max = block_min + Vector3::new(1.0, 1.0, 1.0);
    let overlaps = player_min.x < block_max.x
        && player_max.x > block_min.x
        && player_min.y < block_max.y
        && player_max.y > block_min.y
        && player_min.z < block_max.z
        && player_max.z > block_min.z;
    if overlaps {
        return false;
    }

    world.set_voxel_world(target, block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::block_type::BlockType;
    use crate::voxels::chunk::CHUNK_DIMENSION;

    /// An empty loaded world with one stone block at the given position.
    fn world_with_block(position: Point3<i32>) -> VoxelWorld {
        let mut world = VoxelWorld::new(CHUNK_DIMENSION);
        world.update_chunks(Point3::new(0.0, 8.0, 0.0), 2, None, None);
        assert!(world.set_voxel_world(position, BlockType::STONE.id()));
        world
    }

    #[test]
    fn ray_hits_the_block_in_front_of_it() {
        let world = world_with_block(Point3::new(5, 8, 0));
        let hit = raycast(
            &world,
            Point3::new(0.5, 8.5, 0.5),
            Vector3::new(1.0, 0.0, 0.0),
            10.0,
        )
        .unwrap();
        assert_eq!(hit.voxel, Point3::new(5, 8, 0));
        assert_eq!(hit.normal, Vector3::new(-1, 0, 0));
    }

    #[test]
    fn ray_misses_when_nothing_is_in_range() {
        let world = world_with_block(Point3::new(5, 8, 0));
        assert!(raycast(
            &world,
            Point3::new(0.5, 8.5, 0.5),
            Vector3::new(1.0, 0.0, 0.0),
            3.0,
        )
        .is_none());
        assert!(raycast(
            &world,
            Point3::new(0.5, 8.5, 0.5),
            Vector3::new(-1.0, 0.0, 0.0),
            10.0,
        )
        .is_none());
    }

    #[test]
    fn zero_direction_is_rejected() {
        let world = world_with_block(Point3::new(5, 8, 0));
        assert!(raycast(
            &world,
            Point3::new(0.5, 8.5, 0.5),
            Vector3::new(0.0, 0.0, 0.0),
            10.0,
        )
        .is_none());
    }

    #[test]
    fn downward_ray_reports_the_top_face() {
        let world = world_with_block(Point3::new(0, 4, 0));
        let hit = raycast(
            &world,
            Point3::new(0.5, 10.0, 0.5),
            Vector3::new(0.0, -1.0, 0.0),
            10.0,
        )
        .unwrap();
        assert_eq!(hit.voxel, Point3::new(0, 4, 0));
        assert_eq!(hit.normal, Vector3::new(0, 1, 0));
    }

    #[test]
    fn break_then_recast_passes_through() {
        let mut world = world_with_block(Point3::new(5, 8, 0));
        let origin = Point3::new(0.5, 8.5, 0.5);
        let direction = Vector3::new(1.0, 0.0, 0.0);
        let hit = raycast(&world, origin, direction, 10.0).unwrap();
        assert!(break_voxel(&mut world, &hit));
        assert!(raycast(&world, origin, direction, 10.0).is_none());
    }

    #[test]
    fn placement_lands_on_the_struck_face() {
        let mut world = world_with_block(Point3::new(5, 8, 0));
        let viewer = Point3::new(0.5, 8.5, 0.5);
        let hit = raycast(&world, viewer, Vector3::new(1.0, 0.0, 0.0), 10.0).unwrap();
        assert!(place_voxel(
            &mut world,
            &hit,
            BlockType::DIRT.id(),
            viewer
        ));
        assert_eq!(
            world.get_voxel_world(Point3::new(4, 8, 0)),
            BlockType::DIRT.id()
        );
    }

    #[test]
    fn placement_into_the_player_is_rejected() {
        let mut world = world_with_block(Point3::new(2, 8, 0));
        // Viewer standing directly against the struck face.
        let viewer = Point3::new(1.5, 8.5, 0.5);
        let hit = raycast(&world, viewer, Vector3::new(1.0, 0.0, 0.0), 5.0).unwrap();
        assert!(!place_voxel(
            &mut world,
            &hit,
            BlockType::DIRT.id(),
            viewer
        ));
        assert_eq!(world.get_voxel_world(Point3::new(1, 8, 0)), AIR);
    }

    #[test]
    fn placement_onto_a_solid_cell_is_rejected() {
        let mut world = world_with_block(Point3::new(5, 8, 0));
        world.set_voxel_world(Point3::new(4, 8, 0), BlockType::STONE.id());
        let viewer = Point3::new(0.5, 8.5, 0.5);
        let hit = RaycastHit {
            voxel: Point3::new(5, 8, 0),
            normal: Vector3::new(-1, 0, 0),
        };
        assert!(!place_voxel(
            &mut world,
            &hit,
            BlockType::DIRT.id(),
            viewer
        ));
    }
}
