//! # Block Side Module
//!
//! This module defines the six faces/sides of a voxel block, their
//! outward normals, and the in-plane axes used by the greedy mesher.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// Each variant is assigned a fixed integer value used to index
/// per-face tables (texture tile registrations, for example).
///
/// The axis convention follows the world coordinate system:
/// FRONT faces negative Z, BACK positive Z, LEFT negative X,
/// RIGHT positive X, TOP positive Y, and BOTTOM negative Y.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The front face (facing negative Z)
    FRONT = 0,

    /// The back face (facing positive Z)
    BACK = 1,

    /// The bottom face (facing negative Y)
    BOTTOM = 2,

    /// The top face (facing positive Y)
    TOP = 3,

    /// The left face (facing negative X)
    LEFT = 4,

    /// The right face (facing positive X)
    RIGHT = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in a consistent order.
    ///
    /// The order is: [FRONT, BACK, BOTTOM, TOP, LEFT, RIGHT], matching
    /// the enum discriminants.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::FRONT,
            BlockSide::BACK,
            BlockSide::BOTTOM,
            BlockSide::TOP,
            BlockSide::LEFT,
            BlockSide::RIGHT,
        ]
    }

    /// Returns the outward unit normal of this face in grid coordinates.
    pub fn normal(self) -> Vector3<i32> {
        match self {
            BlockSide::FRONT => Vector3::new(0, 0, -1),
            BlockSide::BACK => Vector3::new(0, 0, 1),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
        }
    }

    /// Returns the two in-plane axes `(u, v)` for faces of this side.
    ///
    /// The axes are chosen so that `u x v` equals the outward normal,
    /// which makes the quad corner order `origin, +u, +u+v, +v`
    /// counter-clockwise when viewed from outside the block. The greedy
    /// mesher extends quad width along `u` and height along `v`.
    pub fn plane_axes(self) -> (Vector3<i32>, Vector3<i32>) {
        match self {
            BlockSide::FRONT => (Vector3::new(0, 1, 0), Vector3::new(1, 0, 0)),
            BlockSide::BACK => (Vector3::new(1, 0, 0), Vector3::new(0, 1, 0)),
            BlockSide::BOTTOM => (Vector3::new(1, 0, 0), Vector3::new(0, 0, 1)),
            BlockSide::TOP => (Vector3::new(0, 0, 1), Vector3::new(1, 0, 0)),
            BlockSide::LEFT => (Vector3::new(0, 0, 1), Vector3::new(0, 1, 0)),
            BlockSide::RIGHT => (Vector3::new(0, 1, 0), Vector3::new(0, 0, 1)),
        }
    }
}
