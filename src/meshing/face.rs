//! Merged quad faces produced by the greedy mesher.

use cgmath::{Point3, Vector3};

use crate::voxels::block::{block_side::BlockSide, BlockId};

/// A maximal rectangle of mutually-mergeable exposed cells on one
/// coordinate plane.
///
/// `origin` is the lowest-coordinate cell covered by the quad. The quad
/// extends `width` cells along the side's `u` axis and `height` cells
/// along its `v` axis (see [`BlockSide::plane_axes`]). All covered
/// cells hold `block` and are exposed in the side's direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadFace {
    /// Local coordinate of the quad's origin cell.
    pub origin: Point3<i32>,
    /// Which side of the covered cells this quad represents.
    pub side: BlockSide,
    /// Extent along the side's `u` axis, in cells. Always positive.
    pub width: i32,
    /// Extent along the side's `v` axis, in cells. Always positive.
    pub height: i32,
    /// The block type shared by every covered cell.
    pub block: BlockId,
}

impl QuadFace {
    /// Iterates over the local coordinates of every cell this quad covers.
    pub fn covered_cells(&self) -> impl Iterator<Item = Point3<i32>> + '_ {
        let (u, v) = self.side.plane_axes();
        let origin = self.origin;
        (0..self.height).flat_map(move |b| {
            (0..self.width).map(move |a| Point3::new(
                origin.x + u.x * a + v.x * b,
                origin.y + u.y * a + v.y * b,
                origin.z + u.z * a + v.z * b,
            ))
        })
    }

    /// Returns the quad's four corner positions in counter-clockwise
    /// order as seen from outside the block.
    ///
    /// For positive-axis sides the corners sit one unit along the
    /// normal from the cell origin; for negative-axis sides they sit on
    /// the cell origin plane itself.
    pub fn corners(&self) -> [[f32; 3]; 4] {
        let n = self.side.normal();
        let (u, v) = self.side.plane_axes();

        // Faces on the positive side of a cell sit at origin + 1 along
        // the normal axis.
        let offset = Vector3::new(n.x.max(0), n.y.max(0), n.z.max(0));
        let base = Point3::new(
            self.origin.x + offset.x,
            self.origin.y + offset.y,
            self.origin.z + offset.z,
        );

        let corner = |a: i32, b: i32| {
            [
                (base.x + u.x * a + v.x * b) as f32,
                (base.y + u.y * a + v.y * b) as f32,
                (base.z + u.z * a + v.z * b) as f32,
            ]
        };

        [
            corner(0, 0),
            corner(self.width, 0),
            corner(self.width, self.height),
            corner(0, self.height),
        ]
    }

    /// Returns the outward face normal as floats, ready for the vertex
    /// buffer.
    pub fn normal(&self) -> [f32; 3] {
        let n = self.side.normal();
        [n.x as f32, n.y as f32, n.z as f32]
    }
}
