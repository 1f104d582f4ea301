//! # View Frustum Module
//!
//! Extracts the six half-space planes of a camera's view frustum from
//! its combined view-projection matrix and tests points, spheres, and
//! axis-aligned boxes against them. The streaming/render step uses the
//! box test to skip chunks that cannot be on screen.

use cgmath::{InnerSpace, Matrix4, Point3, Vector3, Vector4};

/// Index of each frustum plane in [`Frustum::planes`].
const LEFT: usize = 0;
const RIGHT: usize = 1;
const BOTTOM: usize = 2;
const TOP: usize = 3;
const NEAR: usize = 4;
const FAR: usize = 5;

/// A view frustum as six normalized plane equations.
///
/// Each plane is stored as `(a, b, c, d)` where a point `p` is on the
/// inside when `a*p.x + b*p.y + c*p.z + d >= 0`. The planes carry no
/// identity across frames; call [`Frustum::update_from_vp`] with the
/// current view-projection matrix each frame before testing.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    planes: [Vector4<f32>; 6],
}

impl Default for Frustum {
    fn default() -> Self {
        Self::new()
    }
}

impl Frustum {
    /// Creates a frustum with degenerate planes that accept everything.
    pub fn new() -> Self {
        Frustum {
            planes: [Vector4::new(0.0, 0.0, 0.0, 0.0); 6],
        }
    }

    /// Re-derives the six planes from a view-projection matrix.
    ///
    /// Uses the standard plane-extraction identities (sums and
    /// differences of the matrix rows against the fourth row) and
    /// normalizes each plane by the magnitude of its normal so signed
    /// distances are in world units.
    ///
    /// # Arguments
    /// * `view_projection` - The combined `projection * view` matrix
    pub fn update_from_vp(&mut self, view_projection: &Matrix4<f32>) {
        let m = view_projection;

        // cgmath matrices are column-major: m.x is the first column, so
        // row r of column c is indexed as m.c[r].
        let row = |r: usize| Vector4::new(m.x[r], m.y[r], m.z[r], m.w[r]);
        let (row0, row1, row2, row3) = (row(0), row(1), row(2), row(3));

        self.planes[LEFT] = row3 + row0;
        self.planes[RIGHT] = row3 - row0;
        self.planes[BOTTOM] = row3 + row1;
        self.planes[TOP] = row3 - row1;
        self.planes[NEAR] = row3 + row2;
        self.planes[FAR] = row3 - row2;

        for plane in &mut self.planes {
            let length = plane.truncate().magnitude();
            if length > 0.0 {
                *plane /= length;
            }
        }
    }

    /// Checks whether a point lies inside the frustum.
    pub fn is_point_visible(&self, point: Point3<f32>) -> bool {
        self.planes
            .iter()
            .all(|p| p.x * point.x + p.y * point.y + p.z * point.z + p.w >= 0.0)
    }

    /// Checks whether a sphere is inside or intersects the frustum.
    pub fn is_sphere_visible(&self, center: Point3<f32>, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|p| p.x * center.x + p.y * center.y + p.z * center.z + p.w > -radius)
    }

    /// Checks whether an axis-aligned box is inside or intersects the
    /// frustum.
    ///
    /// For each plane, only the box corner most aligned with the plane
    /// normal (the "positive vertex") is tested: if even that corner is
    /// behind the plane, the whole box is. The test is conservative, so
    /// it may report a box as visible that is actually outside, but it
    /// never rejects a box that is partially inside.
    ///
    /// # Arguments
    /// * `min` - The box corner with the smallest coordinates
    /// * `max` - The box corner with the largest coordinates
    pub fn is_box_visible(&self, min: Point3<f32>, max: Point3<f32>) -> bool {
        for plane in &self.planes {
            let positive = Vector3::new(
                if plane.x >= 0.0 { max.x } else { min.x },
                if plane.y >= 0.0 { max.y } else { min.y },
                if plane.z >= 0.0 { max.z } else { min.z },
            );
            if plane.x * positive.x + plane.y * positive.y + plane.z * positive.z + plane.w < 0.0 {
                return false;
            }
        }
        true
    }
}
