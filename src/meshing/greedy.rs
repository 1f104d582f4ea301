//! Greedy meshing implementation for voxel rendering.
//!
//! This module implements the greedy meshing algorithm which combines
//! adjacent coplanar exposed faces of the same block type into larger
//! quads, significantly reducing the number of vertices needed to
//! render a voxel chunk.
//!
//! The algorithm works per face direction, per fixed-coordinate plane:
//! it raster-scans the plane, and on the first unprocessed exposed cell
//! it greedily extends a run along the plane's `u` axis, then extends
//! that run along the `v` axis as long as *every* cell of the next row
//! also matches. Partial rows are never merged. Covered cells are
//! marked in a per-plane bitmask so no cell is emitted twice.

use bitvec::prelude::BitVec;
use cgmath::Point3;

use crate::rendering::atlas::{TextureAtlas, DEFAULT_UV_RECT};
use crate::voxels::block::{block_side::BlockSide, is_solid};
use crate::voxels::chunk::grid::VoxelGrid;

use super::{face::QuadFace, mesh::MeshData};

/// Returns the grid cell for in-plane coordinates `(a, b)` on the given
/// fixed-coordinate plane of a side.
///
/// `a` runs along the side's `u` axis, `b` along `v`, and `plane` is
/// the coordinate on the side's normal axis.
#[inline]
fn cell_at(side: BlockSide, plane: i32, a: i32, b: i32) -> Point3<i32> {
    let n = side.normal();
    let (u, v) = side.plane_axes();
    Point3::new(
        u.x * a + v.x * b + n.x.abs() * plane,
        u.y * a + v.y * b + n.y.abs() * plane,
        u.z * a + v.z * b + n.z.abs() * plane,
    )
}

/// Checks whether `cell` contributes a face toward `side`.
///
/// A cell is exposed iff it is solid and its immediate neighbor in the
/// side's direction is air or outside the grid. Only this grid is
/// consulted, so boundary faces are always exposed.
#[inline]
fn is_exposed(grid: &VoxelGrid, cell: Point3<i32>, side: BlockSide) -> bool {
    if !is_solid(grid.get_point(cell)) {
        return false;
    }
    let n = side.normal();
    grid.is_air_or_outside(cell.x + n.x, cell.y + n.y, cell.z + n.z)
}

/// Collects the maximal merged quads for every face direction of a grid.
///
/// This is the core of the mesher, separated from vertex emission so
/// the quad set itself can be inspected (and property-tested) directly.
///
/// # Arguments
/// * `grid` - The voxel grid to mesh
///
/// # Returns
/// One [`QuadFace`] per maximal rectangle of same-type exposed cells,
/// for each of the six sides independently. The quads of one side
/// never overlap and together cover exactly that side's exposed cells.
pub fn collect_quads(grid: &VoxelGrid) -> Vec<QuadFace> {
    let size = grid.size();
    let mut quads = Vec::new();

    for side in BlockSide::all() {
        for plane in 0..size {
            // Tracks which in-plane cells are already covered by a quad.
            let mut processed: BitVec = BitVec::repeat(false, (size * size) as usize);

            for b in 0..size {
                for a in 0..size {
                    let index = (b * size + a) as usize;
                    if processed[index] {
                        continue;
                    }
                    let origin = cell_at(side, plane, a, b);
                    if !is_exposed(grid, origin, side) {
                        continue;
                    }
                    let block = grid.get_point(origin);

                    // Extend the width run along the u axis.
                    let mut width = 1;
                    while a + width < size {
                        let cell = cell_at(side, plane, a + width, b);
                        if processed[(b * size + a + width) as usize]
                            || grid.get_point(cell) != block
                            || !is_exposed(grid, cell, side)
                        {
                            break;
                        }
                        width += 1;
                    }

                    // Extend along the v axis while the entire next row
                    // at the current width still matches.
                    let mut height = 1;
                    'rows: while b + height < size {
                        for da in 0..width {
                            let cell = cell_at(side, plane, a + da, b + height);
                            if processed[((b + height) * size + a + da) as usize]
                                || grid.get_point(cell) != block
                                || !is_exposed(grid, cell, side)
                            {
                                break 'rows;
                            }
                        }
                        height += 1;
                    }

                    for db in 0..height {
                        for da in 0..width {
                            processed.set(((b + db) * size + a + da) as usize, true);
                        }
                    }

                    quads.push(QuadFace {
                        origin,
                        side,
                        width,
                        height,
                        block,
                    });
                }
            }
        }
    }

    quads
}

/// Generates a triangulated mesh for a voxel grid using greedy meshing.
///
/// # Arguments
/// * `grid` - The voxel grid to mesh
/// * `atlas` - Texture atlas for per-block UV lookup. When absent, every
///   quad falls back to the full default rectangle; the mesher never
///   fails over a missing collaborator.
///
/// # Returns
/// The mesh buffers for the grid's exposed surface. A grid with no
/// exposed faces produces a valid empty mesh.
///
/// # Note
/// A merged quad stretches a single texture tile over its whole span
/// rather than tiling it per cell; see DESIGN.md.
pub fn mesh_grid(grid: &VoxelGrid, atlas: Option<&TextureAtlas>) -> MeshData {
    let mut mesh = MeshData::new();

    for quad in collect_quads(grid) {
        let uv_rect = match atlas {
            Some(atlas) => atlas.tex_coords(quad.block, quad.side),
            None => DEFAULT_UV_RECT,
        };
        mesh.push_quad(quad.corners(), quad.normal(), uv_rect);
    }

    mesh
}
