//! Mesh buffer types for voxel rendering.
//!
//! This module defines the vertex layout and the vertex/index buffer
//! pair the greedy mesher writes into. The layout is GPU-ready:
//! position, normal, and texture coordinates packed as plain floats so
//! the buffers can be uploaded to a rendering backend without copying.

use bytemuck::{Pod, Zeroable};

/// A single mesh vertex: position, outward face normal, and atlas UV.
///
/// # Memory Layout
/// The `#[repr(C)]` attribute and the `Pod`/`Zeroable` derives give the
/// struct a stable layout of eight consecutive `f32`s, suitable for
/// direct upload to a vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// World-local position of the vertex.
    pub position: [f32; 3],
    /// Outward normal of the face this vertex belongs to.
    pub normal: [f32; 3],
    /// Normalized texture atlas coordinates.
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Creates a new vertex.
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Vertex {
            position,
            normal,
            tex_coords,
        }
    }
}

/// A vertex/index buffer pair describing a chunk's triangulated surface.
///
/// Indices come in groups of three and reference the vertex buffer.
/// Every quad the mesher emits contributes four vertices and six
/// indices (two triangles with counter-clockwise winding).
#[derive(Debug, Default, Clone)]
pub struct MeshData {
    /// The vertex buffer.
    pub vertices: Vec<Vertex>,
    /// The triangle index buffer.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        MeshData::default()
    }

    /// Returns `true` if the mesh carries no geometry.
    ///
    /// An empty mesh is a valid state (a fully-air chunk produces one);
    /// consumers must treat it as "nothing to draw", never as an error.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Appends a quad's four corners as two counter-clockwise triangles.
    ///
    /// # Arguments
    /// * `corners` - The quad corners in counter-clockwise order
    /// * `normal` - The outward face normal shared by all four vertices
    /// * `uv_rect` - Atlas rectangle as `[min_u, min_v, max_u, max_v]`;
    ///   stretched over the whole quad regardless of its cell span
    pub fn push_quad(&mut self, corners: [[f32; 3]; 4], normal: [f32; 3], uv_rect: [f32; 4]) {
        let [min_u, min_v, max_u, max_v] = uv_rect;
        let uvs = [
            [min_u, min_v],
            [max_u, min_v],
            [max_u, max_v],
            [min_u, max_v],
        ];

        let base = self.vertices.len() as u32;
        for (corner, uv) in corners.into_iter().zip(uvs) {
            self.vertices.push(Vertex::new(corner, normal, uv));
        }
        self.indices
            .extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}
