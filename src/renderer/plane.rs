//! Subdivided unit plane the preview image is drawn on.
//!
//! The plane spans `[-0.5, 0.5]` on X and Y; the model matrix scales it to
//! the configured size. Subdivision lets the vertex distortion bend it
//! smoothly instead of shearing two triangles.

use wgpu::util::DeviceExt;

/// Vertex for the preview plane.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneVertex {
    /// Local position on the unit plane (z = 0).
    pub position: [f32; 3],
    /// Texture coordinate, v = 0 on the top row.
    pub uv: [f32; 2],
}

/// Vertex buffer layout for [`PlaneVertex`].
pub fn plane_vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<PlaneVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: size_of::<[f32; 3]>() as wgpu::BufferAddress,
                shader_location: 1,
            },
        ],
    }
}

/// CPU-side plane geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneGeometry {
    /// Grid vertices, row-major from the top-left corner.
    pub vertices: Vec<PlaneVertex>,
    /// Triangle list indices.
    pub indices: Vec<u32>,
}

impl PlaneGeometry {
    /// Unit plane with `segments_x` × `segments_y` cells (each at least 1).
    pub fn new(segments_x: u32, segments_y: u32) -> Self {
        let sx = segments_x.max(1);
        let sy = segments_y.max(1);
        let row = sx + 1;

        let mut vertices = Vec::with_capacity((row * (sy + 1)) as usize);
        for iy in 0..=sy {
            let v = iy as f32 / sy as f32;
            for ix in 0..=sx {
                let u = ix as f32 / sx as f32;
                vertices.push(PlaneVertex {
                    position: [u - 0.5, 0.5 - v, 0.0],
                    uv: [u, v],
                });
            }
        }

        let mut indices = Vec::with_capacity((sx * sy * 6) as usize);
        for iy in 0..sy {
            for ix in 0..sx {
                let a = ix + row * iy;
                let b = ix + row * (iy + 1);
                let c = ix + 1 + row * (iy + 1);
                let d = ix + 1 + row * iy;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self { vertices, indices }
    }
}

/// Plane geometry uploaded to GPU buffers.
pub struct PlaneMesh {
    /// Vertex buffer of [`PlaneVertex`].
    pub vertex_buffer: wgpu::Buffer,
    /// `u32` index buffer.
    pub index_buffer: wgpu::Buffer,
    /// Number of indices to draw.
    pub index_count: u32,
}

impl PlaneMesh {
    /// Upload `geometry`.
    pub fn new(device: &wgpu::Device, geometry: &PlaneGeometry) -> Self {
        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Preview Plane Vertices"),
                contents: bytemuck::cast_slice(&geometry.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Preview Plane Indices"),
                contents: bytemuck::cast_slice(&geometry.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: geometry.indices.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tessellation_counts() {
        let plane = PlaneGeometry::new(30, 30);
        assert_eq!(plane.vertices.len(), 31 * 31);
        assert_eq!(plane.indices.len(), 30 * 30 * 6);
        let max = *plane.indices.iter().max().unwrap();
        assert!((max as usize) < plane.vertices.len());
    }

    #[test]
    fn corners_span_the_unit_square() {
        let plane = PlaneGeometry::new(2, 3);
        let first = plane.vertices.first().unwrap();
        let last = plane.vertices.last().unwrap();
        assert_eq!(first.position, [-0.5, 0.5, 0.0]);
        assert_eq!(first.uv, [0.0, 0.0]);
        assert_eq!(last.position, [0.5, -0.5, 0.0]);
        assert_eq!(last.uv, [1.0, 1.0]);
    }

    #[test]
    fn triangles_share_winding() {
        let plane = PlaneGeometry::new(4, 4);
        for tri in plane.indices.chunks_exact(3) {
            let p = |i: u32| plane.vertices[i as usize].position;
            let (a, b, c) = (p(tri[0]), p(tri[1]), p(tri[2]));
            let cross = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
            assert!(cross > 0.0, "triangle {tri:?} is clockwise");
        }
    }

    #[test]
    fn zero_segments_fall_back_to_one_quad() {
        let plane = PlaneGeometry::new(0, 0);
        assert_eq!(plane.vertices.len(), 4);
        assert_eq!(plane.indices.len(), 6);
    }

    #[test]
    fn vertex_layout_matches_struct() {
        let layout = plane_vertex_buffer_layout();
        assert_eq!(layout.array_stride, 20);
        assert_eq!(layout.attributes.len(), 2);
    }
}
