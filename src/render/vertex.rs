//! Vertex definition for maze geometry.
//!
//! This module provides the [`Vertex`] struct, which describes the layout of
//! vertex data emitted by mesh synthesis and consumed by the renderer.

use crate::math::Vec3;

/// Vertex data for maze, floor, ceiling, and portal geometry.
///
/// Each vertex contains:
/// - `position`: 3D position in world space.
/// - `normal`: outward-facing surface normal.
/// - `tex_coords`: 2D texture coordinates in `[0, 1]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// 3D position in world space.
    pub position: [f32; 3],
    /// Outward-facing surface normal.
    pub normal: [f32; 3],
    /// 2D texture coordinates.
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Creates a vertex from a position, normal, and UV pair.
    pub fn new(position: Vec3, normal: Vec3, u: f32, v: f32) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
            tex_coords: [u, v],
        }
    }

    /// Returns the vertex buffer layout for use in a wgpu pipeline.
    ///
    /// This describes the memory layout of [`Vertex`] for the GPU.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position (3 floats)
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Normal (3 floats)
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Texture coordinates (2 floats)
                wgpu::VertexAttribute {
                    offset: (std::mem::size_of::<[f32; 3]>() * 2) as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_struct_size() {
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride as usize, std::mem::size_of::<Vertex>());
        assert_eq!(layout.attributes.len(), 3);
    }
}
