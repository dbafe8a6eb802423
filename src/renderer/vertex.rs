//! Vertex type shared by the shape batch and the GPU pipeline

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// 2D vertex with position and RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Map canvas pixels (origin top-left, y down) to clip space
    pub fn to_clip(self, viewport: Vec2) -> Self {
        let [x, y] = self.position;
        Self::new(
            x / viewport.x * 2.0 - 1.0,
            1.0 - y / viewport.y * 2.0,
            self.color,
        )
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
