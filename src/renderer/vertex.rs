//! Vertex types for 3D box rendering

use bytemuck::{Pod, Zeroable};

/// Vertex with position, face normal and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 4]) -> Self {
        Self {
            position,
            normal,
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const FLOOR: [f32; 4] = [0.93, 0.86, 0.78, 1.0];
    pub const WALL: [f32; 4] = [0.95, 0.55, 0.65, 1.0];
    pub const GLASS: [f32; 4] = [0.75, 0.9, 1.0, 0.18];
    pub const CLAW: [f32; 4] = [0.75, 0.75, 0.8, 1.0];
    pub const CABLE: [f32; 4] = [0.3, 0.3, 0.35, 1.0];
    pub const BACKGROUND: [f32; 4] = [1.0, 0.92, 0.94, 1.0];

    /// Gift wrapping palette, indexed by `Gift::color`
    pub const GIFTS: [[f32; 4]; 6] = [
        [0.9, 0.2, 0.25, 1.0],
        [0.2, 0.6, 0.9, 1.0],
        [0.95, 0.75, 0.2, 1.0],
        [0.35, 0.8, 0.4, 1.0],
        [0.7, 0.4, 0.9, 1.0],
        [1.0, 0.55, 0.2, 1.0],
    ];
}
