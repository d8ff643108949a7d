//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
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
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const SKY_TOP: [f32; 4] = [0.53, 0.81, 0.92, 1.0];
    pub const SKY_BOTTOM: [f32; 4] = [0.75, 0.91, 1.0, 1.0];
    pub const CLOUD: [f32; 4] = [1.0, 1.0, 1.0, 0.15];
    pub const BUILDING: [f32; 4] = [0.32, 0.43, 0.51, 1.0];
    pub const BUILDING_ROOF: [f32; 4] = [0.25, 0.36, 0.45, 1.0];
    pub const WINDOW: [f32; 4] = [0.9, 0.94, 1.0, 1.0];
    pub const GROUND: [f32; 4] = [0.63, 0.32, 0.18, 1.0];
    pub const GROUND_TICK: [f32; 4] = [0.76, 0.56, 0.35, 1.0];
    pub const CRAFT_BODY: [f32; 4] = [0.95, 0.77, 0.06, 1.0];
    pub const CRAFT_WING: [f32; 4] = [0.95, 0.61, 0.07, 1.0];
    pub const CRAFT_EYE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const CRAFT_PUPIL: [f32; 4] = [0.17, 0.24, 0.31, 1.0];
    pub const CRAFT_BEAK: [f32; 4] = [0.9, 0.49, 0.13, 1.0];
    pub const LETTERBOX: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
}
