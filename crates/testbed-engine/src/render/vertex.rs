use bytemuck::{Pod, Zeroable};

use crate::coords::{ColorRgba, Vec2};

/// GPU vertex: world-space position + straight-alpha RGBA color.
///
/// Layout (24 bytes):
///
///  offset  0  pos    [f32; 2]   loc 0
///  offset  8  color  [f32; 4]   loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    #[inline]
    pub fn new(pos: Vec2, color: ColorRgba) -> Self {
        Self {
            pos: pos.to_array(),
            color: color.to_array(),
        }
    }

    #[inline]
    pub fn position(self) -> Vec2 {
        Vec2::new(self.pos[0], self.pos[1])
    }

    #[inline]
    pub fn color(self) -> ColorRgba {
        let [r, g, b, a] = self.color;
        ColorRgba::new(r, g, b, a)
    }

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
