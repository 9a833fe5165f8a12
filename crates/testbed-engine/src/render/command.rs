use core::ops::Range;

/// Domain-level primitive kinds accepted from the debug-draw boundary.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PrimitiveKind {
    /// Closed polyline, emulated with a line strip that repeats the first point.
    ClosedOutline,
    /// Convex fan, emulated with a triangle list.
    FilledFan,
    /// Independent 2-point segments.
    LineList,
    /// Screen-constant square per point, emulated with two triangles.
    PointSprite,
}

impl PrimitiveKind {
    /// Backend topology used to draw vertices emitted for this kind.
    #[inline]
    pub const fn topology(self) -> Topology {
        match self {
            PrimitiveKind::ClosedOutline => Topology::LineStrip,
            PrimitiveKind::FilledFan => Topology::TriangleList,
            PrimitiveKind::LineList => Topology::LineList,
            PrimitiveKind::PointSprite => Topology::TriangleList,
        }
    }
}

/// Primitive topologies the backend draws natively.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    TriangleList,
    LineList,
    LineStrip,
}

impl Topology {
    pub const ALL: [Topology; 3] = [Topology::TriangleList, Topology::LineList, Topology::LineStrip];

    /// Dense index into per-topology tables (see [`Topology::ALL`]).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Topology::TriangleList => 0,
            Topology::LineList => 1,
            Topology::LineStrip => 2,
        }
    }

    #[inline]
    pub(crate) fn to_wgpu(self) -> wgpu::PrimitiveTopology {
        match self {
            Topology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
            Topology::LineList => wgpu::PrimitiveTopology::LineList,
            Topology::LineStrip => wgpu::PrimitiveTopology::LineStrip,
        }
    }
}

/// One recorded draw: a primitive kind over a contiguous vertex range of a frame slot.
///
/// Commands execute in recording order (painter's algorithm, no depth test).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawCommand {
    pub kind: PrimitiveKind,
    pub start: u32,
    pub count: u32,
}

impl DrawCommand {
    #[inline]
    pub const fn new(kind: PrimitiveKind, start: u32, count: u32) -> Self {
        Self { kind, start, count }
    }

    #[inline]
    pub const fn topology(&self) -> Topology {
        self.kind.topology()
    }

    /// Vertex range in the slot's vertex buffer.
    #[inline]
    pub fn range(&self) -> Range<u32> {
        self.start..self.start + self.count
    }
}
