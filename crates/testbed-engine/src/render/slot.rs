use crate::coords::{ColorRgba, Vec2, Viewport};

use super::emulate::{self, DrawRequest, ExpandParams};
use super::{DrawCommand, DrawError, PrimitiveKind, Projection, Vertex};

/// Index of a frame slot within its pool.
pub type SlotId = usize;

/// Transient paint state consulted by subsequent draws. Reset at every acquisition.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PaintState {
    pub color: ColorRgba,
    pub point_size: f32,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            color: ColorRgba::new(0.0, 0.0, 0.0, 0.0),
            point_size: 0.0,
        }
    }
}

/// CPU side of one frame in flight: vertex storage, command list, uniform
/// record (projection) and paint state.
///
/// The vertex storage has a fixed capacity that is allocated once. Going past it
/// means the scene exceeds the configured vertex budget and panics rather than
/// drawing truncated geometry.
#[derive(Debug)]
pub struct FrameSlot {
    id: SlotId,
    capacity: usize,
    vertices: Vec<Vertex>,
    commands: Vec<DrawCommand>,
    projection: Projection,
    viewport: Viewport,
    paint: PaintState,
    scratch: Vec<Vertex>,
}

impl FrameSlot {
    pub fn new(id: SlotId, capacity: usize) -> Self {
        Self {
            id,
            capacity,
            vertices: Vec::with_capacity(capacity),
            commands: Vec::new(),
            projection: Projection::identity(),
            viewport: Viewport::default(),
            paint: PaintState::default(),
            scratch: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> SlotId {
        self.id
    }

    /// Vertex capacity of this slot.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Vertex write cursor: the number of vertices written this frame.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Recorded commands in emission order.
    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[inline]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn paint(&self) -> PaintState {
        self.paint
    }

    /// Clears commands, cursor and paint state. Capacity is kept.
    pub(crate) fn reset(&mut self, viewport: Viewport) {
        self.vertices.clear();
        self.commands.clear();
        self.paint = PaintState::default();
        self.projection = Projection::identity();
        self.viewport = viewport;
    }

    /// Sets this frame's orthographic projection. Call before emitting primitives.
    pub fn set_projection(&mut self, left: f32, right: f32, bottom: f32, top: f32) {
        self.projection = Projection::ortho(left, right, bottom, top);
    }

    #[inline]
    pub fn set_color(&mut self, color: ColorRgba) {
        self.paint.color = color;
    }

    /// Point sprite size in logical pixels.
    #[inline]
    pub fn set_point_size(&mut self, px: f32) {
        self.paint.point_size = px;
    }

    /// Writes `vertices` at the cursor and records one command covering them.
    ///
    /// An empty slice records nothing.
    ///
    /// # Panics
    /// Panics if the write would exceed the slot's vertex capacity.
    pub fn append(&mut self, kind: PrimitiveKind, vertices: &[Vertex]) {
        if vertices.is_empty() {
            return;
        }

        let start = self.vertices.len();
        assert!(
            start + vertices.len() <= self.capacity,
            "frame slot {} vertex budget exceeded: {} + {} > {}",
            self.id,
            start,
            vertices.len(),
            self.capacity
        );

        self.vertices.extend_from_slice(vertices);
        self.commands
            .push(DrawCommand::new(kind, start as u32, vertices.len() as u32));
    }

    /// Expands `request` with the current paint state and appends it.
    ///
    /// Malformed requests are rejected without touching the slot.
    pub fn draw(&mut self, request: DrawRequest<'_>) -> Result<(), DrawError> {
        let mut scratch = std::mem::take(&mut self.scratch);
        scratch.clear();

        let params = ExpandParams {
            color: self.paint.color,
            point_size: self.paint.point_size,
            projection: &self.projection,
            viewport: self.viewport,
        };
        let result = emulate::expand(&request, &params, &mut scratch);

        if result.is_ok() {
            self.append(request.kind(), &scratch);
        }

        self.scratch = scratch;
        result
    }

    /// Translucent fill with a solid border: a fan at half intensity and half
    /// opacity, then an opaque closed outline over the same points.
    ///
    /// Either both commands are recorded or neither. Paint color is left at the
    /// border color.
    pub fn draw_soft_fill(&mut self, points: &[Vec2], color: ColorRgba) -> Result<(), DrawError> {
        emulate::validate(&DrawRequest::FilledFan(points), self.paint.point_size)?;

        self.set_color(color.soft_fill());
        self.draw(DrawRequest::FilledFan(points))?;

        self.set_color(color.opaque());
        self.draw(DrawRequest::ClosedOutline(points))
    }
}
