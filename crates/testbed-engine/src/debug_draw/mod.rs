//! Physics-engine debug-draw boundary.
//!
//! The engine calls [`DebugDraw`] zero or more times per step, in its own
//! order. [`SlotDrawer`] turns each call into closed `DrawRequest`s against
//! the frame slot being filled.

mod camera;
mod drawer;
mod flags;

pub use camera::ViewCamera;
pub use drawer::SlotDrawer;
pub use flags::DrawFlags;

use crate::coords::{Aabb, ColorRgba, Transform, Vec2};

/// Drawing callbacks of a 2-D physics engine.
///
/// Polygons are given in CCW order. Colors are straight RGBA; the alpha of
/// outline colors is ignored.
pub trait DebugDraw {
    fn flags(&self) -> DrawFlags;

    fn set_flags(&mut self, flags: DrawFlags);

    fn append_flags(&mut self, flags: DrawFlags) {
        let merged = self.flags() | flags;
        self.set_flags(merged);
    }

    fn clear_flags(&mut self, flags: DrawFlags) {
        let kept = self.flags() - flags;
        self.set_flags(kept);
    }

    /// Closed polygon outline.
    fn draw_polygon(&mut self, vertices: &[Vec2], color: ColorRgba);

    /// Translucent polygon with an opaque outline.
    fn draw_solid_polygon(&mut self, vertices: &[Vec2], color: ColorRgba);

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: ColorRgba);

    /// Translucent disc with an outline and a radius line along `axis`.
    fn draw_solid_circle(&mut self, center: Vec2, radius: f32, axis: Vec2, color: ColorRgba);

    fn draw_segment(&mut self, p1: Vec2, p2: Vec2, color: ColorRgba);

    /// Red x axis and green y axis of `xf`.
    fn draw_transform(&mut self, xf: Transform);

    /// Screen-space square `size` logical pixels wide.
    fn draw_point(&mut self, p: Vec2, size: f32, color: ColorRgba);

    fn draw_aabb(&mut self, aabb: Aabb, color: ColorRgba);
}
