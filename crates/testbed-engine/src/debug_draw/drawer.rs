use std::f32::consts::TAU;

use crate::coords::{Aabb, ColorRgba, Transform, Vec2};
use crate::render::{DrawError, DrawRequest, FrameSlot};

use super::{DebugDraw, DrawFlags};

const CIRCLE_SEGMENTS: usize = 16;
const AXIS_SCALE: f32 = 0.4;

/// [`DebugDraw`] over the frame slot being filled.
///
/// Every call sets the slot's paint state before drawing, so calls never depend
/// on each other's colors. Rejected requests are logged and skipped.
pub struct SlotDrawer<'a> {
    slot: &'a mut FrameSlot,
    flags: DrawFlags,
}

impl<'a> SlotDrawer<'a> {
    pub fn new(slot: &'a mut FrameSlot, flags: DrawFlags) -> Self {
        Self { slot, flags }
    }

    pub fn slot(&self) -> &FrameSlot {
        self.slot
    }

    fn report(&self, call: &str, result: Result<(), DrawError>) {
        if let Err(err) = result {
            log::warn!("{call} skipped: {err}");
        }
    }

    fn line(&mut self, p1: Vec2, p2: Vec2, color: ColorRgba) -> Result<(), DrawError> {
        self.slot.set_color(color.opaque());
        self.slot.draw(DrawRequest::LineList(&[p1, p2]))
    }
}

fn circle_points(center: Vec2, radius: f32) -> [Vec2; CIRCLE_SEGMENTS] {
    let step = TAU / CIRCLE_SEGMENTS as f32;
    std::array::from_fn(|i| center + radius * Vec2::from_angle(i as f32 * step))
}

impl DebugDraw for SlotDrawer<'_> {
    fn flags(&self) -> DrawFlags {
        self.flags
    }

    fn set_flags(&mut self, flags: DrawFlags) {
        self.flags = flags;
    }

    fn draw_polygon(&mut self, vertices: &[Vec2], color: ColorRgba) {
        self.slot.set_color(color.opaque());
        let result = self.slot.draw(DrawRequest::ClosedOutline(vertices));
        self.report("polygon", result);
    }

    fn draw_solid_polygon(&mut self, vertices: &[Vec2], color: ColorRgba) {
        let result = self.slot.draw_soft_fill(vertices, color);
        self.report("solid polygon", result);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: ColorRgba) {
        let points = circle_points(center, radius);
        self.slot.set_color(color.opaque());
        let result = self.slot.draw(DrawRequest::ClosedOutline(&points));
        self.report("circle", result);
    }

    fn draw_solid_circle(&mut self, center: Vec2, radius: f32, axis: Vec2, color: ColorRgba) {
        let points = circle_points(center, radius);
        let result = self
            .slot
            .draw_soft_fill(&points, color)
            .and_then(|()| self.line(center, center + radius * axis, color));
        self.report("solid circle", result);
    }

    fn draw_segment(&mut self, p1: Vec2, p2: Vec2, color: ColorRgba) {
        let result = self.line(p1, p2, color);
        self.report("segment", result);
    }

    fn draw_transform(&mut self, xf: Transform) {
        let p = xf.p;
        let result = self
            .line(p, p + AXIS_SCALE * xf.q.x_axis(), ColorRgba::red())
            .and_then(|()| self.line(p, p + AXIS_SCALE * xf.q.y_axis(), ColorRgba::green()));
        self.report("transform", result);
    }

    fn draw_point(&mut self, p: Vec2, size: f32, color: ColorRgba) {
        self.slot.set_color(color.opaque());
        self.slot.set_point_size(size);
        let result = self.slot.draw(DrawRequest::PointSprite(&[p]));
        self.slot.set_point_size(0.0);
        self.report("point", result);
    }

    fn draw_aabb(&mut self, aabb: Aabb, color: ColorRgba) {
        let corners = aabb.corners();
        self.slot.set_color(color.opaque());
        let result = self.slot.draw(DrawRequest::ClosedOutline(&corners));
        self.report("aabb", result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rot, Viewport};
    use crate::render::{PrimitiveKind, Topology};

    fn slot() -> FrameSlot {
        let mut slot = FrameSlot::new(0, 1024);
        slot.reset(Viewport::new(800.0, 600.0));
        slot.set_projection(-10.0, 10.0, -10.0, 10.0);
        slot
    }

    fn kinds(slot: &FrameSlot) -> Vec<PrimitiveKind> {
        slot.commands().iter().map(|c| c.kind).collect()
    }

    #[test]
    fn polygon_outline_ignores_color_alpha() {
        let mut slot = slot();
        let square = Aabb::new(Vec2::zero(), Vec2::new(1.0, 1.0)).corners();
        SlotDrawer::new(&mut slot, DrawFlags::SHAPE)
            .draw_polygon(&square, ColorRgba::new(0.2, 0.4, 0.6, 0.1));

        assert_eq!(kinds(&slot), vec![PrimitiveKind::ClosedOutline]);
        assert_eq!(slot.vertices().len(), 5);
        assert!(slot.vertices().iter().all(|v| v.color == [0.2, 0.4, 0.6, 1.0]));
    }

    #[test]
    fn solid_polygon_is_soft_fan_then_outline() {
        let mut slot = slot();
        let tri = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        SlotDrawer::new(&mut slot, DrawFlags::SHAPE)
            .draw_solid_polygon(&tri, ColorRgba::rgb(1.0, 0.5, 0.0));

        assert_eq!(
            kinds(&slot),
            vec![PrimitiveKind::FilledFan, PrimitiveKind::ClosedOutline]
        );
        assert_eq!(slot.vertices()[0].color, [0.5, 0.25, 0.0, 0.5]);
        assert_eq!(slot.vertices()[3].color, [1.0, 0.5, 0.0, 1.0]);
    }

    #[test]
    fn circle_uses_sixteen_segments_on_the_radius() {
        let mut slot = slot();
        let center = Vec2::new(2.0, -1.0);
        SlotDrawer::new(&mut slot, DrawFlags::SHAPE).draw_circle(center, 3.0, ColorRgba::white());

        let verts = slot.vertices();
        assert_eq!(verts.len(), CIRCLE_SEGMENTS + 1);
        assert_eq!(verts[0].position(), Vec2::new(5.0, -1.0));
        for v in verts {
            let r = (v.position() - center).length();
            assert!((r - 3.0).abs() < 1e-5, "vertex off the circle: r = {r}");
        }
    }

    #[test]
    fn solid_circle_adds_axis_line() {
        let mut slot = slot();
        SlotDrawer::new(&mut slot, DrawFlags::SHAPE).draw_solid_circle(
            Vec2::zero(),
            2.0,
            Vec2::new(0.0, 1.0),
            ColorRgba::white(),
        );

        assert_eq!(
            kinds(&slot),
            vec![
                PrimitiveKind::FilledFan,
                PrimitiveKind::ClosedOutline,
                PrimitiveKind::LineList
            ]
        );
        let verts = slot.vertices();
        let n = verts.len();
        assert_eq!(verts[n - 2].position(), Vec2::zero());
        assert_eq!(verts[n - 1].position(), Vec2::new(0.0, 2.0));
    }

    #[test]
    fn transform_draws_red_x_and_green_y() {
        let mut slot = slot();
        let xf = Transform::new(Vec2::new(1.0, 1.0), Rot::identity());
        SlotDrawer::new(&mut slot, DrawFlags::CENTER_OF_MASS).draw_transform(xf);

        let verts = slot.vertices();
        assert_eq!(verts.len(), 4);
        assert_eq!(verts[1].position(), Vec2::new(1.4, 1.0));
        assert_eq!(verts[1].color, ColorRgba::red().to_array());
        assert_eq!(verts[3].position(), Vec2::new(1.0, 1.4));
        assert_eq!(verts[3].color, ColorRgba::green().to_array());
        assert!(slot.commands().iter().all(|c| c.topology() == Topology::LineList));
    }

    #[test]
    fn point_resets_size_afterwards() {
        let mut slot = slot();
        SlotDrawer::new(&mut slot, DrawFlags::SHAPE).draw_point(
            Vec2::zero(),
            5.0,
            ColorRgba::white(),
        );

        assert_eq!(kinds(&slot), vec![PrimitiveKind::PointSprite]);
        assert_eq!(slot.vertices().len(), 6);
        assert_eq!(slot.paint().point_size, 0.0);
    }

    #[test]
    fn zero_size_point_is_skipped() {
        let mut slot = slot();
        SlotDrawer::new(&mut slot, DrawFlags::SHAPE).draw_point(
            Vec2::zero(),
            0.0,
            ColorRgba::white(),
        );
        assert!(slot.commands().is_empty());
    }

    #[test]
    fn malformed_polygon_does_not_abort_later_calls() {
        let mut slot = slot();
        let mut dd = SlotDrawer::new(&mut slot, DrawFlags::SHAPE);
        dd.draw_solid_polygon(&[Vec2::zero(), Vec2::new(1.0, 0.0)], ColorRgba::white());
        dd.draw_segment(Vec2::zero(), Vec2::new(1.0, 0.0), ColorRgba::white());

        assert_eq!(kinds(&slot), vec![PrimitiveKind::LineList]);
    }

    #[test]
    fn aabb_outline_walks_corners() {
        let mut slot = slot();
        let aabb = Aabb::new(Vec2::new(-1.0, -2.0), Vec2::new(3.0, 4.0));
        SlotDrawer::new(&mut slot, DrawFlags::AABB).draw_aabb(aabb, ColorRgba::white());

        let pos: Vec<Vec2> = slot.vertices().iter().map(|v| v.position()).collect();
        assert_eq!(
            pos,
            vec![
                Vec2::new(-1.0, -2.0),
                Vec2::new(3.0, -2.0),
                Vec2::new(3.0, 4.0),
                Vec2::new(-1.0, 4.0),
                Vec2::new(-1.0, -2.0),
            ]
        );
    }

    #[test]
    fn flag_helpers_merge_and_clear() {
        let mut slot = slot();
        let mut dd = SlotDrawer::new(&mut slot, DrawFlags::SHAPE);
        dd.append_flags(DrawFlags::JOINT | DrawFlags::AABB);
        assert_eq!(dd.flags(), DrawFlags::SHAPE | DrawFlags::JOINT | DrawFlags::AABB);

        dd.clear_flags(DrawFlags::SHAPE);
        assert_eq!(dd.flags(), DrawFlags::JOINT | DrawFlags::AABB);
    }
}
