use crate::coords::{Aabb, Vec2, Viewport};

/// 2-D view onto the physics world.
///
/// `extents` are the half extents shown for a square window at zoom 1; the
/// horizontal extent is widened by the window aspect ratio.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewCamera {
    pub center: Vec2,
    pub extents: Vec2,
    pub zoom: f32,
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self {
            center: Vec2::new(0.0, 20.0),
            extents: Vec2::new(25.0, 25.0),
            zoom: 1.0,
        }
    }
}

impl ViewCamera {
    const MIN_ZOOM: f32 = 0.05;
    const MAX_ZOOM: f32 = 20.0;

    /// Visible world rectangle for `viewport`, i.e. the projection bounds.
    pub fn bounds(&self, viewport: Viewport) -> Aabb {
        let half = Vec2::new(viewport.aspect() * self.extents.x, self.extents.y) * self.zoom;
        Aabb::new(self.center - half, self.center + half)
    }

    /// Window position (logical px, top-left origin) to world coordinates.
    pub fn screen_to_world(&self, screen: Vec2, viewport: Viewport) -> Vec2 {
        let bounds = self.bounds(viewport);
        if !viewport.is_valid() {
            return bounds.center();
        }

        let u = screen.x / viewport.width;
        let v = (viewport.height - screen.y) / viewport.height;
        Vec2::new(
            bounds.lower.x + u * (bounds.upper.x - bounds.lower.x),
            bounds.lower.y + v * (bounds.upper.y - bounds.lower.y),
        )
    }

    /// Multiplies the zoom; values above 1 show more of the world.
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
    }

    /// Moves the center by a fraction of the visible half extents.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.center = self.center + Vec2::new(dx * self.extents.x, dy * self.extents.y) * self.zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_window_shows_extents_around_center() {
        let cam = ViewCamera::default();
        let b = cam.bounds(Viewport::new(600.0, 600.0));
        assert_eq!(b.lower, Vec2::new(-25.0, -5.0));
        assert_eq!(b.upper, Vec2::new(25.0, 45.0));
    }

    #[test]
    fn wide_window_widens_horizontal_extent() {
        let cam = ViewCamera::default();
        let b = cam.bounds(Viewport::new(1200.0, 600.0));
        assert_eq!(b.lower.x, -50.0);
        assert_eq!(b.upper.x, 50.0);
        assert_eq!(b.extents().y, 25.0);
    }

    #[test]
    fn zoom_scales_bounds() {
        let mut cam = ViewCamera::default();
        cam.zoom_by(2.0);
        let b = cam.bounds(Viewport::new(100.0, 100.0));
        assert_eq!(b.upper.x, 50.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = ViewCamera::default();
        cam.zoom_by(1e6);
        assert_eq!(cam.zoom, ViewCamera::MAX_ZOOM);
        cam.zoom_by(0.0);
        assert_eq!(cam.zoom, ViewCamera::MIN_ZOOM);
    }

    #[test]
    fn screen_corners_map_to_bounds() {
        let cam = ViewCamera::default();
        let vp = Viewport::new(800.0, 800.0);
        let b = cam.bounds(vp);

        assert_eq!(cam.screen_to_world(Vec2::new(0.0, 800.0), vp), b.lower);
        assert_eq!(cam.screen_to_world(Vec2::new(800.0, 0.0), vp), b.upper);
        assert_eq!(cam.screen_to_world(Vec2::new(400.0, 400.0), vp), cam.center);
    }

    #[test]
    fn pan_moves_center_by_extent_fraction() {
        let mut cam = ViewCamera::default();
        cam.pan(0.5, -0.2);
        assert_eq!(cam.center, Vec2::new(12.5, 15.0));
    }
}
