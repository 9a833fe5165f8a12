use bytemuck::{Pod, Zeroable};

use crate::coords::{Vec2, Viewport};

/// Orthographic world → NDC transform as a column-major 3×3 affine matrix.
///
/// Exactly one projection is active per frame; it is stored in the frame slot's
/// uniform record and applied to every vertex of that frame on the GPU.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    cols: [[f32; 3]; 3],
}

impl Projection {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            cols: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Maps the world rectangle `[left, right] × [bottom, top]` onto `[-1, 1]²`.
    ///
    /// Callers must pass a non-degenerate rectangle (`left != right`, `bottom != top`).
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        debug_assert!(right != left && top != bottom, "degenerate projection bounds");

        let inv_x = 1.0 / (right - left);
        let inv_y = 1.0 / (top - bottom);

        Self {
            cols: [
                [2.0 * inv_x, 0.0, 0.0],
                [0.0, 2.0 * inv_y, 0.0],
                [-(right + left) * inv_x, -(top + bottom) * inv_y, 1.0],
            ],
        }
    }

    /// Per-axis scale factors (the matrix diagonal).
    #[inline]
    pub fn scale(&self) -> Vec2 {
        Vec2::new(self.cols[0][0], self.cols[1][1])
    }

    /// Applies the transform to a world-space point, returning NDC.
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.cols[0][0] * p.x + self.cols[1][0] * p.y + self.cols[2][0],
            self.cols[0][1] * p.x + self.cols[1][1] * p.y + self.cols[2][1],
        )
    }

    /// World-space half extents of a square `size_px` logical pixels wide.
    ///
    /// `size_px / 2` pixels are `size_px / viewport` in NDC; dividing by the
    /// projection scale brings that back to world units, so the sprite keeps its
    /// on-screen size at every zoom level. Returns `None` for an unusable viewport.
    pub fn screen_half_extent(&self, size_px: f32, viewport: Viewport) -> Option<Vec2> {
        let scale = self.scale();
        if !viewport.is_valid() || scale.x == 0.0 || scale.y == 0.0 {
            return None;
        }
        Some(Vec2::new(
            size_px / (viewport.width * scale.x),
            size_px / (viewport.height * scale.y),
        ))
    }

    /// GPU layout of this projection (WGSL `mat3x3<f32>` columns are 16-byte aligned).
    pub(crate) fn uniform(&self) -> ProjectionUniform {
        let [c0, c1, c2] = self.cols;
        ProjectionUniform {
            cols: [
                [c0[0], c0[1], c0[2], 0.0],
                [c1[0], c1[1], c1[2], 0.0],
                [c2[0], c2[1], c2[2], 0.0],
            ],
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::identity()
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(crate) struct ProjectionUniform {
    pub cols: [[f32; 4]; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn ortho_maps_bounds_to_ndc_corners() {
        let p = Projection::ortho(-10.0, 30.0, -5.0, 15.0);
        assert!(close(p.apply(Vec2::new(-10.0, -5.0)), Vec2::new(-1.0, -1.0)));
        assert!(close(p.apply(Vec2::new(30.0, 15.0)), Vec2::new(1.0, 1.0)));
        assert!(close(p.apply(Vec2::new(10.0, 5.0)), Vec2::zero()));
    }

    #[test]
    fn scale_is_matrix_diagonal() {
        let p = Projection::ortho(0.0, 4.0, 0.0, 8.0);
        assert_eq!(p.scale(), Vec2::new(0.5, 0.25));
    }

    #[test]
    fn uniform_pads_columns_to_vec4() {
        let u = Projection::ortho(-1.0, 1.0, -1.0, 1.0).uniform();
        assert_eq!(std::mem::size_of::<ProjectionUniform>(), 48);
        assert_eq!(u.cols[2], [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(u.cols[0][3], 0.0);
    }

    #[test]
    fn screen_half_extent_is_constant_in_ndc() {
        let viewport = Viewport::new(800.0, 600.0);
        for span in [2.0f32, 20.0, 200.0] {
            let p = Projection::ortho(-span, span, -span, span);
            let half = p.screen_half_extent(8.0, viewport).unwrap();
            let ndc = p.apply(half) - p.apply(Vec2::zero());
            assert!(close(ndc, Vec2::new(8.0 / 800.0, 8.0 / 600.0)));
        }
    }

    #[test]
    fn screen_half_extent_rejects_invalid_viewport() {
        let p = Projection::ortho(-1.0, 1.0, -1.0, 1.0);
        assert!(p.screen_half_extent(4.0, Viewport::new(0.0, 600.0)).is_none());
    }
}
