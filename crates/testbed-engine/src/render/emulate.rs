//! Primitive emulation.
//!
//! The backend draws triangle lists, line lists and line strips only. Requests
//! arrive in domain terms (outline, fan, segments, points) and are expanded here
//! into vertices for one of those topologies.

use crate::coords::{ColorRgba, Vec2, Viewport};

use super::{DrawError, PrimitiveKind, Projection, Vertex};

/// A domain-level draw request, consumed by [`expand`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawRequest<'a> {
    /// Closed loop through `points`; needs at least 2 points.
    ClosedOutline(&'a [Vec2]),
    /// Convex fan around `points[0]`; needs at least 3 points.
    FilledFan(&'a [Vec2]),
    /// Pre-paired segments `(p0, p1), (p2, p3), ...`.
    LineList(&'a [Vec2]),
    /// One screen-constant square per point, sized by the current point size.
    PointSprite(&'a [Vec2]),
}

impl<'a> DrawRequest<'a> {
    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            DrawRequest::ClosedOutline(_) => PrimitiveKind::ClosedOutline,
            DrawRequest::FilledFan(_) => PrimitiveKind::FilledFan,
            DrawRequest::LineList(_) => PrimitiveKind::LineList,
            DrawRequest::PointSprite(_) => PrimitiveKind::PointSprite,
        }
    }

    #[inline]
    pub fn points(&self) -> &'a [Vec2] {
        match *self {
            DrawRequest::ClosedOutline(p)
            | DrawRequest::FilledFan(p)
            | DrawRequest::LineList(p)
            | DrawRequest::PointSprite(p) => p,
        }
    }

    /// Number of vertices the expansion produces for a valid request.
    pub fn vertex_count(&self) -> usize {
        let n = self.points().len();
        match self {
            DrawRequest::ClosedOutline(_) => n + 1,
            DrawRequest::FilledFan(_) => 3 * n.saturating_sub(2),
            DrawRequest::LineList(_) => n,
            DrawRequest::PointSprite(_) => 6 * n,
        }
    }
}

/// Inputs of an expansion that come from the frame's paint and projection state.
#[derive(Debug, Copy, Clone)]
pub struct ExpandParams<'p> {
    pub color: ColorRgba,
    pub point_size: f32,
    pub projection: &'p Projection,
    pub viewport: Viewport,
}

/// Checks a request without producing vertices.
///
/// Empty requests are valid (they expand to nothing).
pub fn validate(request: &DrawRequest<'_>, point_size: f32) -> Result<(), DrawError> {
    let n = request.points().len();
    if n == 0 {
        return Ok(());
    }

    let too_few = |min: usize| DrawError::TooFewPoints {
        kind: request.kind(),
        min,
        got: n,
    };

    match request {
        DrawRequest::ClosedOutline(_) if n < 2 => Err(too_few(2)),
        DrawRequest::FilledFan(_) if n < 3 => Err(too_few(3)),
        DrawRequest::LineList(_) if n % 2 != 0 => Err(DrawError::UnpairedLineList(n)),
        // Also rejects NaN.
        DrawRequest::PointSprite(_) if !(point_size > 0.0) => {
            Err(DrawError::NonPositivePointSize(point_size))
        }
        _ => Ok(()),
    }
}

/// Appends the vertices for `request` to `out`.
///
/// On error nothing is written. `out` is not cleared first.
pub fn expand(
    request: &DrawRequest<'_>,
    params: &ExpandParams<'_>,
    out: &mut Vec<Vertex>,
) -> Result<(), DrawError> {
    validate(request, params.point_size)?;

    let points = request.points();
    if points.is_empty() {
        return Ok(());
    }

    let color = params.color;
    out.reserve(request.vertex_count());

    match request {
        DrawRequest::ClosedOutline(_) => {
            out.extend(points.iter().map(|&p| Vertex::new(p, color)));
            out.push(Vertex::new(points[0], color));
        }

        DrawRequest::FilledFan(_) => {
            let v0 = Vertex::new(points[0], color);
            for pair in points[1..].windows(2) {
                out.push(v0);
                out.push(Vertex::new(pair[0], color));
                out.push(Vertex::new(pair[1], color));
            }
        }

        DrawRequest::LineList(_) => {
            out.extend(points.iter().map(|&p| Vertex::new(p, color)));
        }

        DrawRequest::PointSprite(_) => {
            let half = params
                .projection
                .screen_half_extent(params.point_size, params.viewport)
                .ok_or(DrawError::InvalidViewport(params.viewport))?;

            for &p in points {
                let v0 = Vertex::new(Vec2::new(p.x - half.x, p.y - half.y), color);
                let v1 = Vertex::new(Vec2::new(p.x + half.x, p.y - half.y), color);
                let v2 = Vertex::new(Vec2::new(p.x - half.x, p.y + half.y), color);
                let v3 = Vertex::new(Vec2::new(p.x + half.x, p.y + half.y), color);
                out.extend_from_slice(&[v0, v1, v2, v1, v2, v3]);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: ColorRgba = ColorRgba::red();

    fn params(projection: &Projection, point_size: f32) -> ExpandParams<'_> {
        ExpandParams {
            color: RED,
            point_size,
            projection,
            viewport: Viewport::new(800.0, 600.0),
        }
    }

    fn polygon(k: usize) -> Vec<Vec2> {
        (0..k)
            .map(|i| Vec2::from_angle(i as f32 * core::f32::consts::TAU / k as f32))
            .collect()
    }

    fn run(request: DrawRequest<'_>, point_size: f32) -> Result<Vec<Vertex>, DrawError> {
        let projection = Projection::ortho(-10.0, 10.0, -10.0, 10.0);
        let mut out = Vec::new();
        expand(&request, &params(&projection, point_size), &mut out)?;
        Ok(out)
    }

    // ── closed outline ────────────────────────────────────────────────────

    #[test]
    fn outline_emits_k_plus_one_and_closes_loop() {
        for k in 2..10 {
            let pts = polygon(k);
            let out = run(DrawRequest::ClosedOutline(&pts), 0.0).unwrap();
            assert_eq!(out.len(), k + 1);
            assert_eq!(out.first(), out.last());
        }
    }

    #[test]
    fn outline_with_one_point_is_rejected() {
        let pts = [Vec2::zero()];
        let err = run(DrawRequest::ClosedOutline(&pts), 0.0).unwrap_err();
        assert_eq!(
            err,
            DrawError::TooFewPoints { kind: PrimitiveKind::ClosedOutline, min: 2, got: 1 }
        );
    }

    // ── filled fan ────────────────────────────────────────────────────────

    #[test]
    fn fan_emits_three_per_triangle_anchored_at_first_point() {
        for k in 3..12 {
            let pts = polygon(k);
            let out = run(DrawRequest::FilledFan(&pts), 0.0).unwrap();
            assert_eq!(out.len(), 3 * (k - 2));
            for tri in out.chunks(3) {
                assert!(tri.iter().any(|v| v.position() == pts[0]));
            }
        }
    }

    #[test]
    fn fan_triangles_follow_perimeter_order() {
        let pts = polygon(5);
        let out = run(DrawRequest::FilledFan(&pts), 0.0).unwrap();
        for (i, tri) in out.chunks(3).enumerate() {
            assert_eq!(tri[0].position(), pts[0]);
            assert_eq!(tri[1].position(), pts[i + 1]);
            assert_eq!(tri[2].position(), pts[i + 2]);
        }
    }

    #[test]
    fn fan_with_two_points_is_rejected() {
        let pts = polygon(2);
        assert!(matches!(
            run(DrawRequest::FilledFan(&pts), 0.0),
            Err(DrawError::TooFewPoints { min: 3, got: 2, .. })
        ));
    }

    // ── line list ─────────────────────────────────────────────────────────

    #[test]
    fn line_list_keeps_pairs() {
        let pts = polygon(4);
        let out = run(DrawRequest::LineList(&pts), 0.0).unwrap();
        let positions: Vec<Vec2> = out.iter().map(|v| v.position()).collect();
        assert_eq!(positions, pts);
    }

    #[test]
    fn odd_line_list_is_rejected() {
        let pts = polygon(3);
        assert_eq!(
            run(DrawRequest::LineList(&pts), 0.0),
            Err(DrawError::UnpairedLineList(3))
        );
    }

    // ── point sprite ──────────────────────────────────────────────────────

    #[test]
    fn sprite_emits_six_vertices_per_point_centered_on_point() {
        let pts = [Vec2::new(1.0, 2.0), Vec2::new(-3.0, 0.5)];
        let out = run(DrawRequest::PointSprite(&pts), 4.0).unwrap();
        assert_eq!(out.len(), 12);

        for (quad, &p) in out.chunks(6).zip(pts.iter()) {
            let sum = quad
                .iter()
                .fold(Vec2::zero(), |acc, v| acc + v.position());
            let centroid = sum / 6.0;
            assert!((centroid - p).length() < 1e-5);
        }
    }

    #[test]
    fn sprite_screen_extent_is_independent_of_zoom() {
        let pts = [Vec2::new(0.5, 0.5)];
        let mut extents = Vec::new();

        for span in [1.0f32, 10.0, 1000.0] {
            let projection = Projection::ortho(-span, span, -span, span);
            let mut out = Vec::new();
            expand(&DrawRequest::PointSprite(&pts), &params(&projection, 6.0), &mut out).unwrap();

            let lo = projection.apply(out[0].position());
            let hi = projection.apply(out[5].position());
            extents.push(hi - lo);
        }

        for e in &extents {
            assert!((e.x - extents[0].x).abs() < 1e-4);
            assert!((e.y - extents[0].y).abs() < 1e-4);
        }
    }

    #[test]
    fn zero_point_size_is_rejected() {
        let pts = [Vec2::zero()];
        assert_eq!(
            run(DrawRequest::PointSprite(&pts), 0.0),
            Err(DrawError::NonPositivePointSize(0.0))
        );
    }

    #[test]
    fn sprite_without_viewport_is_rejected() {
        let projection = Projection::identity();
        let pts = [Vec2::zero()];
        let mut out = Vec::new();
        let p = ExpandParams { viewport: Viewport::default(), ..params(&projection, 3.0) };
        assert!(matches!(
            expand(&DrawRequest::PointSprite(&pts), &p, &mut out),
            Err(DrawError::InvalidViewport(_))
        ));
        assert!(out.is_empty());
    }

    // ── shared ────────────────────────────────────────────────────────────

    #[test]
    fn empty_requests_expand_to_nothing() {
        for req in [
            DrawRequest::ClosedOutline(&[]),
            DrawRequest::FilledFan(&[]),
            DrawRequest::LineList(&[]),
            DrawRequest::PointSprite(&[]),
        ] {
            assert!(run(req, 0.0).unwrap().is_empty());
        }
    }

    #[test]
    fn every_vertex_carries_the_paint_color() {
        let pts = polygon(6);
        let out = run(DrawRequest::FilledFan(&pts), 0.0).unwrap();
        assert!(out.iter().all(|v| v.color() == RED));
    }

    #[test]
    fn vertex_count_matches_expansion() {
        let pts = polygon(7);
        for req in [
            DrawRequest::ClosedOutline(&pts),
            DrawRequest::FilledFan(&pts),
            DrawRequest::PointSprite(&pts),
        ] {
            assert_eq!(run(req, 2.0).unwrap().len(), req.vertex_count());
        }
    }
}
