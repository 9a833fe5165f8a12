use super::Vec2;

/// Axis-aligned bounding box in world units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Aabb {
    pub lower: Vec2,
    pub upper: Vec2,
}

impl Aabb {
    #[inline]
    pub const fn new(lower: Vec2, upper: Vec2) -> Self {
        Self { lower, upper }
    }

    #[inline]
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        (self.lower + self.upper) * 0.5
    }

    #[inline]
    pub fn extents(self) -> Vec2 {
        (self.upper - self.lower) * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.upper.x <= self.lower.x || self.upper.y <= self.lower.y
    }

    /// Swaps bounds so that `lower <= upper` on both axes.
    #[inline]
    pub fn normalized(self) -> Self {
        Aabb::new(
            Vec2::new(self.lower.x.min(self.upper.x), self.lower.y.min(self.upper.y)),
            Vec2::new(self.lower.x.max(self.upper.x), self.lower.y.max(self.upper.y)),
        )
    }

    /// Closed containment: [lower, upper].
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let b = self.normalized();
        p.x >= b.lower.x && p.y >= b.lower.y && p.x <= b.upper.x && p.y <= b.upper.y
    }

    /// Closed overlap test; touching boxes overlap.
    #[inline]
    pub fn overlaps(self, other: Aabb) -> bool {
        self.lower.x <= other.upper.x
            && other.lower.x <= self.upper.x
            && self.lower.y <= other.upper.y
            && other.lower.y <= self.upper.y
    }

    /// Corners in counter-clockwise order starting at `lower`.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        [
            self.lower,
            Vec2::new(self.upper.x, self.lower.y),
            self.upper,
            Vec2::new(self.lower.x, self.upper.y),
        ]
    }
}
