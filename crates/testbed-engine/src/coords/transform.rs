use super::Vec2;

/// Rotation stored as sine/cosine.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rot {
    pub s: f32,
    pub c: f32,
}

impl Rot {
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self { s, c }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self { s: 0.0, c: 1.0 }
    }

    /// Rotated +X axis.
    #[inline]
    pub fn x_axis(self) -> Vec2 {
        Vec2::new(self.c, self.s)
    }

    /// Rotated +Y axis.
    #[inline]
    pub fn y_axis(self) -> Vec2 {
        Vec2::new(-self.s, self.c)
    }

    #[inline]
    pub fn apply(self, v: Vec2) -> Vec2 {
        Vec2::new(self.c * v.x - self.s * v.y, self.s * v.x + self.c * v.y)
    }
}

impl Default for Rot {
    fn default() -> Self {
        Self::identity()
    }
}

/// Rigid transform: translation `p` and rotation `q`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Transform {
    pub p: Vec2,
    pub q: Rot,
}

impl Transform {
    #[inline]
    pub const fn new(p: Vec2, q: Rot) -> Self {
        Self { p, q }
    }

    /// Maps a body-local point to world space.
    #[inline]
    pub fn apply(self, v: Vec2) -> Vec2 {
        self.q.apply(v) + self.p
    }
}
