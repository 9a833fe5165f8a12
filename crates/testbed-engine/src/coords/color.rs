/// Straight-alpha RGBA color, components in `0..=1`.
///
/// This is the color model of the debug-draw boundary. Components are display
/// values: vertices carry them unmodified into a non-sRGB swapchain, and
/// blending happens on the GPU with standard alpha blending.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn red() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn green() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }

    /// Same RGB with alpha forced to 1.
    #[inline]
    pub const fn opaque(self) -> Self {
        Self::new(self.r, self.g, self.b, 1.0)
    }

    /// Interior color of a soft-filled shape: half intensity, half opacity.
    #[inline]
    pub fn soft_fill(self) -> Self {
        Self::new(0.5 * self.r, 0.5 * self.g, 0.5 * self.b, 0.5)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
