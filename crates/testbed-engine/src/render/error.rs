use crate::coords::Viewport;

use super::PrimitiveKind;

/// A malformed primitive request. The request is dropped; the frame continues.
#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum DrawError {
    #[error("{kind:?} needs at least {min} points, got {got}")]
    TooFewPoints {
        kind: PrimitiveKind,
        min: usize,
        got: usize,
    },

    #[error("line list needs pre-paired points, got an odd count of {0}")]
    UnpairedLineList(usize),

    #[error("point size must be positive, got {0}")]
    NonPositivePointSize(f32),

    #[error("viewport {0:?} cannot size screen-space point sprites")]
    InvalidViewport(Viewport),
}

/// Presentation failure for one frame. The frame is skipped, never retried.
#[derive(Debug, thiserror::Error)]
pub enum PresentError {
    #[error("no drawable available: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}
