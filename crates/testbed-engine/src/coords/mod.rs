//! Coordinate and geometry types shared by the debug-draw boundary and the renderer.
//!
//! Canonical CPU space:
//! - World units as reported by the physics engine
//! - +X right, +Y up
//!
//! The renderer maps world space to NDC with an orthographic projection uniform.
//! Window-space positions (top-left origin, +Y down) only appear at the input edge
//! and are converted by `debug_draw::ViewCamera`.

mod aabb;
mod color;
mod transform;
mod vec2;
mod viewport;

pub use aabb::Aabb;
pub use color::ColorRgba;
pub use transform::{Rot, Transform};
pub use vec2::Vec2;
pub use viewport::Viewport;
