//! Core host-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and the
//! host application, and the per-frame context that drives the debug renderer.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
