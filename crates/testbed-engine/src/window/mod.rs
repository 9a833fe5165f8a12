//! The testbed's single `winit` window and its event loop.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
