//! wgpu device and swapchain for the testbed window.
//!
//! Frames are presented right after submission; the GPU reports completion
//! later through the callback given to [`Gpu::submit`], and only when the
//! device is polled.

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
