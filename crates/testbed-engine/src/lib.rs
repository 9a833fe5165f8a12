//! Testbed engine crate.
//!
//! Batching debug-draw renderer for a 2-D physics engine, plus the platform and
//! GPU runtime pieces that host it.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod debug_draw;
