//! Simulation step timing.
//!
//! The simulation advances by a fixed step per displayed frame; FIFO present
//! paces frames to the display, so no wall-clock delta is involved.

mod step;

pub use step::StepSettings;
