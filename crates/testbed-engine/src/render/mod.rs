//! Batching debug-draw renderer.
//!
//! Draw requests are emulated into a small set of native topologies and
//! appended to the current frame slot. A slot is submitted with a completion
//! callback that returns it to the pool, so the CPU never runs more than
//! `frames_in_flight` frames ahead of the GPU.
//!
//! Convention:
//! - CPU geometry is in world units (+Y up).
//! - The vertex shader applies the slot's projection to reach NDC.

mod command;
mod emulate;
mod error;
mod flow;
mod pool;
mod present;
mod projection;
mod renderer;
mod slot;
mod vertex;

pub use command::{DrawCommand, PrimitiveKind, Topology};
pub use emulate::{expand, validate, DrawRequest, ExpandParams};
pub use error::{DrawError, PresentError};
pub use flow::{FlowController, ReleaseHandle};
pub use pool::{SlotLease, SlotPool};
pub use present::{encode_commands, DrawSink, Presenter};
pub use projection::Projection;
pub use renderer::{DebugRenderer, RendererConfig};
pub use slot::{FrameSlot, PaintState, SlotId};
pub use vertex::Vertex;
