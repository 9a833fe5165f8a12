use winit::event::WindowEvent;

use crate::window::RuntimeCtx;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by hosts.
pub trait App {
    /// Called for every window event before the runtime handles it.
    fn on_window_event(&mut self, event: &WindowEvent, runtime: &mut RuntimeCtx) -> AppControl {
        let _ = (event, runtime);
        AppControl::Continue
    }

    /// Called once per displayed frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
