use winit::window::Window;

use crate::coords::Viewport;
use crate::debug_draw::{DrawFlags, SlotDrawer, ViewCamera};
use crate::device::{Gpu, SurfaceErrorAction};
use crate::render::{DebugRenderer, PresentError};
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    /// Displayed frames so far, including skipped ones.
    pub frame_index: u64,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Logical window size.
    pub fn viewport(&self) -> Viewport {
        let logical: winit::dpi::LogicalSize<f64> =
            self.window.inner_size().to_logical(self.window.scale_factor());
        Viewport::new(logical.width as f32, logical.height as f32)
    }

    /// Runs one debug-draw frame: acquires a slot, projects `camera`'s view,
    /// hands a [`SlotDrawer`] to `draw`, then presents.
    ///
    /// A surface error skips the frame; only a fatal one stops the app.
    pub fn draw_debug<F>(
        &mut self,
        renderer: &mut DebugRenderer,
        camera: &ViewCamera,
        flags: DrawFlags,
        draw: F,
    ) -> AppControl
    where
        F: FnOnce(&mut SlotDrawer<'_>),
    {
        let viewport = self.viewport();
        renderer.resize(viewport);

        let bounds = camera.bounds(viewport);
        let window = self.window;

        let result = renderer.frame(self.gpu, |slot| {
            slot.set_projection(bounds.lower.x, bounds.upper.x, bounds.lower.y, bounds.upper.y);
            let mut dd = SlotDrawer::new(slot, flags);
            draw(&mut dd);
            window.pre_present_notify();
        });

        match result {
            Ok(()) => AppControl::Continue,
            Err(PresentError::Surface(err)) => match self.gpu.handle_surface_error(&err) {
                SurfaceErrorAction::Fatal => {
                    log::error!("frame {}: surface lost for good: {err}", self.frame_index);
                    AppControl::Exit
                }
                SurfaceErrorAction::SkipFrame => {
                    log::warn!("frame {} skipped: {err}", self.frame_index);
                    AppControl::Continue
                }
                SurfaceErrorAction::Reconfigured => {
                    log::debug!("frame {}: surface reconfigured after {err}", self.frame_index);
                    AppControl::Continue
                }
            },
        }
    }
}
