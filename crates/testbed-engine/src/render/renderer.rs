use crate::coords::{ColorRgba, Viewport};
use crate::device::Gpu;

use super::{FrameSlot, PresentError, Presenter, SlotPool};

/// Sizing of the batching renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// Frame slots, and the bound on frames the CPU may run ahead of the GPU.
    pub frames_in_flight: usize,
    /// Vertex budget of every slot. Exceeding it panics.
    pub max_vertices: usize,
    pub clear_color: ColorRgba,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            frames_in_flight: 3,
            max_vertices: 64 * 1024,
            clear_color: ColorRgba::rgb(0.0, 0.0, 0.0),
        }
    }
}

/// Frame slots + flow controller + presenter, driven once per frame.
///
/// Dropping the renderer waits for every in-flight frame to complete.
pub struct DebugRenderer {
    pool: SlotPool,
    presenter: Presenter,
    device: wgpu::Device,
}

impl DebugRenderer {
    pub fn new(gpu: &Gpu<'_>, viewport: Viewport, config: &RendererConfig) -> Self {
        let pool = SlotPool::new(config.frames_in_flight, config.max_vertices, viewport);
        let presenter = Presenter::new(
            gpu.device(),
            gpu.surface_format(),
            pool.len(),
            config.max_vertices,
            config.clear_color,
        );

        log::info!(
            "debug renderer: {} frame slots, {} vertices each",
            pool.len(),
            config.max_vertices
        );

        Self {
            pool,
            presenter,
            device: gpu.device().clone(),
        }
    }

    /// New viewport, effective from the next acquired frame.
    pub fn resize(&mut self, viewport: Viewport) {
        self.pool.set_viewport(viewport);
    }

    /// Acquires a slot (blocking while all slots are in flight), lets `draw`
    /// fill it, then presents it.
    pub fn frame<F>(&mut self, gpu: &Gpu<'_>, draw: F) -> Result<(), PresentError>
    where
        F: FnOnce(&mut FrameSlot),
    {
        let device = &self.device;
        let mut lease = self.pool.acquire_with(|| {
            let _ = device.poll(wgpu::PollType::Poll);
        });
        log::trace!("frame slot {} acquired", lease.id());

        draw(&mut lease);
        self.presenter.present(gpu, lease)
    }
}

impl Drop for DebugRenderer {
    fn drop(&mut self) {
        let device = &self.device;
        self.pool.drain_with(|| {
            let _ = device.poll(wgpu::PollType::Poll);
        });
        log::debug!("debug renderer drained");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_sizing() {
        let config = RendererConfig::default();
        assert_eq!(config.frames_in_flight, 3);
        assert_eq!(config.max_vertices, 65536);
        assert_eq!(config.clear_color, ColorRgba::black());
    }
}
