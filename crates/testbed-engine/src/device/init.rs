/// How [`Gpu::new`](super::Gpu::new) sets up the device and swapchain.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Request an sRGB swapchain. Off by default: vertex colors are display
    /// values and would be brightened by the sRGB encode.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO paces the simulation to the display.
    pub present_mode: wgpu::PresentMode,

    /// Compositing alpha mode; ignored when the surface does not offer it.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features. Debug drawing needs none.
    pub required_features: wgpu::Features,

    /// Device limits. The defaults cover the per-slot vertex buffers.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// This is the swapchain's own hint; the renderer's frames-in-flight gate
    /// bounds CPU run-ahead independently of it.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
