use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

/// Picks the swapchain format.
///
/// Debug-draw colors are display values and vertices carry them unconverted,
/// so the first non-sRGB format is taken unless `prefer_srgb` asks for the
/// opposite. Falls back to the adapter's preferred format.
pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let preferred = caps.formats.first().copied()?;
    let matching = caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb() == prefer_srgb);
    Some(matching.unwrap_or(preferred))
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Records the drawable size and reconfigures the swapchain. A minimized
/// window reports 0x0; the surface then stays as is and the renderer skips
/// frames until the next real resize.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    *size = new_size;
    if new_size.width == 0 || new_size.height == 0 {
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    surface.configure(device, config);
}

/// A missing drawable never aborts the renderer: lost or outdated swapchains
/// are rebuilt, transient failures drop the frame.
pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: &wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width > 0 && size.height > 0 {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::GpuInit;
    use wgpu::TextureFormat as F;

    fn caps(formats: &[F]) -> wgpu::SurfaceCapabilities {
        wgpu::SurfaceCapabilities {
            formats: formats.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn default_init_avoids_srgb_target() {
        let caps = caps(&[F::Bgra8UnormSrgb, F::Bgra8Unorm]);
        let format = choose_surface_format(&caps, GpuInit::default().prefer_srgb);
        assert_eq!(format, Some(F::Bgra8Unorm));
    }

    #[test]
    fn srgb_is_opt_in() {
        let caps = caps(&[F::Bgra8Unorm, F::Bgra8UnormSrgb]);
        assert_eq!(choose_surface_format(&caps, true), Some(F::Bgra8UnormSrgb));
    }

    #[test]
    fn falls_back_to_first_format() {
        let caps = caps(&[F::Rgba8UnormSrgb]);
        assert_eq!(choose_surface_format(&caps, false), Some(F::Rgba8UnormSrgb));
    }

    #[test]
    fn no_formats_no_choice() {
        assert_eq!(choose_surface_format(&caps(&[]), false), None);
    }

    #[test]
    fn unsupported_alpha_mode_falls_back() {
        let caps = caps(&[F::Bgra8Unorm]);
        let mode = choose_alpha_mode(&caps, Some(wgpu::CompositeAlphaMode::PreMultiplied));
        assert_eq!(mode, wgpu::CompositeAlphaMode::Opaque);
    }
}
