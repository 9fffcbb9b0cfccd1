use web_sys::HtmlCanvasElement;
use wgpu::*;

/// Device, queue and configured canvas surface
pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
    pub size: (u32, u32),
}

/// Prefer an sRGB format so the flat colours come out as authored
fn pick_format(formats: &[TextureFormat]) -> Result<TextureFormat, String> {
    formats
        .iter()
        .copied()
        .find(TextureFormat::is_srgb)
        .or_else(|| formats.first().copied())
        .ok_or_else(|| "Canvas exposes no surface formats".to_string())
}

fn canvas_config(format: TextureFormat, (width, height): (u32, u32)) -> SurfaceConfiguration {
    SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format,
        width,
        height,
        present_mode: PresentMode::Fifo,
        // The playfield is fully opaque; no compositing with the page
        alpha_mode: CompositeAlphaMode::Opaque,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    }
}

async fn request_device(adapter: &Adapter) -> Result<(Device, Queue), String> {
    adapter
        .request_device(
            &DeviceDescriptor {
                label: Some("Pong Device"),
                required_features: Features::empty(),
                required_limits: Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: MemoryHints::Performance,
            },
            None,
        )
        .await
        .map_err(|e| format!("WebGPU device request failed: {}", e))
}

pub async fn init_wgpu(canvas: HtmlCanvasElement) -> Result<WgpuContext, String> {
    let size = (canvas.width(), canvas.height());

    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let surface = instance
        .create_surface(SurfaceTarget::Canvas(canvas))
        .map_err(|e| format!("Canvas surface unavailable: {}", e))?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or_else(|| "No WebGPU adapter; is WebGPU enabled in this browser?".to_string())?;
    log::info!("WebGPU adapter: {}", adapter.get_info().name);

    let (device, queue) = request_device(&adapter).await?;

    let format = pick_format(&surface.get_capabilities(&adapter).formats)?;
    let config = canvas_config(format, size);
    surface.configure(&device, &config);
    log::debug!("Surface {:?} at {}x{}", format, size.0, size.1);

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
        size,
    })
}
