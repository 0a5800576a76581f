/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface format when the surface offers one.
    pub prefer_srgb: bool,

    /// FIFO by default. Animation is timer-paced, so vsync only caps how often
    /// OS-driven redraws are presented.
    pub present_mode: wgpu::PresentMode,

    /// Requested alpha mode; unsupported requests fall back to the first mode
    /// the surface reports.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// A clock face does not need a discrete GPU.
    pub power_preference: wgpu::PowerPreference,

    /// Limits requested from the device, clamped to what the adapter reports.
    pub required_limits: wgpu::Limits,

    /// Hint only; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::LowPower,
            required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}

