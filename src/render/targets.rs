use super::helpers;

/// Linear scene colour before bloom and vignette.
pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;
pub(crate) const BLOOM_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Depth, HDR colour and the two half-size bloom buffers; rebuilt on resize.
pub(crate) struct RenderTargets {
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) hdr_tex: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    pub(crate) bloom_a_tex: wgpu::Texture,
    pub(crate) bloom_a_view: wgpu::TextureView,
    pub(crate) bloom_b_tex: wgpu::Texture,
    pub(crate) bloom_b_view: wgpu::TextureView,
    width: u32,
    height: u32,
}

fn sampled_target(
    device: &wgpu::Device,
    label: &str,
    width: u32,
    height: u32,
    format: wgpu::TextureFormat,
) -> (wgpu::Texture, wgpu::TextureView) {
    helpers::create_color_texture(
        device,
        label,
        width,
        height,
        format,
        wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
    )
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (depth_tex, depth_view) = helpers::create_depth_texture(device, "depth", width, height);
        let (hdr_tex, hdr_view) = sampled_target(device, "hdr", width, height, HDR_FORMAT);
        let (bw, bh) = Self::bloom_size(width, height);
        let (bloom_a_tex, bloom_a_view) = sampled_target(device, "bloom_a", bw, bh, BLOOM_FORMAT);
        let (bloom_b_tex, bloom_b_view) = sampled_target(device, "bloom_b", bw, bh, BLOOM_FORMAT);
        Self {
            depth_tex,
            depth_view,
            hdr_tex,
            hdr_view,
            bloom_a_tex,
            bloom_a_view,
            bloom_b_tex,
            bloom_b_view,
            width,
            height,
        }
    }

    /// Bloom runs at half resolution, never below one texel.
    pub(crate) fn bloom_size(width: u32, height: u32) -> (u32, u32) {
        ((width / 2).max(1), (height / 2).max(1))
    }

    /// Returns whether anything was rebuilt; bind groups holding the old
    /// views must be refreshed when it was.
    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        self.depth_tex.destroy();
        self.hdr_tex.destroy();
        self.bloom_a_tex.destroy();
        self.bloom_b_tex.destroy();
        *self = Self::new(device, width, height);
        true
    }
}
