use super::helpers;
use super::targets::{RenderTargets, BLOOM_FORMAT};
use crate::constants::{
    BLOOM_INTENSITY, BLOOM_SMOOTHING, BLOOM_THRESHOLD, VIGNETTE_DARKNESS, VIGNETTE_OFFSET,
};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    texel: [f32; 2],
    blur_dir: [f32; 2],
    bloom: [f32; 4],
    vignette: [f32; 4],
}

impl PostUniforms {
    /// Settings for a `width` × `height` surface (bloom runs at half size).
    pub(crate) fn new(width: u32, height: u32, blur_dir: [f32; 2]) -> Self {
        let (bw, bh) = RenderTargets::bloom_size(width, height);
        Self {
            texel: [1.0 / bw as f32, 1.0 / bh as f32],
            blur_dir,
            bloom: [BLOOM_THRESHOLD, BLOOM_SMOOTHING, BLOOM_INTENSITY, 0.0],
            vignette: [VIGNETTE_OFFSET, VIGNETTE_DARKNESS, 0.0, 0.0],
        }
    }
}

/// One uniform buffer per blur direction; a single buffer rewritten
/// between passes would only hold its last value by submit time.
struct PostBuffers {
    base: wgpu::Buffer,
    horizontal: wgpu::Buffer,
    vertical: wgpu::Buffer,
}

struct PostBindGroups {
    from_hdr: wgpu::BindGroup,
    blur_h: wgpu::BindGroup,
    blur_v: wgpu::BindGroup,
    bloom_only: wgpu::BindGroup,
}

/// Bright pass, two blur passes and the composite onto the surface.
pub(crate) struct PostChain {
    bgl0: wgpu::BindGroupLayout,
    bgl1: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    buffers: PostBuffers,
    groups: PostBindGroups,
    bright_pipeline: wgpu::RenderPipeline,
    blur_pipeline: wgpu::RenderPipeline,
    composite_pipeline: wgpu::RenderPipeline,
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

fn uniform_buffer(device: &wgpu::Device, label: &str) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<PostUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl PostChain {
    pub(crate) fn new(
        device: &wgpu::Device,
        targets: &RenderTargets,
        swap_format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(folio_core::POST_WGSL.into()),
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl0"),
            entries: &[
                texture_entry(0),
                sampler_entry(1),
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });
        let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl1"),
            entries: &[texture_entry(0), sampler_entry(1)],
        });
        let buffers = PostBuffers {
            base: uniform_buffer(device, "post_uniforms"),
            horizontal: uniform_buffer(device, "post_uniforms_h"),
            vertical: uniform_buffer(device, "post_uniforms_v"),
        };

        let pl_single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_post_0"),
            bind_group_layouts: &[&bgl0],
            push_constant_ranges: &[],
        });
        let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_post_comp"),
            bind_group_layouts: &[&bgl0, &bgl1],
            push_constant_ranges: &[],
        });
        let bright_pipeline = helpers::make_post_pipeline(
            device,
            &pl_single,
            &shader,
            "fs_bright",
            BLOOM_FORMAT,
            None,
        );
        let blur_pipeline =
            helpers::make_post_pipeline(device, &pl_single, &shader, "fs_blur", BLOOM_FORMAT, None);
        let composite_pipeline = helpers::make_post_pipeline(
            device,
            &pl_composite,
            &shader,
            "fs_composite",
            swap_format,
            Some(wgpu::BlendState::REPLACE),
        );

        let groups = Self::bind_groups(device, &bgl0, &bgl1, &sampler, &buffers, targets);
        Self {
            bgl0,
            bgl1,
            sampler,
            buffers,
            groups,
            bright_pipeline,
            blur_pipeline,
            composite_pipeline,
        }
    }

    fn bind_groups(
        device: &wgpu::Device,
        bgl0: &wgpu::BindGroupLayout,
        bgl1: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        buffers: &PostBuffers,
        targets: &RenderTargets,
    ) -> PostBindGroups {
        let with_uniforms = |label: &str, view: &wgpu::TextureView, buffer: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: bgl0,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: buffer.as_entire_binding(),
                    },
                ],
            })
        };
        PostBindGroups {
            from_hdr: with_uniforms("bg_hdr", &targets.hdr_view, &buffers.base),
            blur_h: with_uniforms("bg_blur_h", &targets.bloom_a_view, &buffers.horizontal),
            blur_v: with_uniforms("bg_blur_v", &targets.bloom_b_view, &buffers.vertical),
            bloom_only: device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("bg_bloom_only"),
                layout: bgl1,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&targets.bloom_a_view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                ],
            }),
        }
    }

    /// Point the bind groups at freshly recreated targets and refresh the
    /// texel sizes.
    pub(crate) fn resize(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        targets: &RenderTargets,
        width: u32,
        height: u32,
    ) {
        self.groups = Self::bind_groups(
            device,
            &self.bgl0,
            &self.bgl1,
            &self.sampler,
            &self.buffers,
            targets,
        );
        self.write_uniforms(queue, width, height);
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, width: u32, height: u32) {
        for (buffer, dir) in [
            (&self.buffers.base, [0.0, 0.0]),
            (&self.buffers.horizontal, [1.0, 0.0]),
            (&self.buffers.vertical, [0.0, 1.0]),
        ] {
            let u = PostUniforms::new(width, height, dir);
            queue.write_buffer(buffer, 0, bytemuck::bytes_of(&u));
        }
    }

    /// HDR scene colour in `targets` to `surface`.
    pub(crate) fn run(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        targets: &RenderTargets,
        surface: &wgpu::TextureView,
    ) {
        blit(
            encoder,
            "bright_pass",
            &targets.bloom_a_view,
            &self.bright_pipeline,
            &self.groups.from_hdr,
            None,
        );
        blit(
            encoder,
            "blur_h",
            &targets.bloom_b_view,
            &self.blur_pipeline,
            &self.groups.blur_h,
            None,
        );
        blit(
            encoder,
            "blur_v",
            &targets.bloom_a_view,
            &self.blur_pipeline,
            &self.groups.blur_v,
            None,
        );
        blit(
            encoder,
            "composite",
            surface,
            &self.composite_pipeline,
            &self.groups.from_hdr,
            Some(&self.groups.bloom_only),
        );
    }
}

fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}
