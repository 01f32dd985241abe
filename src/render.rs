use crate::constants::*;
use folio_core::background::{Background, WavyPlane};
use folio_core::camera::Lens;
use folio_core::scene::FrameSnapshot;
use glam::Vec3;
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
mod instances;
mod mesh;
mod post;
mod targets;

use instances::{build_batches, InstanceRaw, MeshKind};
use mesh::MeshData;
use post::PostChain;
use targets::{RenderTargets, HDR_FORMAT};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    sun: [f32; 4],
    ambient_fog: [f32; 4],
    fog_color: [f32; 4],
    spot_pos: [f32; 4],
    spot_dir: [f32; 4],
    spot_params: [f32; 4],
}

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, label: &str, data: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
        }
    }
}

fn mesh_data(kind: MeshKind) -> MeshData {
    match kind {
        MeshKind::Cube => mesh::cube(1.0),
        MeshKind::Torus => mesh::torus(1.0, 0.4, 12, 48),
        MeshKind::Octahedron => mesh::octahedron(TARGET_MESH_RADIUS),
        MeshKind::Icosahedron => mesh::icosahedron(TARGET_MESH_RADIUS),
        MeshKind::Sphere => mesh::sphere(TARGET_MESH_RADIUS, 24, 16),
        MeshKind::Tetrahedron => mesh::tetrahedron(1.0),
        MeshKind::Dodecahedron => mesh::dodecahedron(1.0),
        MeshKind::Ground => mesh::ground_quad(GROUND_SIZE),
    }
}

fn srgb_to_linear(c: f32) -> f64 {
    (c.max(0.0) as f64).powf(2.2)
}

fn create_instance_buffer(device: &wgpu::Device, label: &str, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: (capacity.max(1) * std::mem::size_of::<InstanceRaw>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    targets: RenderTargets,
    post: PostChain,
    meshes: Vec<(MeshKind, GpuMesh)>,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    wave: GpuMesh,
    wave_plane: WavyPlane,
    wave_instance: wgpu::Buffer,
    flock_colors: Vec<[f32; 3]>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        background: &Background,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(folio_core::SCENE_WGSL.into()),
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_scene_pipeline(&device, &layout, &shader, HDR_FORMAT);
        let targets = RenderTargets::new(&device, width, height);
        let post = PostChain::new(&device, &targets, format);
        post.write_uniforms(&queue, width, height);

        let meshes = MeshKind::ALL
            .iter()
            .map(|&kind| {
                let label = format!("{kind:?}");
                (kind, GpuMesh::upload(&device, &label, &mesh_data(kind)))
            })
            .collect();

        let wave_plane = *background.plane();
        let wave_data = MeshData {
            vertices: mesh::wave_vertices(&wave_plane, &background.sample_wave(0.0)),
            indices: wave_plane.indices(),
        };
        let wave = GpuMesh::upload(&device, "wave", &wave_data);
        let wave_instance = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("wave_instance"),
            contents: bytemuck::bytes_of(&InstanceRaw::unlit(
                wave_plane.transform(),
                wave_plane.color,
            )),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let [r, g, b] = BACKGROUND_RGB;
        Ok(Self {
            instance_buffer: create_instance_buffer(&device, "instances", MAX_INSTANCES),
            instance_capacity: MAX_INSTANCES,
            targets,
            post,
            surface,
            device,
            queue,
            config,
            pipeline,
            globals_buffer,
            globals_bind_group,
            meshes,
            wave,
            wave_plane,
            wave_instance,
            flock_colors: background.flocks().iter().map(|f| f.color).collect(),
            width,
            height,
            clear_color: wgpu::Color {
                r: srgb_to_linear(r),
                g: srgb_to_linear(g),
                b: srgb_to_linear(b),
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            if self.targets.recreate(&self.device, width, height) {
                self.post
                    .resize(&self.device, &self.queue, &self.targets, width, height);
            }
        }
    }

    fn write_globals(&self, snapshot: &FrameSnapshot, lens: &Lens) {
        let eye = snapshot.camera.position;
        let sun = Vec3::from(SUN_POSITION).normalize();
        let (spot_pos, spot_dir) = match snapshot.spotlight {
            Some(s) => (
                s.position.extend(1.0),
                (s.target - s.position)
                    .normalize_or_zero()
                    .extend(SPOT_ANGLE.cos()),
            ),
            None => (glam::Vec4::ZERO, glam::Vec4::ZERO),
        };
        let [fr, fg, fb] = BACKGROUND_RGB;
        let globals = Globals {
            view_proj: lens.view_proj(&snapshot.camera).to_cols_array_2d(),
            camera_pos: [eye.x, eye.y, eye.z, 1.0],
            sun: [sun.x, sun.y, sun.z, SUN_INTENSITY],
            ambient_fog: [AMBIENT_INTENSITY, FOG_NEAR, FOG_FAR, 0.0],
            fog_color: [fr, fg, fb, 1.0],
            spot_pos: spot_pos.to_array(),
            spot_dir: spot_dir.to_array(),
            spot_params: [
                SPOT_INTENSITY,
                SPOT_DISTANCE,
                0.0,
                (SPOT_ANGLE * (1.0 - SPOT_PENUMBRA)).cos(),
            ],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
    }

    pub fn render(&mut self, snapshot: &FrameSnapshot, lens: &Lens) -> Result<(), wgpu::SurfaceError> {
        self.write_globals(snapshot, lens);

        let batches = build_batches(snapshot, &self.flock_colors);
        let all: Vec<InstanceRaw> = batches
            .iter()
            .flat_map(|b| b.instances.iter().copied())
            .collect();
        if all.len() > self.instance_capacity {
            self.instance_capacity = all.len().next_power_of_two();
            self.instance_buffer =
                create_instance_buffer(&self.device, "instances", self.instance_capacity);
            log::info!("[gpu] instance buffer grown to {}", self.instance_capacity);
        }
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&all));

        let wave_vertices = mesh::wave_vertices(&self.wave_plane, &snapshot.wave_heights);
        self.queue.write_buffer(
            &self.wave.vertex_buffer,
            0,
            bytemuck::cast_slice(&wave_vertices),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));

            let mut first = 0u32;
            for batch in &batches {
                let count = batch.instances.len() as u32;
                if let Some((_, mesh)) = self.meshes.iter().find(|(k, _)| *k == batch.mesh) {
                    rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                    rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..mesh.index_count, 0, first..first + count);
                }
                first += count;
            }

            rpass.set_vertex_buffer(0, self.wave.vertex_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.wave_instance.slice(..));
            rpass.set_index_buffer(self.wave.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.wave.index_count, 0, 0..1);
        }
        self.post.run(&mut encoder, &self.targets, &view);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
