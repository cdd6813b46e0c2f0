//! WebGPU renderer for the hub scene: one lit pass per loaded item plus an
//! inflated-shell outline pass for the highlighted one.

use hub_core::{
    Camera, HubScene, MeshData, CLEAR_COLOR, DEFAULT_ITEM_COLORS, HIGHLIGHT_EMISSIVE, MAX_RING_ITEMS,
    MODEL_SCALE, OUTLINE_WIDTH,
};
use web_sys as web;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ItemUniforms {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    // x: emissive boost, y: outline width, zw: unused
    params: [f32; 4],
}

// dynamic-offset slots are 256-byte aligned
const ITEM_STRIDE: u64 = 256;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

struct GpuMesh {
    vertex_buf: wgpu::Buffer,
    index_buf: wgpu::Buffer,
    index_count: u32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    mesh_pipeline: wgpu::RenderPipeline,
    outline_pipeline: wgpu::RenderPipeline,
    globals_buf: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    items_buf: wgpu::Buffer,
    items_bg: wgpu::BindGroup,
    depth_view: wgpu::TextureView,
    // parallel to scene items; filled lazily as payloads arrive
    meshes: Vec<Option<GpuMesh>>,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

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
                    // Default limits keep older WebGPU implementations happy
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
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth_view = create_depth_view(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(hub_core::SCENE_WGSL.into()),
        });

        let globals_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let items_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("item_uniforms"),
            size: ITEM_STRIDE * MAX_RING_ITEMS as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
        let items_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("items_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<ItemUniforms>() as u64
                    ),
                },
                count: None,
            }],
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buf.as_entire_binding(),
            }],
        });
        let items_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("items_bg"),
            layout: &items_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &items_buf,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<ItemUniforms>() as u64),
                }),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl, &items_bgl],
            push_constant_ranges: &[],
        });
        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        };

        let mesh_pipeline = create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            vertex_layout.clone(),
            format,
            "vs_main",
            "fs_main",
            wgpu::Face::Back,
            "mesh_pipeline",
        );
        let outline_pipeline = create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            vertex_layout,
            format,
            "vs_outline",
            "fs_outline",
            // cull front faces so only the inflated backside rim shows
            wgpu::Face::Front,
            "outline_pipeline",
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            mesh_pipeline,
            outline_pipeline,
            globals_buf,
            globals_bg,
            items_buf,
            items_bg,
            depth_view,
            meshes: Vec::new(),
            width,
            height,
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
            self.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    /// Create GPU buffers for any scene item whose payload arrived since the
    /// last frame. Already-uploaded and still-loading items are skipped.
    pub fn upload_meshes(&mut self, scene: &HubScene) {
        if self.meshes.len() != scene.items.len() {
            self.meshes.resize_with(scene.items.len(), || None);
        }
        for (i, item) in scene.items.iter().enumerate() {
            if self.meshes[i].is_some() {
                continue;
            }
            if let Some(mesh) = &item.mesh {
                self.meshes[i] = Some(upload_mesh(&self.device, &item.slot, mesh));
            }
        }
    }

    pub fn render(
        &mut self,
        scene: &HubScene,
        highlighted: Option<usize>,
        camera: &Camera,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.globals_buf,
            0,
            bytemuck::bytes_of(&Globals {
                view_proj: camera.view_proj().to_cols_array_2d(),
            }),
        );
        for (i, item) in scene.items.iter().enumerate().take(MAX_RING_ITEMS) {
            let color = DEFAULT_ITEM_COLORS[i % DEFAULT_ITEM_COLORS.len()];
            let is_highlighted = highlighted == Some(i);
            let u = ItemUniforms {
                model: item
                    .model_matrix(scene.ring_rotation, MODEL_SCALE)
                    .to_cols_array_2d(),
                color: [color[0], color[1], color[2], 1.0],
                params: [
                    if is_highlighted { HIGHLIGHT_EMISSIVE } else { 0.0 },
                    if is_highlighted { OUTLINE_WIDTH } else { 0.0 },
                    0.0,
                    0.0,
                ],
            };
            self.queue
                .write_buffer(&self.items_buf, i as u64 * ITEM_STRIDE, bytemuck::bytes_of(&u));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: CLEAR_COLOR[0],
                            g: CLEAR_COLOR[1],
                            b: CLEAR_COLOR[2],
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bg, &[]);

            // outline first so the lit mesh overdraws its inner half
            if let Some(i) = highlighted.filter(|&i| i < MAX_RING_ITEMS) {
                if let Some(Some(gpu)) = self.meshes.get(i) {
                    rpass.set_pipeline(&self.outline_pipeline);
                    rpass.set_bind_group(1, &self.items_bg, &[(i as u64 * ITEM_STRIDE) as u32]);
                    rpass.set_vertex_buffer(0, gpu.vertex_buf.slice(..));
                    rpass.set_index_buffer(gpu.index_buf.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..gpu.index_count, 0, 0..1);
                }
            }

            rpass.set_pipeline(&self.mesh_pipeline);
            // same cap as the uniform writes above; offsets past the table
            // would dangle
            for (i, gpu) in self.meshes.iter().enumerate().take(MAX_RING_ITEMS) {
                let Some(gpu) = gpu else { continue };
                rpass.set_bind_group(1, &self.items_bg, &[(i as u64 * ITEM_STRIDE) as u32]);
                rpass.set_vertex_buffer(0, gpu.vertex_buf.slice(..));
                rpass.set_index_buffer(gpu.index_buf.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..gpu.index_count, 0, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

#[allow(clippy::too_many_arguments)]
fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    vertex_layout: wgpu::VertexBufferLayout<'_>,
    format: wgpu::TextureFormat,
    vs_entry: &str,
    fs_entry: &str,
    cull: wgpu::Face,
    label: &str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(vs_entry),
            buffers: &[vertex_layout],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: Some(cull),
            ..wgpu::PrimitiveState::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

fn upload_mesh(device: &wgpu::Device, slot: &str, mesh: &MeshData) -> GpuMesh {
    let vertices: Vec<Vertex> = mesh
        .positions
        .iter()
        .zip(mesh.normals.iter())
        .map(|(&position, &normal)| Vertex { position, normal })
        .collect();
    let vertex_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{slot}_vb")),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{slot}_ib")),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    GpuMesh {
        vertex_buf,
        index_buf,
        index_count: mesh.indices.len() as u32,
    }
}
