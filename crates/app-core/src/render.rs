//! wgpu renderer shared by the web and native front-ends.
//!
//! One pipeline draws everything: the box mesh instanced once per grid cell,
//! then the ground quad as a single extra instance.

use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::constants::{ALBEDO_RGB, BACKGROUND_RGB, FOG_FAR, FOG_NEAR, GROUND_PLANE_SIZE};
use crate::grid::CellTransform;
use crate::mesh::{box_mesh, ground_mesh, Mesh, MeshVertex};
use crate::state::Camera;
use crate::visualizer::Frame;
use crate::SCENE_WGSL;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("graphics not supported: {0}")]
    Unsupported(String),
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
    #[error("device error: {0}")]
    Device(String),
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    ambient: [f32; 4],
    spot_pos: [f32; 4],
    spot_dir: [f32; 4],
    spot_color: [f32; 4],
    dir_to_light: [f32; 4],
    dir_color: [f32; 4],
    albedo: [f32; 4],
    fog_color: [f32; 4],
    fog_range: [f32; 4],
}

impl SceneUniforms {
    pub fn new(camera: &Camera, frame: &Frame<'_>) -> Self {
        let lights = &frame.lights;
        let (cos_inner, cos_outer) = lights.spot.cone_cosines();
        let spot_dir = (lights.spot.target - lights.spot.position).normalize_or_zero();
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            ambient: lights.ambient.extend(0.0).to_array(),
            spot_pos: lights.spot.position.extend(cos_outer).to_array(),
            spot_dir: spot_dir.extend(cos_inner).to_array(),
            spot_color: lights.spot.color.extend(0.0).to_array(),
            dir_to_light: (-lights.directional.direction()).extend(0.0).to_array(),
            dir_color: lights.directional.color.extend(0.0).to_array(),
            albedo: Vec3::from(ALBEDO_RGB).extend(1.0).to_array(),
            fog_color: Vec3::from(BACKGROUND_RGB).extend(1.0).to_array(),
            fog_range: [FOG_NEAR, FOG_FAR, 0.0, 0.0],
        }
    }
}

struct GpuMesh {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, label: &str, mesh: &Mesh) -> Self {
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertices,
            indices,
            index_count: mesh.index_count(),
        }
    }
}

pub struct GridRenderer<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,
    cell_mesh: GpuMesh,
    ground_mesh: GpuMesh,
    instance_vb: wgpu::Buffer,
    instance_capacity: usize,
    instance_count: u32,
    ground_vb: wgpu::Buffer,
    clear_color: wgpu::Color,
}

impl<'w> GridRenderer<'w> {
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'w>>,
        width: u32,
        height: u32,
        cell_size: f32,
    ) -> Result<Self, RenderError> {
        let width = width.max(1);
        let height = height.max(1);
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(target)
            .map_err(|e| RenderError::Unsupported(e.to_string()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| RenderError::Unsupported("no compatible GPU adapter".into()))?;
        // mesh + per-cell offsets come from two vertex buffers
        if adapter.limits().max_vertex_buffers < 2 {
            return Err(RenderError::Unsupported(
                "adapter cannot bind instance buffers".into(),
            ));
        }
        log::info!("[gpu] adapter: {}", adapter.get_info().name);

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
            .map_err(|e| RenderError::Device(e.to_string()))?;

        let caps = surface.get_capabilities(&adapter);
        // Palette colors are authored in display space, so skip sRGB encoding.
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| RenderError::Unsupported("surface has no formats".into()))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
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
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = [
            // slot 0: mesh
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<MeshVertex>() as u64,
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
            },
            // slot 1: per-instance offset
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<CellTransform>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 2,
                }],
            },
        ];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
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
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let depth_view = create_depth_view(&device, width, height);
        let cell_mesh = GpuMesh::upload(&device, "cell_mesh", &box_mesh(cell_size));
        let ground_mesh = GpuMesh::upload(&device, "ground_mesh", &ground_mesh(GROUND_PLANE_SIZE));
        let instance_vb = create_instance_buffer(&device, 1);
        let ground_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ground_instance"),
            contents: bytemuck::bytes_of(&CellTransform::default()),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let [r, g, b] = BACKGROUND_RGB;

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            bind_group,
            depth_view,
            cell_mesh,
            ground_mesh,
            instance_vb,
            instance_capacity: 1,
            instance_count: 0,
            ground_vb,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, width, height);
        log::debug!("[gpu] resized to {}x{}", width, height);
    }

    fn upload_instances(&mut self, transforms: &[CellTransform]) {
        if transforms.len() > self.instance_capacity {
            self.instance_capacity = transforms.len().next_power_of_two();
            self.instance_vb = create_instance_buffer(&self.device, self.instance_capacity);
            log::debug!("[gpu] instance buffer grown to {}", self.instance_capacity);
        }
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(transforms));
        self.instance_count = transforms.len() as u32;
    }

    pub fn render(&mut self, camera: &Camera, frame: &Frame<'_>) -> Result<(), RenderError> {
        if let Some(transforms) = frame.transforms {
            self.upload_instances(transforms);
        }
        let uniforms = SceneUniforms::new(camera, frame);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        if let Some(ground) = frame.ground {
            let at = CellTransform {
                position: [0.0, 0.0, ground.z],
            };
            self.queue
                .write_buffer(&self.ground_vb, 0, bytemuck::bytes_of(&at));
        }

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(RenderError::Surface(e)),
        };
        let view = output
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
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
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
            rpass.set_bind_group(0, &self.bind_group, &[]);

            // a grid reallocated this frame but not yet rebuilt draws nothing stale
            let cells = self.instance_count.min(frame.cell_count as u32);
            if cells > 0 {
                draw_mesh(&mut rpass, &self.cell_mesh, &self.instance_vb, cells);
            }
            if frame.ground.is_some() {
                draw_mesh(&mut rpass, &self.ground_mesh, &self.ground_vb, 1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}

fn draw_mesh(
    rpass: &mut wgpu::RenderPass<'_>,
    mesh: &GpuMesh,
    instances: &wgpu::Buffer,
    count: u32,
) {
    rpass.set_vertex_buffer(0, mesh.vertices.slice(..));
    rpass.set_vertex_buffer(1, instances.slice(..));
    rpass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint16);
    rpass.draw_indexed(0..mesh.index_count, 0, 0..count);
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("cell_instances"),
        size: (std::mem::size_of::<CellTransform>() * capacity.max(1)) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
