//! Rendering system with wgpu pipelines, shadow maps and title overlay.

mod capture;
mod gpu_mesh;
mod uniforms;

pub use gpu_mesh::MeshOwner;
pub use uniforms::{
    ObjectUniforms, PointShadowUniforms, SceneUniforms, ShadowUniforms, TitleUniforms,
};

use std::sync::Arc;

use anyhow::{Context, Result};
use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::frame_loop::FrameSink;
use crate::mesh::Vertex;
use crate::params::{CaptureConfig, ShadowSettings, StageParams, TitleStyle};
use crate::scene::Scene;
use crate::timeline::TitleState;
use gpu_mesh::GpuMesh;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Rendering system managing wgpu device, pipelines, and buffers
pub struct RenderSystem {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,

    scene_pipeline: wgpu::RenderPipeline,
    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,

    shadow_pipeline: wgpu::RenderPipeline,
    sun_caster: ShadowCaster,
    /// One per cube face, each rendering into its own array layer
    point_casters: Vec<ShadowCaster>,
    point_shadow_buffer: wgpu::Buffer,

    title_pipeline: wgpu::RenderPipeline,
    title_uniform_buffer: wgpu::Buffer,
    title_bind_group: wgpu::BindGroup,

    wave: GpuMesh,
    ships: Vec<GpuMesh>,

    shadows: ShadowSettings,
    title_style: TitleStyle,
    capture: Option<CaptureConfig>,
    frame_index: u64,
    captured: bool,
}

impl RenderSystem {
    /// Create rendering system for `window` and upload the scene's meshes
    pub async fn new(
        window: Arc<winit::window::Window>,
        scene: &Scene,
        params: &StageParams,
        capture: Option<CaptureConfig>,
    ) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // Create surface (window must have 'static lifetime via Arc)
        let surface = instance
            .create_surface(window)
            .context("failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;
        log::info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await
            .context("failed to request device")?;

        // Configure surface
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let mut usage = wgpu::TextureUsages::RENDER_ATTACHMENT;
        let capture = match capture {
            Some(c) if surface_caps.usages.contains(wgpu::TextureUsages::COPY_SRC) => {
                usage |= wgpu::TextureUsages::COPY_SRC;
                Some(c)
            }
            Some(_) => {
                log::warn!("Surface does not support readback; screenshot disabled");
                None
            }
            None => None,
        };

        let config = wgpu::SurfaceConfiguration {
            usage,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth_view = create_depth_view(&device, config.width, config.height);

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("scene.wgsl").into()),
        });
        let shadow_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shadow Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shadow.wgsl").into()),
        });
        let title_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Title Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("title.wgsl").into()),
        });

        // Shared per-draw layout (group 1 in scene and shadow passes)
        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Object Bind Group Layout"),
            entries: &[uniform_entry(0)],
        });

        // Shadow map
        let shadow_texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Shadow Map"),
            size: wgpu::Extent3d {
                width: params.shadows.map_size,
                height: params.shadows.map_size,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let shadow_view = shadow_texture.create_view(&wgpu::TextureViewDescriptor::default());

        let point_shadow_texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Point Shadow Maps"),
            size: wgpu::Extent3d {
                width: params.shadows.map_size,
                height: params.shadows.map_size,
                depth_or_array_layers: 6,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let point_shadow_view = point_shadow_texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("Point Shadow Array View"),
            dimension: Some(wgpu::TextureViewDimension::D2Array),
            ..Default::default()
        });
        let shadow_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Shadow Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            compare: Some(wgpu::CompareFunction::LessEqual),
            ..Default::default()
        });

        // Scene uniforms + shadow map binding
        let scene_uniforms = SceneUniforms::from_scene(scene, &params.shadows);
        let scene_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Uniform Buffer"),
            contents: bytemuck::cast_slice(&[scene_uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let point_shadow_uniforms = PointShadowUniforms::from_scene(scene, &params.shadows);
        let point_shadow_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Shadow Uniform Buffer"),
            contents: bytemuck::cast_slice(&[point_shadow_uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let scene_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Scene Bind Group Layout"),
            entries: &[
                uniform_entry(0),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Depth,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Comparison),
                    count: None,
                },
                uniform_entry(3),
                wgpu::BindGroupLayoutEntry {
                    binding: 4,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Depth,
                        view_dimension: wgpu::TextureViewDimension::D2Array,
                        multisampled: false,
                    },
                    count: None,
                },
            ],
        });

        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &scene_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: scene_uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&shadow_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&shadow_sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: point_shadow_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: wgpu::BindingResource::TextureView(&point_shadow_view),
                },
            ],
        });

        let scene_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&scene_layout, &object_layout],
            push_constant_ranges: &[],
        });

        let scene_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Scene Render Pipeline"),
            layout: Some(&scene_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                // Ship models are often single-sided shells
                cull_mode: None,
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
            multiview: None,
            cache: None,
        });

        // Shadow passes: one directional camera, six point light faces
        let shadow_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Shadow Bind Group Layout"),
            entries: &[uniform_entry(0)],
        });
        let sun_caster = ShadowCaster::new(
            &device,
            &shadow_layout,
            "Directional",
            scene_uniforms.light_view_proj,
            shadow_view,
        );
        let point_casters = (0..6u32)
            .map(|face| {
                let target = point_shadow_texture.create_view(&wgpu::TextureViewDescriptor {
                    label: Some("Point Shadow Face View"),
                    dimension: Some(wgpu::TextureViewDimension::D2),
                    base_array_layer: face,
                    array_layer_count: Some(1),
                    ..Default::default()
                });
                ShadowCaster::new(
                    &device,
                    &shadow_layout,
                    "Point Face",
                    point_shadow_uniforms.face_view_proj[face as usize],
                    target,
                )
            })
            .collect();
        let shadow_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Shadow Pipeline Layout"),
                bind_group_layouts: &[&shadow_layout, &object_layout],
                push_constant_ranges: &[],
            });
        let shadow_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shadow Pipeline"),
            layout: Some(&shadow_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shadow_shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: None,
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState {
                    constant: 2,
                    slope_scale: 2.0,
                    clamp: 0.0,
                },
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        // Title overlay
        let title_uniforms = TitleUniforms::new(&params.title, &TitleState::VISIBLE, config.height);
        let title_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Title Uniform Buffer"),
            contents: bytemuck::cast_slice(&[title_uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let title_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Title Bind Group Layout"),
            entries: &[uniform_entry(0)],
        });
        let title_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Title Bind Group"),
            layout: &title_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: title_uniform_buffer.as_entire_binding(),
            }],
        });
        let title_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Title Pipeline Layout"),
            bind_group_layouts: &[&title_layout],
            push_constant_ranges: &[],
        });
        let title_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Title Pipeline"),
            layout: Some(&title_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &title_shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &title_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Always,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        // Meshes
        let wave = GpuMesh::upload(
            &device,
            &object_layout,
            MeshOwner::Wave,
            &scene.wave.surface.vertices,
            &scene.wave.surface.indices,
            scene.appearance.wave,
        );

        let mut ships = Vec::new();
        for ship in scene.ships.iter() {
            for mesh in &ship.model.meshes {
                ships.push(GpuMesh::upload(
                    &device,
                    &object_layout,
                    MeshOwner::Ship(ship.kind()),
                    &mesh.vertices,
                    &mesh.indices,
                    mesh.base_color,
                ));
            }
        }
        log::info!(
            "Uploaded {} ship meshes and a {}-vertex wave",
            ships.len(),
            scene.wave.surface.vertex_count()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            scene_pipeline,
            scene_uniform_buffer,
            scene_bind_group,
            shadow_pipeline,
            sun_caster,
            point_casters,
            point_shadow_buffer,
            title_pipeline,
            title_uniform_buffer,
            title_bind_group,
            wave,
            ships,
            shadows: params.shadows.clone(),
            title_style: params.title.clone(),
            capture,
            frame_index: 0,
            captured: false,
        })
    }

    /// Whether the requested screenshot has been written
    pub fn capture_done(&self) -> bool {
        self.captured
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, self.config.width, self.config.height);
    }

    /// Push the scene's per-frame state to the GPU
    fn upload(&self, scene: &Scene, title: &TitleState) -> TitleUniforms {
        if scene.wave.surface.is_dirty() {
            self.queue.write_buffer(
                &self.wave.vertex_buffer,
                0,
                bytemuck::cast_slice(&scene.wave.surface.vertices),
            );
        }

        let scene_uniforms = SceneUniforms::from_scene(scene, &self.shadows);
        self.queue.write_buffer(
            &self.scene_uniform_buffer,
            0,
            bytemuck::cast_slice(&[scene_uniforms]),
        );
        self.sun_caster.write(&self.queue, scene_uniforms.light_view_proj);

        let point_shadow = PointShadowUniforms::from_scene(scene, &self.shadows);
        self.queue.write_buffer(
            &self.point_shadow_buffer,
            0,
            bytemuck::cast_slice(&[point_shadow]),
        );
        for (caster, face) in self.point_casters.iter().zip(point_shadow.face_view_proj) {
            caster.write(&self.queue, face);
        }

        self.wave.write_uniforms(
            &self.queue,
            &ObjectUniforms::new(
                scene.wave.object.transform.matrix(),
                scene.appearance.wave,
                scene.wave.receives_shadow,
            ),
        );

        for mesh in &self.ships {
            let model = match mesh.owner {
                MeshOwner::Ship(kind) => scene.ships.get(kind).object.transform.matrix(),
                MeshOwner::Wave => Mat4::IDENTITY,
            };
            mesh.write_uniforms(&self.queue, &ObjectUniforms::new(model, mesh.base_color, false));
        }

        let title_uniforms = TitleUniforms::new(&self.title_style, title, self.config.height);
        self.queue.write_buffer(
            &self.title_uniform_buffer,
            0,
            bytemuck::cast_slice(&[title_uniforms]),
        );
        title_uniforms
    }

    /// Render one frame (and capture it if this is the requested frame)
    fn draw(&mut self, scene: &Scene, title: &TitleState) -> Result<(), wgpu::SurfaceError> {
        let title_uniforms = self.upload(scene, title);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let casters = std::iter::once(&self.sun_caster)
            .filter(|_| scene.directional_light.casts_shadow)
            .chain(
                self.point_casters
                    .iter()
                    .filter(|_| scene.point_light.casts_shadow),
            );
        for caster in casters {
            let mut shadow_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Shadow Pass"),
                color_attachments: &[],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &caster.target,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            shadow_pass.set_pipeline(&self.shadow_pipeline);
            shadow_pass.set_bind_group(0, &caster.bind_group, &[]);
            for mesh in &self.ships {
                if let MeshOwner::Ship(kind) = mesh.owner {
                    if scene.ships.get(kind).casts_shadow {
                        mesh.draw(&mut shadow_pass);
                    }
                }
            }
        }

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(scene.appearance.background.to_wgpu()),
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

            render_pass.set_pipeline(&self.scene_pipeline);
            render_pass.set_bind_group(0, &self.scene_bind_group, &[]);
            self.wave.draw(&mut render_pass);
            for mesh in &self.ships {
                mesh.draw(&mut render_pass);
            }

            if title_uniforms.is_visible() {
                render_pass.set_pipeline(&self.title_pipeline);
                render_pass.set_bind_group(0, &self.title_bind_group, &[]);
                render_pass.draw(0..6, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));

        if let Some(ref capture) = self.capture {
            if !self.captured && self.frame_index >= capture.frame {
                if let Err(e) = capture::save_frame(
                    &self.device,
                    &self.queue,
                    &output.texture,
                    self.config.format,
                    &capture.path,
                ) {
                    log::error!("Screenshot failed: {:#}", e);
                }
                self.captured = true;
            }
        }

        output.present();
        self.frame_index += 1;

        Ok(())
    }
}

impl FrameSink for RenderSystem {
    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.reconfigure();
        }
    }

    fn render(&mut self, scene: &Scene, title: &TitleState) {
        match self.draw(scene, title) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => self.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => log::error!("Render error: out of GPU memory"),
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

/// Depth-only camera for one shadow map (or one layer of the point light's array)
struct ShadowCaster {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    target: wgpu::TextureView,
}

impl ShadowCaster {
    fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        light_view_proj: [[f32; 4]; 4],
        target: wgpu::TextureView,
    ) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Shadow Uniform Buffer", label)),
            contents: bytemuck::cast_slice(&[ShadowUniforms { light_view_proj }]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} Shadow Bind Group", label)),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            uniform_buffer,
            bind_group,
            target,
        }
    }

    fn write(&self, queue: &wgpu::Queue, light_view_proj: [[f32; 4]; 4]) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[ShadowUniforms { light_view_proj }]),
        );
    }
}

fn uniform_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
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
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
