//! WebGPU output for the scene triangle list
//!
//! One vertex buffer sized for [`scene::MAX_VERTICES`] lives as long as the
//! renderer and is rewritten in place every frame.

use super::scene;
use super::vertex::{Vertex, colors};

/// Main render state
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    /// Vertices the buffer can hold
    vertex_capacity: usize,
    vertex_count: u32,
    /// Reused NDC copy of the frame's vertices
    staging: Vec<Vertex>,
    /// Surface size in physical pixels
    pub size: (u32, u32),
    /// Canvas size in the simulation's (CSS) pixels
    pub logical_size: (f32, f32),
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        logical_size: (f32, f32),
    ) -> Self {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("nbl-sim-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await
            .expect("Failed to create device");

        let config = surface_config(&surface, adapter, width, height);
        surface.configure(&device, &config);

        let pipeline = scene_pipeline(&device, config.format);
        let vertex_buffer = vertex_buffer(&device, scene::MAX_VERTICES);

        Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            vertex_capacity: scene::MAX_VERTICES,
            vertex_count: 0,
            staging: Vec::with_capacity(scene::MAX_VERTICES),
            size: (width, height),
            logical_size,
        }
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32, logical_size: (f32, f32)) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.logical_size = logical_size;
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Convert the frame to NDC and write it over the previous one
    fn upload(&mut self, vertices: &[Vertex]) {
        let (w, h) = self.logical_size;
        self.staging.clear();
        self.staging.extend(
            vertices
                .iter()
                .map(|v| Vertex {
                    position: pixel_to_ndc(v.position, w, h),
                    color: v.color,
                }),
        );

        if self.staging.len() > self.vertex_capacity {
            log::debug!(
                "Growing vertex buffer {} -> {}",
                self.vertex_capacity,
                self.staging.len()
            );
            self.vertex_capacity = self.staging.len();
            self.vertex_buffer = vertex_buffer(&self.device, self.vertex_capacity);
        }

        if !self.staging.is_empty() {
            self.queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.staging));
        }
        self.vertex_count = self.staging.len() as u32;
    }

    /// Draw one frame of canvas-pixel vertices
    pub fn render(&mut self, vertices: &[Vertex]) -> Result<(), wgpu::SurfaceError> {
        self.upload(vertices);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scene_encoder"),
            });

        {
            let [r, g, b, a] = colors::BACKGROUND.map(f64::from);
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if self.vertex_count > 0 {
                pass.set_pipeline(&self.pipeline);
                pass.set_vertex_buffer(
                    0,
                    self.vertex_buffer
                        .slice(..buffer_size(self.vertex_count as usize)),
                );
                pass.draw(0..self.vertex_count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();

        Ok(())
    }
}

/// sRGB surface if the adapter offers one, vsync, WebGL2-compatible
fn surface_config(
    surface: &wgpu::Surface<'static>,
    adapter: &wgpu::Adapter,
    width: u32,
    height: u32,
) -> wgpu::SurfaceConfiguration {
    let caps = surface.get_capabilities(adapter);
    let format = caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .unwrap_or(caps.formats[0]);

    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width,
        height,
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode: caps.alpha_modes[0],
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    }
}

/// Flat-colored, alpha-blended triangle list
fn scene_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("scene_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        // Shapes are not consistently wound, so no culling
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

fn vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_vertices"),
        size: buffer_size(capacity),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Byte length of `count` vertices
fn buffer_size(count: usize) -> wgpu::BufferAddress {
    (count * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress
}

/// Convert canvas pixels (origin top-left, y down) to normalized device
/// coordinates (origin center, y up)
pub fn pixel_to_ndc(pos: [f32; 2], width: f32, height: f32) -> [f32; 2] {
    if width <= 0.0 || height <= 0.0 {
        return [0.0, 0.0];
    }
    [pos[0] / width * 2.0 - 1.0, 1.0 - pos[1] / height * 2.0]
}
