// ============================================
// Renderer - Инициализация GPU и кадр
// ============================================

use std::sync::Arc;

use ultraviolet::Mat4;

use crate::camera::Camera;
use crate::voxel::{generate_mesh, VoxelMap};

use super::depth::create_depth_texture;
use super::mesh::GpuMesh;
use super::resources::read_resource;
use super::shader::Shader;
use super::vertex_format::map_vertex_format;

/// Вертикальный угол обзора (как в оригинальной сцене)
const FOV: f32 = std::f32::consts::FRAC_PI_2 * 0.7;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

const SKY_COLOR: wgpu::Color = wgpu::Color {
    r: 0.12,
    g: 0.15,
    b: 0.22,
    a: 1.0,
};

/// Инициализация GPU устройства и surface
async fn init_gpu(
    window: Arc<winit::window::Window>,
) -> (
    wgpu::Surface<'static>,
    Arc<wgpu::Device>,
    Arc<wgpu::Queue>,
    wgpu::SurfaceConfiguration,
) {
    let size = window.inner_size();
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });

    let surface = instance.create_surface(window).unwrap();
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .unwrap();

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("GPU Device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: Default::default(),
            trace: wgpu::Trace::Off,
        })
        .await
        .unwrap();

    let device = Arc::new(device);
    let queue = Arc::new(queue);

    let surface_caps = surface.get_capabilities(&adapter);
    let surface_format = surface_caps
        .formats
        .iter()
        .find(|f| f.is_srgb())
        .copied()
        .unwrap_or(surface_caps.formats[0]);

    let config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format: surface_format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode: surface_caps.alpha_modes[0],
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);

    (surface, device, queue, config)
}

/// Рендерер: владеет GPU-ресурсами, раз в кадр рисует меш карты
pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: wgpu::TextureView,
    shader: Shader,
    map_mesh: GpuMesh,
}

impl Renderer {
    pub fn new(window: Arc<winit::window::Window>, map: &VoxelMap) -> Self {
        let (surface, device, queue, config) = pollster::block_on(init_gpu(window));
        let depth_texture = create_depth_texture(&device, &config);

        // Меш строится один раз до первого кадра
        let mesh = generate_mesh(map);
        log::info!(
            "Map mesh: {} vertices, {} indices ({} faces)",
            mesh.vertices.len(),
            mesh.indices.len(),
            mesh.indices.len() / 6
        );
        let map_mesh = GpuMesh::new(&device, map_vertex_format(), &mesh.vertices, &mesh.indices);

        let shader = Shader::new(
            &device,
            config.format,
            map_vertex_format(),
            read_resource("shaders.default.vert"),
            read_resource("shaders.default.frag"),
        );

        let renderer = Self {
            surface,
            device,
            queue,
            config,
            depth_texture,
            shader,
            map_mesh,
        };

        // transform и projection достаточно задать один раз,
        // projection обновляется только при ресайзе
        renderer.shader.send_mat4(&renderer.queue, "transform", Mat4::identity());
        renderer.send_projection();
        renderer
    }

    fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height as f32
    }

    fn send_projection(&self) {
        let projection =
            ultraviolet::projection::perspective_wgpu_dx(FOV, self.aspect(), Z_NEAR, Z_FAR);
        self.shader.send_mat4(&self.queue, "projection", projection);
    }

    pub fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture = create_depth_texture(&self.device, &self.config);
        self.send_projection();
    }

    pub fn render(&mut self, camera: &Camera) {
        self.shader.send_mat4(&self.queue, "view", camera.view_matrix());

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(wgpu::SurfaceError::Timeout) => return,
            Err(e) => panic!("Failed to acquire frame: {e}"),
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(SKY_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut current_shader = None;
            self.shader.bind(&mut pass, &mut current_shader);
            self.map_mesh.draw(&mut pass);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
    }
}
