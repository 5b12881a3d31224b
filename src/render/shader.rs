// ============================================
// Shader - Шейдерная программа
// ============================================
// Пара GLSL-исходников (вершинный + фрагментный) компилируется в
// пайплайн. Препроцессор подставляет версию и константы слотов
// атрибутов, так что текст шейдера не привязан к раскладке вершин.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use ultraviolet::Mat4;

use super::vertex_format::{VertexAttribute, VertexFormat};

const VERSION_DIRECTIVE: &str = "#version 450";

/// Раскладка uniform-блока Globals (std140, mat4 по 64 байта)
const GLOBALS_LAYOUT: &[(&str, u64)] = &[("view", 0), ("projection", 64), ("transform", 128)];
const GLOBALS_SIZE: u64 = 192;

static NEXT_SHADER_ID: AtomicUsize = AtomicUsize::new(1);

/// Подготовка исходника: версия, константы слотов атрибутов, #line 1,
/// затем сам код с вычищенной дублирующей директивой версии.
pub fn preprocess_shader_code(code: &str) -> String {
    let mut out = String::new();
    out.push_str(VERSION_DIRECTIVE);
    out.push('\n');
    for attribute in VertexAttribute::ALL {
        out.push_str(&format!(
            "#define {} {}\n",
            attribute.define_name(),
            attribute.location()
        ));
    }
    out.push_str("#line 1\n");
    for line in code.lines() {
        // Свою директиву версии вызывающий мог оставить — убираем её,
        // сохраняя нумерацию строк
        if !line.trim_start().starts_with("#version") {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

/// Скомпилированная программа: пайплайн + uniform-буфер Globals
pub struct Shader {
    id: usize,
    pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    uniform_offsets: HashMap<&'static str, u64>,
}

/// Компиляция одной стадии. Ошибка компиляции фатальна и
/// поднимается сразу вместе с диагностикой драйвера.
fn compile_stage(
    device: &wgpu::Device,
    label: &str,
    code: &str,
    stage: wgpu::naga::ShaderStage,
) -> wgpu::ShaderModule {
    let code = preprocess_shader_code(code);
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Glsl {
            shader: code.into(),
            stage,
            defines: Default::default(),
        },
    });
    if let Some(error) = pollster::block_on(device.pop_error_scope()) {
        panic!("{label} failed to compile: {error}");
    }
    module
}

impl Shader {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        vertex_format: &VertexFormat,
        vertex_code: &str,
        fragment_code: &str,
    ) -> Self {
        let vertex_module = compile_stage(
            device,
            "Vertex Shader",
            vertex_code,
            wgpu::naga::ShaderStage::Vertex,
        );
        let fragment_module = compile_stage(
            device,
            "Fragment Shader",
            fragment_code,
            wgpu::naga::ShaderStage::Fragment,
        );

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Globals Buffer"),
            size: GLOBALS_SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Globals Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Globals Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Shader Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shader Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex_module,
                entry_point: Some("main"),
                buffers: &[vertex_format.layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment_module,
                entry_point: Some("main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            id: NEXT_SHADER_ID.fetch_add(1, Ordering::Relaxed),
            pipeline,
            globals_buffer,
            bind_group,
            uniform_offsets: GLOBALS_LAYOUT.iter().copied().collect(),
        }
    }

    /// Записать матрицу 4x4 по имени uniform-а.
    /// Неизвестное имя — нарушение контракта.
    pub fn send_mat4(&self, queue: &wgpu::Queue, uniform: &str, matrix: Mat4) {
        let offset = *self
            .uniform_offsets
            .get(uniform)
            .unwrap_or_else(|| panic!("Unknown uniform: '{uniform}'"));
        let columns: [[f32; 4]; 4] = matrix.into();
        queue.write_buffer(&self.globals_buffer, offset, bytemuck::bytes_of(&columns));
    }

    /// Сделать программу текущей в пассе. Если она уже текущая —
    /// ничего не делаем, лишние смены состояния ни к чему.
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>, current: &mut Option<usize>) {
        if *current == Some(self.id) {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        *current = Some(self.id);
    }
}
