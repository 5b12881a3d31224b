// ============================================
// GPU Mesh - Буферы меша на GPU
// ============================================

use wgpu::util::DeviceExt;

use super::vertex_format::VertexFormat;

/// Вершинный и индексный буферы одного меша
pub struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    /// Загрузить меш на GPU. Ширина строки вершины обязана совпадать
    /// с объявленным форматом — иначе это нарушение контракта.
    pub fn new<V: bytemuck::Pod>(
        device: &wgpu::Device,
        format: &VertexFormat,
        vertices: &[V],
        indices: &[u32],
    ) -> Self {
        assert_eq!(
            std::mem::size_of::<V>() as u64,
            format.stride(),
            "Number of components in vertex array doesn't match the vertex format"
        );

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertices"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Indices"),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
