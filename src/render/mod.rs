// ============================================
// Render Module - GPU-привязка
// ============================================
// Тонкий слой над wgpu: мешер и камера ничего о нём не знают,
// через границу ходят только плоские данные вершин/индексов и матрицы.

pub mod depth;
pub mod mesh;
pub mod renderer;
pub mod resources;
pub mod shader;
pub mod vertex_format;

pub use mesh::GpuMesh;
pub use renderer::Renderer;
pub use shader::Shader;
pub use vertex_format::{map_vertex_format, AttributeDefinition, VertexAttribute, VertexFormat};
