// ============================================
// Map Vertex - Вершина меша карты
// ============================================

use bytemuck::{Pod, Zeroable};

/// Вершина меша карты. Мешер заполняет только позицию,
/// текстурные координаты остаются нулевыми.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MapVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl MapVertex {
    #[inline]
    pub fn new(position: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Self { position, tex_coords }
    }

    /// Вершина по целочисленной позиции сетки, UV по умолчанию
    #[inline]
    pub fn at_grid(position: [i32; 3]) -> Self {
        Self::new(
            [position[0] as f32, position[1] as f32, position[2] as f32],
            [0.0, 0.0],
        )
    }
}
