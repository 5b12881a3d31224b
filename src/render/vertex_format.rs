// ============================================
// Vertex Format - Описание раскладки вершин
// ============================================
// Атрибуты привязаны к фиксированным слотам; шейдеры ссылаются на
// слоты по символическим именам (см. preprocess_shader_code), поэтому
// текст шейдера не зависит от конкретной раскладки.

use std::sync::OnceLock;

/// Семантический атрибут вершины и его слот
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexAttribute {
    Position = 0,
    TexCoords = 1,
}

impl VertexAttribute {
    pub const ALL: [VertexAttribute; 2] = [VertexAttribute::Position, VertexAttribute::TexCoords];

    #[inline]
    pub fn location(self) -> u32 {
        self as u32
    }

    /// Имя константы, которую препроцессор подставляет в шейдер
    pub fn define_name(self) -> &'static str {
        match self {
            VertexAttribute::Position => "ATTRIBUTE_LOCATION_POSITION",
            VertexAttribute::TexCoords => "ATTRIBUTE_LOCATION_TEX_COORDS",
        }
    }
}

/// Атрибут + число f32-компонент
#[derive(Debug, Clone, Copy)]
pub struct AttributeDefinition {
    pub attribute: VertexAttribute,
    pub size: u32,
}

impl AttributeDefinition {
    pub fn new(attribute: VertexAttribute, size: u32) -> Self {
        Self { attribute, size }
    }
}

/// Упорядоченный список атрибутов вершины
pub struct VertexFormat {
    pub attributes: Vec<AttributeDefinition>,
    wgpu_attributes: Vec<wgpu::VertexAttribute>,
}

impl VertexFormat {
    pub fn new(attributes: Vec<AttributeDefinition>) -> Self {
        let mut wgpu_attributes = Vec::with_capacity(attributes.len());
        let mut offset: u64 = 0;
        for def in &attributes {
            let format = match def.size {
                1 => wgpu::VertexFormat::Float32,
                2 => wgpu::VertexFormat::Float32x2,
                3 => wgpu::VertexFormat::Float32x3,
                4 => wgpu::VertexFormat::Float32x4,
                n => panic!("unsupported attribute component count: {n}"),
            };
            wgpu_attributes.push(wgpu::VertexAttribute {
                format,
                offset,
                shader_location: def.attribute.location(),
            });
            offset += def.size as u64 * std::mem::size_of::<f32>() as u64;
        }
        Self { attributes, wgpu_attributes }
    }

    /// Суммарное число f32-компонент на вершину
    pub fn num_components(&self) -> u32 {
        self.attributes.iter().map(|a| a.size).sum()
    }

    /// Шаг между вершинами в байтах
    pub fn stride(&self) -> u64 {
        self.num_components() as u64 * std::mem::size_of::<f32>() as u64
    }

    pub fn layout(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride(),
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &self.wgpu_attributes,
        }
    }
}

static MAP_VERTEX_FORMAT: OnceLock<VertexFormat> = OnceLock::new();

/// Формат вершин меша карты: позиция (3) + текстурные координаты (2)
pub fn map_vertex_format() -> &'static VertexFormat {
    MAP_VERTEX_FORMAT.get_or_init(|| {
        VertexFormat::new(vec![
            AttributeDefinition::new(VertexAttribute::Position, 3),
            AttributeDefinition::new(VertexAttribute::TexCoords, 2),
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::MapVertex;

    #[test]
    fn test_map_format_components_and_stride() {
        let format = map_vertex_format();
        assert_eq!(format.num_components(), 5);
        assert_eq!(format.stride(), 20);
        assert_eq!(format.stride() as usize, std::mem::size_of::<MapVertex>());
    }

    #[test]
    fn test_layout_locations_and_offsets() {
        let format = map_vertex_format();
        let layout = format.layout();
        assert_eq!(layout.array_stride, 20);
        assert_eq!(layout.attributes.len(), 2);

        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);

        assert_eq!(layout.attributes[1].shader_location, 1);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[1].format, wgpu::VertexFormat::Float32x2);
    }

    #[test]
    #[should_panic(expected = "unsupported attribute component count")]
    fn test_invalid_component_count_panics() {
        VertexFormat::new(vec![AttributeDefinition::new(VertexAttribute::Position, 5)]);
    }
}
