// ============================================
// Voxel Map - Сетка занятости
// ============================================
// Плотная 3D-сетка булевых ячеек. Размеры фиксируются при создании,
// порядок осей строгий: [z][y][x] (от него зависят нормали граней
// и порядок обхода в мешере).

/// Воксельная карта: ячейка либо занята, либо пуста
pub struct VoxelMap {
    voxels: Vec<bool>,
    depth: usize,  // ось Z (внешнее измерение)
    height: usize, // ось Y
    width: usize,  // ось X (внутреннее измерение)
}

impl VoxelMap {
    /// Создать карту из вложенных слоёв [z][y][x].
    /// Непрямоугольный вход — нарушение контракта, паника при создании.
    pub fn from_layers(layers: &[Vec<Vec<bool>>]) -> Self {
        let depth = layers.len();
        let height = layers.first().map_or(0, |l| l.len());
        let width = layers
            .first()
            .and_then(|l| l.first())
            .map_or(0, |r| r.len());

        let mut voxels = Vec::with_capacity(depth * height * width);
        for layer in layers {
            assert_eq!(layer.len(), height, "voxel map layers must be rectangular");
            for row in layer {
                assert_eq!(row.len(), width, "voxel map rows must be rectangular");
                voxels.extend_from_slice(row);
            }
        }

        Self { voxels, depth, height, width }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Все три координаты внутри своих диапазонов?
    pub fn is_in_range(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && (x as usize) < self.width
            && y >= 0 && (y as usize) < self.height
            && z >= 0 && (z as usize) < self.depth
    }

    /// Занята ли ячейка. Вне диапазона — всегда false ("воздух" за краем
    /// мира), это штатный результат, а не ошибка.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> bool {
        if !self.is_in_range(x, y, z) {
            return false;
        }
        self.voxels[(z as usize * self.height + y as usize) * self.width + x as usize]
    }
}
