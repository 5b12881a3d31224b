// ============================================
// Mesher - Генерация меша из воксельной карты
// ============================================
// Видимые грани (culling по соседям) + сварка вершин: общие углы
// соседних граней получают один индекс, а не четыре дубликата.

use std::collections::HashMap;

use super::faces::face_rotations;
use super::map::VoxelMap;
use super::vertex::MapVertex;

/// Результат мешинга: уникальные вершины + индексы треугольников.
/// Каждые 6 индексов — один видимый квад (два треугольника с общей
/// диагональю).
pub struct MapMesh {
    pub vertices: Vec<MapVertex>,
    pub indices: Vec<u32>,
}

/// Построить меш карты. Операция чистая и детерминированная:
/// одинаковая карта даёт побайтово одинаковый результат.
pub fn generate_mesh(map: &VoxelMap) -> MapMesh {
    // Позиция -> индекс вершины. Порядок вставки держим отдельным
    // списком: HashMap не гарантирует порядок обхода.
    let mut vertex_ids: HashMap<[i32; 3], u32> = HashMap::new();
    let mut positions: Vec<[i32; 3]> = Vec::new();
    let mut next_index: u32 = 0;
    let mut indices: Vec<u32> = Vec::new();

    for z in 0..map.depth() as i32 {
        for y in 0..map.height() as i32 {
            for x in 0..map.width() as i32 {
                if !map.get(x, y, z) {
                    continue;
                }

                for face in face_rotations() {
                    let [nx, ny, nz] = face.normal;
                    if map.get(x + nx, y + ny, z + nz) {
                        // Грань закрыта соседним вокселем
                        continue;
                    }

                    let mut quad = [0u32; 4];
                    for (slot, corner) in quad.iter_mut().zip(face.corners) {
                        let pos = [x + corner[0], y + corner[1], z + corner[2]];
                        *slot = *vertex_ids.entry(pos).or_insert_with(|| {
                            positions.push(pos);
                            let id = next_index;
                            next_index += 1;
                            id
                        });
                    }

                    // Два треугольника (a,b,d) и (b,c,d); обмотка корректна
                    // благодаря фиксированному порядку углов в таблице граней
                    let [a, b, c, d] = quad;
                    indices.extend_from_slice(&[a, b, d, b, c, d]);
                }
            }
        }
    }

    let vertices = positions.into_iter().map(MapVertex::at_grid).collect();
    MapMesh { vertices, indices }
}
