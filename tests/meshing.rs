// ============================================
// Meshing - Сквозные проверки мешера
// ============================================

use std::collections::HashMap;

use kubik::core::resources::demo_world;
use kubik::voxel::{face_rotations, generate_mesh, VoxelMap};

/// Независимый грубый подсчёт видимых граней: для каждой занятой
/// ячейки и каждого из 6 направлений грань видима, если сосед пуст
/// или за краем карты.
fn brute_force_visible_faces(map: &VoxelMap) -> usize {
    let mut count = 0;
    for z in 0..map.depth() as i32 {
        for y in 0..map.height() as i32 {
            for x in 0..map.width() as i32 {
                if !map.get(x, y, z) {
                    continue;
                }
                for face in face_rotations() {
                    let [nx, ny, nz] = face.normal;
                    if !map.get(x + nx, y + ny, z + nz) {
                        count += 1;
                    }
                }
            }
        }
    }
    count
}

#[test]
fn test_demo_world_index_count_matches_brute_force() {
    let map = demo_world();
    let mesh = generate_mesh(&map);
    let visible = brute_force_visible_faces(&map);
    assert!(visible > 0);
    assert_eq!(mesh.indices.len(), visible * 6);
}

#[test]
fn test_demo_world_welding_is_global() {
    // Любая позиция встречается в списке вершин ровно один раз,
    // какой бы паре вокселей её грани ни принадлежали
    let mesh = generate_mesh(&demo_world());
    let mut seen: HashMap<[i32; 3], usize> = HashMap::new();
    for (index, vertex) in mesh.vertices.iter().enumerate() {
        let key = [
            vertex.position[0] as i32,
            vertex.position[1] as i32,
            vertex.position[2] as i32,
        ];
        if let Some(&previous) = seen.get(&key) {
            panic!("position {:?} got indices {} and {}", key, previous, index);
        }
        seen.insert(key, index);
    }
}

#[test]
fn test_fully_enclosed_voxel_emits_nothing_for_center() {
    // Куб 3x3x3 целиком занят: у центральной ячейки все 6 соседей
    // заняты, видимых граней у неё нет, наружу смотрят только 54
    // грани внешнего слоя
    let solid = VoxelMap::from_layers(&vec![
        vec![vec![true; 3]; 3],
        vec![vec![true; 3]; 3],
        vec![vec![true; 3]; 3],
    ]);
    let mesh = generate_mesh(&solid);
    assert_eq!(mesh.indices.len(), 54 * 6);
    // Вершины сварены по всей поверхности: 4x4x4 решётка минус
    // 8 внутренних узлов, которых не касается ни одна видимая грань
    assert_eq!(mesh.vertices.len(), 64 - 8);
}

#[test]
fn test_vertical_pair_occludes_shared_face() {
    // Два вокселя друг на друге (соседство по Y)
    let map = VoxelMap::from_layers(&[vec![vec![true], vec![true]]]);
    let mesh = generate_mesh(&map);
    assert_eq!(mesh.indices.len(), 10 * 6);
    assert_eq!(mesh.vertices.len(), 12);
}

#[test]
fn test_diagonal_voxels_share_welded_corner() {
    // Диагональные воксели (0,0,0) и (1,1,1) общих граней не имеют,
    // но угол (1,1,1) у них общий — индекс обязан совпасть
    let map = VoxelMap::from_layers(&[
        vec![vec![true, false], vec![false, false]],
        vec![vec![false, false], vec![false, true]],
    ]);
    let mesh = generate_mesh(&map);
    assert_eq!(mesh.indices.len(), 12 * 6);
    // 8 + 8 углов минус общая вершина (1,1,1)
    assert_eq!(mesh.vertices.len(), 15);
}
