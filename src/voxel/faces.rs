// ============================================
// Face Table - Таблица граней куба
// ============================================
// Шесть ориентаций грани единичного куба: нормаль наружу и 4 угла.
// Таблица — чистая геометрия, считается один раз и не зависит от
// конкретной карты.

use std::f32::consts::{FRAC_PI_2, PI};
use std::sync::OnceLock;

use ultraviolet::{Mat4, Vec3};

/// Одна ориентация грани: нормаль и 4 угла в смещениях от ячейки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRotation {
    pub normal: [i32; 3],
    pub corners: [[i32; 3]; 4],
}

/// Каноническая грань +X единичного куба. Порядок углов фиксирован:
/// от него зависит порядок обмотки треугольников в мешере.
fn template_face() -> [Vec3; 4] {
    [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, 0.0, 1.0),
    ]
}

/// Округление до ближайшего целого покомпонентно.
/// Именно округление, а не отбрасывание: после поворота координаты
/// несут погрешность float и обязаны схлопнуться ровно в {0, 1},
/// иначе сварка вершин развалится.
fn round_to_grid(v: Vec3) -> [i32; 3] {
    [
        v.x.round() as i32,
        v.y.round() as i32,
        v.z.round() as i32,
    ]
}

fn build_face_rotations() -> [FaceRotation; 6] {
    // Шесть поворотов, переводящих грань +X во все 6 осевых направлений
    // ровно по одному разу
    let rotations = [
        Mat4::identity(),
        Mat4::from_rotation_y(FRAC_PI_2),
        Mat4::from_rotation_y(PI),
        Mat4::from_rotation_y(-FRAC_PI_2),
        Mat4::from_rotation_z(FRAC_PI_2),
        Mat4::from_rotation_z(-FRAC_PI_2),
    ];

    rotations.map(|rotation| {
        // Куб вращается вокруг своего центра: центр в ноль -> поворот -> обратно
        let matrix = Mat4::from_translation(Vec3::broadcast(0.5))
            * rotation
            * Mat4::from_translation(Vec3::broadcast(-0.5));

        let normal = round_to_grid(rotation.transform_vec3(Vec3::unit_x()));
        let mut corners = [[0i32; 3]; 4];
        for (corner, template) in corners.iter_mut().zip(template_face()) {
            *corner = round_to_grid(matrix.transform_point3(template));
        }

        FaceRotation { normal, corners }
    })
}

static FACE_ROTATIONS: OnceLock<[FaceRotation; 6]> = OnceLock::new();

/// Таблица шести ориентаций грани (инициализация при первом обращении)
pub fn face_rotations() -> &'static [FaceRotation; 6] {
    FACE_ROTATIONS.get_or_init(build_face_rotations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_unique_axis_normals() {
        let mut normals: Vec<[i32; 3]> = face_rotations().iter().map(|f| f.normal).collect();
        normals.sort();
        let mut expected = vec![
            [1, 0, 0], [-1, 0, 0],
            [0, 1, 0], [0, -1, 0],
            [0, 0, 1], [0, 0, -1],
        ];
        expected.sort();
        assert_eq!(normals, expected);
    }

    #[test]
    fn test_corners_snap_to_unit_cube() {
        for face in face_rotations() {
            for corner in &face.corners {
                for &c in corner {
                    assert!(c == 0 || c == 1, "corner {:?} outside {{0,1}}", corner);
                }
            }
        }
    }

    #[test]
    fn test_corners_lie_on_face_plane() {
        // Все 4 угла грани лежат в плоскости, перпендикулярной нормали:
        // на стороне куба, куда нормаль и смотрит
        for face in face_rotations() {
            let axis = face.normal.iter().position(|&n| n != 0).unwrap();
            let expected = if face.normal[axis] > 0 { 1 } else { 0 };
            for corner in &face.corners {
                assert_eq!(corner[axis], expected, "face {:?}", face.normal);
            }
        }
    }

    #[test]
    fn test_each_face_has_four_distinct_corners() {
        for face in face_rotations() {
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(face.corners[i], face.corners[j]);
                }
            }
        }
    }
}
