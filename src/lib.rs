// ============================================
// kubik - Минимальный воксельный рендерер
// ============================================
// Сетка занятости -> мешер (culling граней + сварка вершин) ->
// GPU-буферы -> кадр с камерой от первого лица.

pub mod camera;
pub mod core;
pub mod render;
pub mod voxel;
