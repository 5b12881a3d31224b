// ============================================
// Voxel Module - Воксельная карта и мешинг
// ============================================

pub mod faces;
pub mod map;
pub mod mesher;
pub mod vertex;

pub use faces::{face_rotations, FaceRotation};
pub use map::VoxelMap;
pub use mesher::{generate_mesh, MapMesh};
pub use vertex::MapVertex;
