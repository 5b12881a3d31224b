// ============================================
// Game Resources - Общее состояние приложения
// ============================================

use std::sync::Arc;
use std::time::Instant;

use ultraviolet::Vec3;
use winit::window::Window;

use crate::camera::{Camera, CameraController};
use crate::render::Renderer;
use crate::voxel::VoxelMap;

const CAMERA_SPEED: f32 = 1.0;
const MOUSE_SENSITIVITY: f32 = 0.005;

/// Демонстрационный мир: разреженный узор 3x3x3, слои по Z
pub fn demo_world() -> VoxelMap {
    VoxelMap::from_layers(&[
        vec![
            vec![true, false, true],
            vec![false, false, false],
            vec![false, true, false],
        ],
        vec![
            vec![false, false, true],
            vec![false, false, false],
            vec![true, true, true],
        ],
        vec![
            vec![true, false, false],
            vec![true, false, false],
            vec![true, true, true],
        ],
    ])
}

/// Всё состояние игры в одном месте
pub struct GameResources {
    pub window: Option<Arc<Window>>,
    pub renderer: Option<Renderer>,
    pub camera: Camera,
    pub controller: CameraController,
    pub map: VoxelMap,
    pub last_frame: Instant,
}

impl GameResources {
    pub fn new() -> Self {
        Self {
            window: None,
            renderer: None,
            camera: Camera::new(Vec3::new(0.0, 0.0, 2.0)),
            controller: CameraController::new(CAMERA_SPEED, MOUSE_SENSITIVITY),
            map: demo_world(),
            last_frame: Instant::now(),
        }
    }
}

impl Default for GameResources {
    fn default() -> Self {
        Self::new()
    }
}
