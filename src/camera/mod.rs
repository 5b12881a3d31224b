// ============================================
// Camera - Камера от первого лица
// ============================================
// Позиция + два угла поворота (без крена). Камера ничего не знает
// о вводе: углы и позицию ей двигает контроллер раз в кадр. Никаких
// ограничений на углы — заворачивание значений остаётся на совести
// вызывающего.

use ultraviolet::{Mat4, Vec3};
use winit::keyboard::KeyCode;

/// Камера: позиция и углы поворота в радианах
pub struct Camera {
    pub position: Vec3,
    pub rotation_x: f32,
    pub rotation_y: f32,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }

    /// Матрица вида (world -> camera): композиция поворот X, поворот Y,
    /// перенос даёт camera -> world, затем инверсия.
    pub fn view_matrix(&self) -> Mat4 {
        let camera_to_world = Mat4::from_translation(self.position)
            * Mat4::from_rotation_y(self.rotation_y)
            * Mat4::from_rotation_x(self.rotation_x);
        // Поворот + перенос вырожденными не бывают; если определитель
        // всё же нулевой — нарушено предусловие, дальше ехать нельзя
        assert!(
            camera_to_world.determinant().abs() > f32::EPSILON,
            "camera transform is singular"
        );
        camera_to_world.inversed()
    }
}

/// Контроллер камеры (WASD + мышь)
pub struct CameraController {
    pub speed: f32,
    pub sensitivity: f32,

    // Состояние клавиш
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    up: bool,
    down: bool,

    // Накопленная дельта мыши за кадр
    mouse_dx: f32,
    mouse_dy: f32,
}

impl CameraController {
    pub fn new(speed: f32, sensitivity: f32) -> Self {
        Self {
            speed,
            sensitivity,
            forward: false,
            backward: false,
            left: false,
            right: false,
            up: false,
            down: false,
            mouse_dx: 0.0,
            mouse_dy: 0.0,
        }
    }

    pub fn process_keyboard(&mut self, key: KeyCode, pressed: bool) {
        match key {
            KeyCode::KeyW => self.forward = pressed,
            KeyCode::KeyS => self.backward = pressed,
            KeyCode::KeyA => self.left = pressed,
            KeyCode::KeyD => self.right = pressed,
            KeyCode::Space => self.up = pressed,
            KeyCode::ControlLeft => self.down = pressed,
            _ => {}
        }
    }

    pub fn process_mouse(&mut self, dx: f64, dy: f64) {
        self.mouse_dx += dx as f32;
        self.mouse_dy += dy as f32;
    }

    pub fn update_camera(&mut self, camera: &mut Camera, dt: f32) {
        // Горизонтальное движение в плоскости взгляда (поворот вокруг Y)
        let mut movement = Vec3::zero();
        if self.forward {
            movement.z -= 1.0;
        } else if self.backward {
            movement.z += 1.0;
        }
        if self.right {
            movement.x += 1.0;
        } else if self.left {
            movement.x -= 1.0;
        }
        movement = Mat4::from_rotation_y(camera.rotation_y).transform_vec3(movement);

        // Вертикаль не поворачивается
        if self.up {
            movement.y += 1.0;
        } else if self.down {
            movement.y -= 1.0;
        }

        camera.position += movement * self.speed * dt;

        camera.rotation_y -= self.mouse_dx * self.sensitivity;
        camera.rotation_x -= self.mouse_dy * self.sensitivity;
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_vec3_near(a: Vec3, b: Vec3) {
        assert!((a - b).mag() < 1e-4, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_view_at_origin_is_identity() {
        let camera = Camera::new(Vec3::zero());
        let view: [[f32; 4]; 4] = camera.view_matrix().into();
        let identity: [[f32; 4]; 4] = Mat4::identity().into();
        for (col, id_col) in view.iter().zip(identity) {
            for (v, i) in col.iter().zip(id_col) {
                assert!((v - i).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_view_moves_camera_to_origin() {
        let mut camera = Camera::new(Vec3::new(3.0, -2.0, 5.0));
        camera.rotation_x = 0.4;
        camera.rotation_y = -1.2;
        let view = camera.view_matrix();
        assert_vec3_near(view.transform_point3(camera.position), Vec3::zero());
    }

    #[test]
    fn test_view_inverts_rotation() {
        let mut camera = Camera::new(Vec3::zero());
        camera.rotation_y = FRAC_PI_2;
        let view = camera.view_matrix();
        // Камера повёрнута на 90° влево: мировой -X оказывается прямо
        // перед ней (локальный -Z)
        assert_vec3_near(
            view.transform_point3(Vec3::new(-1.0, 0.0, 0.0)),
            Vec3::new(0.0, 0.0, -1.0),
        );
    }

    #[test]
    fn test_controller_moves_relative_to_yaw() {
        let mut camera = Camera::new(Vec3::zero());
        camera.rotation_y = FRAC_PI_2;
        let mut controller = CameraController::new(1.0, 0.005);
        controller.process_keyboard(KeyCode::KeyW, true);
        controller.update_camera(&mut camera, 1.0);
        // "Вперёд" при повороте на 90° влево — это мировой -X
        assert_vec3_near(camera.position, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_mouse_deltas_consumed_once() {
        let mut camera = Camera::new(Vec3::zero());
        let mut controller = CameraController::new(1.0, 0.005);
        controller.process_mouse(10.0, -4.0);
        controller.update_camera(&mut camera, 0.016);
        let rotation_after_first = (camera.rotation_x, camera.rotation_y);
        assert!(rotation_after_first.0 != 0.0 && rotation_after_first.1 != 0.0);

        controller.update_camera(&mut camera, 0.016);
        assert_eq!((camera.rotation_x, camera.rotation_y), rotation_after_first);
    }

    #[test]
    fn test_vertical_movement_ignores_yaw() {
        let mut camera = Camera::new(Vec3::zero());
        camera.rotation_y = 1.3;
        let mut controller = CameraController::new(2.0, 0.005);
        controller.process_keyboard(KeyCode::Space, true);
        controller.update_camera(&mut camera, 0.5);
        assert_vec3_near(camera.position, Vec3::new(0.0, 1.0, 0.0));
    }
}
