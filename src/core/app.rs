// ============================================
// App - Главный обработчик приложения
// ============================================
// Классический immediate-mode цикл: ввод -> камера -> кадр,
// всё последовательно в одном потоке.

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::render::Renderer;

use super::resources::GameResources;

/// Главное приложение
pub struct App {
    resources: GameResources,
}

impl App {
    pub fn new() -> Self {
        Self {
            resources: GameResources::new(),
        }
    }

    fn grab_cursor(window: &Window, grab: bool) {
        let mode = if grab {
            CursorGrabMode::Locked
        } else {
            CursorGrabMode::None
        };
        if window.set_cursor_grab(mode).is_err() && grab {
            // Locked поддерживается не везде
            let _ = window.set_cursor_grab(CursorGrabMode::Confined);
        }
        window.set_cursor_visible(!grab);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.resources.window.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title("Voxel Map")
                .with_inner_size(winit::dpi::LogicalSize::new(800, 600));

            let window = Arc::new(event_loop.create_window(window_attrs).unwrap());

            self.resources.renderer = Some(Renderer::new(Arc::clone(&window), &self.resources.map));
            Self::grab_cursor(&window, true);

            self.resources.window = Some(window);
            self.resources.last_frame = Instant::now();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.resources.renderer {
                    renderer.resize(physical_size);
                }
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(keycode),
                        state,
                        ..
                    },
                ..
            } => {
                let pressed = state == ElementState::Pressed;
                if keycode == KeyCode::Escape && pressed {
                    event_loop.exit();
                    return;
                }
                self.resources.controller.process_keyboard(keycode, pressed);
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = (now - self.resources.last_frame).as_secs_f32();
                self.resources.last_frame = now;

                self.resources
                    .controller
                    .update_camera(&mut self.resources.camera, dt);

                if let Some(renderer) = &mut self.resources.renderer {
                    renderer.render(&self.resources.camera);
                }

                if let Some(window) = &self.resources.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.resources.controller.process_mouse(delta.0, delta.1);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.resources.window {
            window.request_redraw();
        }
    }
}

/// Запуск приложения
pub fn run() {
    env_logger::init();

    log::info!("=== Controls ===");
    log::info!("WASD - Move");
    log::info!("Mouse - Look around");
    log::info!("Space / LCtrl - Up / Down");
    log::info!("Escape - Quit");
    log::info!("================");

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).unwrap();
}
