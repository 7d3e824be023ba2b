//! Player application implementing winit ApplicationHandler
//!
//! Opens a window, routes keyboard and mouse into the input tracker and the
//! follow camera, and ticks the character once per redraw. Drawing the scene
//! is left to the render backend; the window title shows the character state.

use crate::key_display::KeyDisplay;
use hearth_character::{CharacterController, FollowCamera};
use hearth_core::Vec3;
use hearth_runtime::{key_identifier, FrameDriver, FrameStatus, InputState};
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

/// Radians of orbit per pixel of horizontal drag
const ORBIT_SENSITIVITY: f64 = 0.005;

pub struct PlayerApp {
    pub controller: CharacterController,
    pub input: InputState,
    pub camera: FollowCamera,
    pub driver: FrameDriver,
    key_display: KeyDisplay,

    window: Option<Arc<Window>>,
    dragging: bool,
    last_cursor_x: Option<f64>,
    last_title: String,
}

impl PlayerApp {
    pub fn new(controller: CharacterController) -> Self {
        let mut input = InputState::new();
        input.set_run_key(&controller.config().keys.run_toggle);

        let target = controller.actor().position + Vec3::UP;
        let behind = controller.actor().forward() * -5.0 + Vec3::new(0.0, 2.0, 0.0);
        let mut driver = FrameDriver::default();
        driver.clock.max_delta = controller.config().max_frame_delta as f64;

        Self {
            controller,
            input,
            camera: FollowCamera::new(target, behind),
            driver,
            key_display: KeyDisplay::new(),
            window: None,
            dragging: false,
            last_cursor_x: None,
            last_title: String::new(),
        }
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) {
        let window_attrs = Window::default_attributes()
            .with_title("Hearth Player")
            .with_inner_size(LogicalSize::new(1280.0, 720.0));

        match event_loop.create_window(window_attrs) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn stop(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.driver.shutdown(&mut self.controller) {
            log::error!("Shutdown error: {}", e);
        }
        event_loop.exit();
    }

    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        // Camera is read once, before the character moves
        let camera = self.camera.orientation();

        match self.driver.frame(&mut self.controller, &self.input, camera) {
            Ok(FrameStatus::Continue) => {}
            Ok(FrameStatus::Stopped) => {
                event_loop.exit();
                return;
            }
            Err(e) => {
                log::error!("Frame error: {}", e);
                self.stop(event_loop);
                return;
            }
        }

        if let Some(step) = self.controller.last_step() {
            self.camera.follow(step.displacement);
        }

        self.key_display.apply(&self.input.drain_events());
        for event in self.controller.drain_animation_events() {
            log::debug!("{:?}", event);
        }

        self.update_title();
    }

    fn update_title(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let pos = self.controller.actor().position;
        let title = format!(
            "Hearth Player | {:?} | x {:.1} z {:.1} | {}",
            self.controller.state(),
            pos.x,
            pos.z,
            self.key_display.render()
        );
        if title != self.last_title {
            window.set_title(&title);
            self.last_title = title;
        }
    }
}

impl ApplicationHandler for PlayerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.initialize(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.stop(event_loop);
            }

            WindowEvent::Focused(false) => {
                self.input.release_all();
                self.dragging = false;
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.logical_key == Key::Named(NamedKey::Escape) {
                    if event.state == ElementState::Pressed {
                        self.stop(event_loop);
                    }
                    return;
                }

                let Some(key) = key_identifier(&event.logical_key) else {
                    return;
                };
                match event.state {
                    ElementState::Pressed => self.input.on_key_down(&key),
                    ElementState::Released => self.input.on_key_up(&key),
                }
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.dragging = state == ElementState::Pressed;
                self.last_cursor_x = None;
            }

            WindowEvent::CursorMoved { position, .. } => {
                if self.dragging {
                    if let Some(last) = self.last_cursor_x {
                        let dx = position.x - last;
                        self.camera.orbit((-dx * ORBIT_SENSITIVITY) as f32);
                    }
                    self.last_cursor_x = Some(position.x);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => (p.y / 40.0) as f32,
                };
                self.camera.zoom(-amount);
            }

            WindowEvent::RedrawRequested => {
                self.tick(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
