use log::debug;

use crate::alg;
use crate::camera;

pub const KEY_COUNT: usize = 5;
pub const BUTTON_COUNT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    LCtrl,
    LAlt,
    RAlt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Window events as delivered by the windowing layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    Key { key: Key, pressed: bool },
    MouseButton { button: MouseButton, pressed: bool },
    CursorMoved { x: f64, y: f64 },
    Resized { width: u32, height: u32 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KeyState {
    pub was_pressed: bool,
    pub pressed: bool,
}

/// Input state owned by the application and fed every window event
pub struct Manager {
    key_map: [KeyState; KEY_COUNT],
    buttons: [bool; BUTTON_COUNT],
    last_cursor: Option<alg::Vec2>,
    pub cursor_coords: alg::Vec2,
    /// Accumulated since the last `increment_key_states()`
    pub mouse_delta: alg::Vec2,
    pub quit_requested: bool,
    pub wireframe: bool,
}

impl Default for Manager {
    fn default() -> Manager {
        Manager::new()
    }
}

impl Manager {
    pub fn new() -> Manager {
        Manager {
            key_map: [KeyState::default(); KEY_COUNT],
            buttons: [false; BUTTON_COUNT],
            last_cursor: None,
            cursor_coords: alg::Vec2::zero(),
            mouse_delta: alg::Vec2::zero(),
            quit_requested: false,
            wireframe: false,
        }
    }

    /// Route one event into input state, camera and projection
    pub fn handle(
        &mut self,
        event: Event,
        camera: &mut camera::OrbitCamera,
        projection: &mut camera::Projection,
    ) {
        self.handle_with_secondary(event, camera, None, projection);
    }

    /// Route one event with a second camera in the scene \
    /// Drags move `primary` unless left ctrl is held;
    /// drags with left alt held also move `secondary`.
    pub fn handle_with_secondary(
        &mut self,
        event: Event,
        primary: &mut camera::OrbitCamera,
        secondary: Option<&mut camera::OrbitCamera>,
        projection: &mut camera::Projection,
    ) {
        match event {
            Event::Key { key, pressed } => {
                // Repeats while held don't count
                let first_press = pressed && !self.key_held(key);
                self.set_key_pressed(key, pressed);

                if first_press {
                    match key {
                        Key::Escape => self.quit_requested = true,
                        Key::Space => {
                            self.wireframe = !self.wireframe;
                            debug!("Wireframe: {}", self.wireframe);
                        },
                        _ => (),
                    }
                }
            },

            Event::MouseButton { button, pressed } => {
                self.buttons[button as usize] = pressed;
            },

            Event::CursorMoved { x, y } => {
                let delta = self.cursor_moved(x as f32, y as f32);

                if !self.key_held(Key::LCtrl) {
                    self.drive(primary, delta);
                }

                if let Some(secondary) = secondary {
                    if self.key_held(Key::LAlt) {
                        self.drive(secondary, delta);
                    }
                }
            },

            Event::Resized { width, height } => {
                projection.set_viewport(width, height);
            },
        }
    }

    fn drive(&self, camera: &mut camera::OrbitCamera, delta: alg::Vec2) {
        if self.button_held(MouseButton::Left) {
            camera.drag(delta.x, delta.y);
        }

        if self.button_held(MouseButton::Right) {
            camera.zoom(delta.y);
        }
    }

    /// Record a cursor position and return the delta from the previous one \
    /// The first position ever seen yields a zero delta
    pub fn cursor_moved(&mut self, x: f32, y: f32) -> alg::Vec2 {
        let position = alg::Vec2::new(x, y);
        let delta = match self.last_cursor {
            Some(last) => position - last,
            None => alg::Vec2::zero(),
        };

        self.last_cursor = Some(position);
        self.cursor_coords = position;
        self.mouse_delta += delta;

        delta
    }

    /* Key states */

    /// Call once per frame, after the frame's events are handled
    pub fn increment_key_states(&mut self) {
        for key_state in &mut self.key_map {
            key_state.was_pressed = key_state.pressed;
        }

        self.mouse_delta = alg::Vec2::zero();
    }

    pub fn set_key_pressed(&mut self, key: Key, pressed: bool) {
        self.key_map[key as usize].pressed = pressed;
    }

    pub fn key_held(&self, key: Key) -> bool {
        self.key_map[key as usize].pressed
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        let key_state = self.key_map[key as usize];
        !key_state.was_pressed && key_state.pressed
    }

    pub fn key_released(&self, key: Key) -> bool {
        let key_state = self.key_map[key as usize];
        key_state.was_pressed && !key_state.pressed
    }

    pub fn button_held(&self, button: MouseButton) -> bool {
        self.buttons[button as usize]
    }
}
