use std::collections::HashSet;

use jinxgl_core::input::CameraInput;
use sdl2::{event::Event, keyboard::Keycode};

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
    pub pressed: HashSet<Keycode>,
}

impl KeyboardState {
    /// Forgets the presses recorded during the previous frame.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
    }

    /// Records key transitions. Other events are ignored.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::KeyDown {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => self.key_down(*keycode),
            Event::KeyUp {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => self.key_up(*keycode),
            // keys released while unfocused never send KeyUp
            Event::Window {
                win_event: sdl2::event::WindowEvent::FocusLost,
                ..
            } => self.down.clear(),
            _ => {}
        }
    }

    pub fn key_down(&mut self, keycode: Keycode) {
        self.down.insert(keycode);
        self.pressed.insert(keycode);
    }

    pub fn key_up(&mut self, keycode: Keycode) {
        self.down.remove(&keycode);
    }

    pub fn is_down(&self, keycode: Keycode) -> bool {
        self.down.contains(&keycode)
    }

    /// Maps held keys to camera intent.
    pub fn camera_input(&self) -> CameraInput {
        CameraInput {
            forward: self.is_down(Keycode::W),
            back: self.is_down(Keycode::S),
            left: self.is_down(Keycode::A),
            right: self.is_down(Keycode::D),
            up: self.is_down(Keycode::Up),
            down: self.is_down(Keycode::Down),
            yaw_left: self.is_down(Keycode::Left),
            yaw_right: self.is_down(Keycode::Right),
            pitch_up: self.is_down(Keycode::PageUp),
            pitch_down: self.is_down(Keycode::PageDown),
        }
    }
}

/// Context handed to samples during the update phase.
pub struct UpdateContext<'a> {
    pub keyboard: &'a KeyboardState,
    /// Seconds since the previous frame.
    pub delta_time: f32,
    /// Seconds since the sample started.
    pub time: f32,
}

impl<'a> UpdateContext<'a> {
    /// Creates a new `UpdateContext` from the given keyboard state and frame times.
    pub fn new(keyboard: &'a KeyboardState, delta_time: f32, time: f32) -> Self {
        Self {
            keyboard,
            delta_time,
            time,
        }
    }
}
