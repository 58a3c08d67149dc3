use std::collections::HashSet;

use glam::Vec2;
use sdl2::keyboard::Keycode;

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
    pub pressed: HashSet<Keycode>,
}

/// The current state of the mouse.
#[derive(Default)]
pub struct MouseState {
    pub delta: Vec2,
    pub scroll_delta: Vec2,
}

/// Per-frame context handed to everything that updates.
pub struct UpdateContext<'a> {
    pub keyboard: &'a KeyboardState,
    pub mouse: &'a MouseState,
    pub delta_time: f32,
}

impl<'a> UpdateContext<'a> {
    /// Creates a new `UpdateContext` from the given keyboard and mouse states and delta time.
    pub fn new(keyboard: &'a KeyboardState, mouse: &'a MouseState, delta_time: f32) -> Self {
        Self {
            keyboard,
            mouse,
            delta_time,
        }
    }
}
