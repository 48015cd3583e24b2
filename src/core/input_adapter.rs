use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// A key transition reported by the windowing host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub button: Button,
    pub pressed: bool,
    /// OS auto-repeat of a key that is already held
    pub repeat: bool,
}

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state.
    /// Returns the key transition so the caller can forward it to the demo.
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<KeyInput> {
        self.route(Self::key_input(event)?, false)
    }

    /// Like `process_event` for an event the UI overlay already consumed.
    /// Presses are dropped, releases still land so no key stays held.
    pub fn process_consumed_event(&mut self, event: &WindowEvent) -> Option<KeyInput> {
        self.route(Self::key_input(event)?, true)
    }

    /// Apply `input` unless it is a press swallowed by the UI
    pub fn route(&mut self, input: KeyInput, consumed: bool) -> Option<KeyInput> {
        if consumed && input.pressed {
            return None;
        }
        self.apply(input.button, input.pressed);
        Some(input)
    }

    fn key_input(event: &WindowEvent) -> Option<KeyInput> {
        let WindowEvent::KeyboardInput { event, .. } = event else {
            return None;
        };
        let PhysicalKey::Code(keycode) = event.physical_key else {
            return None;
        };
        Some(KeyInput {
            button: Self::keycode_to_button(keycode)?,
            pressed: event.state == ElementState::Pressed,
            repeat: event.repeat,
        })
    }

    /// Record a press or release of `button`
    pub fn apply(&mut self, button: Button, pressed: bool) {
        if pressed {
            if self.pressed_keys.insert(button) {
                self.pressed_vec.push(button);
            }
        } else if self.pressed_keys.remove(&button) {
            self.pressed_vec.retain(|&b| b != button);
        }
    }

    /// Forget every held key, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::KeyU => Some(Button::KeyU),
            KeyCode::ArrowUp => Some(Button::ArrowUp),
            KeyCode::ArrowDown => Some(Button::ArrowDown),
            KeyCode::ArrowLeft => Some(Button::ArrowLeft),
            KeyCode::ArrowRight => Some(Button::ArrowRight),
            KeyCode::Space => Some(Button::Space),
            KeyCode::Backspace => Some(Button::Backspace),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }
}
