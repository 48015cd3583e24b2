/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    KeyU,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Backspace,
    Escape,
}

impl Button {
    /// Every button the demos react to
    pub const ALL: [Button; 14] = [
        Button::KeyW,
        Button::KeyA,
        Button::KeyS,
        Button::KeyD,
        Button::KeyQ,
        Button::KeyE,
        Button::KeyU,
        Button::ArrowUp,
        Button::ArrowDown,
        Button::ArrowLeft,
        Button::ArrowRight,
        Button::Space,
        Button::Backspace,
        Button::Escape,
    ];
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];
}
