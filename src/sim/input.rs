//! Keyboard input tracking
//!
//! Four independent directional flags, set and cleared by key events.
//! Purely event-driven shared state, read once per simulation tick.

/// Logical input actions, mapped from physical key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    PauseToggle,
    Restart,
}

impl Action {
    /// Map a `KeyboardEvent.code` to an action. Arrow keys and WASD
    /// alias to the same four movement actions.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" | "KeyW" => Some(Action::MoveUp),
            "ArrowDown" | "KeyS" => Some(Action::MoveDown),
            "ArrowLeft" | "KeyA" => Some(Action::MoveLeft),
            "ArrowRight" | "KeyD" => Some(Action::MoveRight),
            "Space" => Some(Action::PauseToggle),
            "KeyR" => Some(Action::Restart),
            _ => None,
        }
    }
}

/// Current directional key state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Apply a press (`pressed = true`) or release of a movement
    /// action. Non-movement actions are one-shots handled by the
    /// shell and leave the flags untouched.
    pub fn apply(&mut self, action: Action, pressed: bool) {
        match action {
            Action::MoveUp => self.up = pressed,
            Action::MoveDown => self.down = pressed,
            Action::MoveLeft => self.left = pressed,
            Action::MoveRight => self.right = pressed,
            Action::PauseToggle | Action::Restart => {}
        }
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}
