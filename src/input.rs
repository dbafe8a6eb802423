//! Held-key latch
//!
//! Key handlers only flip flags here; the simulation reads them once per tick.

/// Logical actions the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Attack,
    /// Restart after game over
    Reset,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::Attack,
        Action::Reset,
    ];

    /// Map a physical key (`KeyboardEvent.code`) to an action
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Action::MoveLeft),
            "ArrowRight" => Some(Action::MoveRight),
            "Space" => Some(Action::Jump),
            "KeyA" => Some(Action::Attack),
            "KeyR" => Some(Action::Reset),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Held state per action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLatch {
    held: [bool; Action::ALL.len()],
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        self.held[action.index()] = true;
    }

    pub fn release(&mut self, action: Action) {
        self.held[action.index()] = false;
    }

    pub fn set(&mut self, action: Action, held: bool) {
        self.held[action.index()] = held;
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    /// Key-down event; returns true if the key is bound
    pub fn key_down(&mut self, code: &str) -> bool {
        match Action::from_key_code(code) {
            Some(action) => {
                self.press(action);
                true
            }
            None => false,
        }
    }

    /// Key-up event; returns true if the key is bound
    pub fn key_up(&mut self, code: &str) -> bool {
        match Action::from_key_code(code) {
            Some(action) => {
                self.release(action);
                true
            }
            None => false,
        }
    }

    /// Release everything (window blur loses key-up events)
    pub fn clear(&mut self) {
        self.held = Default::default();
    }
}
