//! Keyboard Input Module
//!
//! Contains keyboard state tracking for movement keys.
//! Decoupled from winit to use generic key codes.

/// Generic key codes for the inputs the game cares about, independent of
/// the windowing system.
///
/// Anything the game does not react to maps to [`KeyCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,

    /// Start the game / jump / restart after completion
    Space,

    /// Quit (handled by the application shell)
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks which movement keys are currently held down.
///
/// This is the "pressed-key set" the simulation reads once per tick;
/// holding a key produces continuous movement.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W key - move forward
    pub forward: bool,
    /// S key - move backward
    pub backward: bool,
    /// A key - strafe left
    pub left: bool,
    /// D key - strafe right
    pub right: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on a key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => {
                self.forward = pressed;
                true
            }
            KeyCode::S => {
                self.backward = pressed;
                true
            }
            KeyCode::A => {
                self.left = pressed;
                true
            }
            KeyCode::D => {
                self.right = pressed;
                true
            }
            _ => false,
        }
    }

    /// Check if any movement key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
