//! Input Module
//!
//! Provides platform-agnostic input handling for keyboard and mouse.
//! This module is decoupled from any specific windowing system (like winit)
//! so the simulation can be driven and tested headless.
//!
//! Input events mutate the state between ticks; the simulation reads a
//! snapshot once at the start of each tick and edge flags are cleared with
//! [`InputState::end_frame`] afterwards.
//!
//! # Example
//!
//! ```rust,ignore
//! use taco_toss_engine::input::{InputState, KeyCode, MouseButton};
//!
//! let mut input = InputState::new();
//!
//! // Event loop side:
//! input.handle_key(KeyCode::W, true);
//! input.handle_mouse_button(MouseButton::Left, true);
//! input.mouse.accumulate_delta(12.0, -3.0);
//!
//! // Tick side:
//! if input.start_just_pressed() { /* start / jump / restart */ }
//! if input.throw_just_pressed() { /* throw a taco */ }
//! let (dx, dy) = input.mouse.consume_delta();
//! input.end_frame();
//! ```

pub mod cursor_manager;
pub mod keyboard;
pub mod mouse;

// Re-export commonly used types at module level
pub use cursor_manager::CursorManager;
pub use keyboard::{KeyCode, MovementKeys};
pub use mouse::{ButtonState, MouseButton, MouseState};

/// Combined input state for keyboard and mouse.
///
/// The start action (Space) is edge-tracked here because it drives three
/// different things depending on game phase: start, jump, and restart.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Held movement keys (WASD)
    pub movement: MovementKeys,
    /// Mouse buttons, look deltas, capture state
    pub mouse: MouseState,
    /// Edge state of the start/jump key (Space)
    start: ButtonState,
}

impl InputState {
    /// Create a new input state with everything released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Movement keys update the pressed-key set; Space updates the
    /// start-action edge. Other keys are ignored here (the shell handles
    /// Escape itself).
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if self.movement.handle_key(key, pressed) {
            return;
        }
        if key == KeyCode::Space {
            self.start.apply(pressed);
        }
    }

    /// Handle a mouse button press or release event.
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        self.mouse.handle_button(button, pressed);
    }

    /// Check if the start action (Space) went down since the last tick.
    pub fn start_just_pressed(&self) -> bool {
        self.start.just_pressed
    }

    /// Check if the throw action (left mouse) went down since the last tick.
    pub fn throw_just_pressed(&self) -> bool {
        self.mouse.left_just_pressed()
    }

    /// Clear per-tick edge flags. Call once after every tick.
    pub fn end_frame(&mut self) {
        self.start.clear_edges();
        self.mouse.end_frame();
    }

    /// Reset all input state to defaults.
    pub fn reset(&mut self) {
        self.movement.reset();
        self.mouse.reset();
        self.start = ButtonState::default();
    }
}
