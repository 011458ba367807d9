//! Cursor Manager Module
//!
//! Tracks the desired pointer-capture state for first-person gameplay.
//! The game session requests capture changes at state transitions (start,
//! completion, reset); the application shell applies the state to the
//! actual window. This module stays windowing-agnostic.
//!
//! # Usage
//!
//! ```rust,ignore
//! use taco_toss_engine::input::CursorManager;
//!
//! let mut cursor = CursorManager::new();
//!
//! // Game started: capture the pointer
//! cursor.capture();
//!
//! // Game complete: release it so the player can leave
//! cursor.release();
//!
//! // Shell side, once per tick:
//! if cursor.is_dirty() {
//!     // window.set_cursor_grab(..) / set_cursor_visible(..)
//!     cursor.clear_dirty();
//! }
//! ```

/// Tracks whether the pointer should be captured (hidden and confined)
/// and whether that state still needs to be applied to the window.
#[derive(Debug, Clone)]
pub struct CursorManager {
    /// Whether the pointer should currently be captured
    captured: bool,
    /// Set when `captured` changed and the window has not been updated yet
    state_dirty: bool,
}

impl Default for CursorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorManager {
    /// Create a new manager with the pointer released.
    ///
    /// The game starts on the "Press SPACE to Start" prompt; capture is
    /// requested on the first click or on game start.
    pub fn new() -> Self {
        Self {
            captured: false,
            state_dirty: true, // Need to apply initial state
        }
    }

    /// Check if the pointer should currently be captured.
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Check if cursor state needs to be applied to the window.
    pub fn is_dirty(&self) -> bool {
        self.state_dirty
    }

    /// Clear the dirty flag after applying state to the window.
    pub fn clear_dirty(&mut self) {
        self.state_dirty = false;
    }

    /// Request pointer capture (hide and confine the cursor).
    pub fn capture(&mut self) {
        if !self.captured {
            self.captured = true;
            self.state_dirty = true;
        }
    }

    /// Request pointer release (show and free the cursor).
    pub fn release(&mut self) {
        if self.captured {
            self.captured = false;
            self.state_dirty = true;
        }
    }

    /// Handle a click while the pointer is released: re-capture.
    ///
    /// Returns `true` if the click triggered a capture request, `false`
    /// if the pointer was already captured (the click is gameplay input).
    pub fn handle_click_when_released(&mut self) -> bool {
        if !self.captured {
            self.capture();
            true
        } else {
            false
        }
    }
}
