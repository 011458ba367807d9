//! Mouse Input Module
//!
//! Tracks mouse buttons with press-edge detection and accumulates raw
//! look deltas between ticks. Decoupled from winit to use generic types.
//!
//! The throw action is edge-triggered: the simulation must see a click
//! exactly once no matter how many ticks the button stays held, so button
//! state distinguishes `pressed` from `just_pressed`. Raw motion deltas
//! accumulate until consumed once per tick.

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Additional mouse buttons (button 4, 5, etc.)
    Other(u16),
}

/// State of a single button with per-tick edge flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    /// Button is currently held down.
    pub pressed: bool,
    /// Button went down since the last `end_frame`.
    pub just_pressed: bool,
    /// Button went up since the last `end_frame`.
    pub just_released: bool,
}

impl ButtonState {
    pub(crate) fn apply(&mut self, pressed: bool) {
        self.just_pressed = pressed && !self.pressed;
        self.just_released = !pressed && self.pressed;
        self.pressed = pressed;
    }

    pub(crate) fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Mouse state for captured-pointer gameplay.
///
/// Tracks button edges, accumulated look deltas, and whether the pointer
/// is currently captured by the window. Deltas accumulate across events
/// and are consumed atomically once per tick; releasing capture clears
/// them so the camera does not jump on re-capture.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    left: ButtonState,
    right: ButtonState,
    middle: ButtonState,
    /// Accumulated horizontal look delta since last consume.
    delta_x: f32,
    /// Accumulated vertical look delta since last consume.
    delta_y: f32,
    /// Whether the pointer is currently captured (hidden and confined).
    captured: bool,
}

impl MouseState {
    /// Create a new mouse state with no buttons down and pointer released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a button press or release event.
    pub fn handle_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left.apply(pressed),
            MouseButton::Right => self.right.apply(pressed),
            MouseButton::Middle => self.middle.apply(pressed),
            MouseButton::Other(_) => {}
        }
    }

    /// Accumulate raw look motion from the event loop.
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        self.delta_x += dx;
        self.delta_y += dy;
    }

    /// Consume the accumulated look delta, returning it and resetting to zero.
    ///
    /// Call once per tick to get all motion since the previous tick.
    #[inline]
    pub fn consume_delta(&mut self) -> (f32, f32) {
        let delta = (self.delta_x, self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        delta
    }

    /// Get the current accumulated delta without consuming it.
    #[inline]
    pub fn peek_delta(&self) -> (f32, f32) {
        (self.delta_x, self.delta_y)
    }

    /// Set whether the pointer is captured.
    ///
    /// Clears pending deltas on release so stale motion cannot leak into
    /// the camera when capture resumes.
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
        if !captured {
            self.delta_x = 0.0;
            self.delta_y = 0.0;
        }
    }

    /// Check if the pointer is currently captured.
    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Check if the left button is currently held.
    pub fn left_pressed(&self) -> bool {
        self.left.pressed
    }

    /// Check if the left button went down since the last tick (throw edge).
    pub fn left_just_pressed(&self) -> bool {
        self.left.just_pressed
    }

    /// Check if the right button went down since the last tick.
    pub fn right_just_pressed(&self) -> bool {
        self.right.just_pressed
    }

    /// Clear per-tick edge flags. Call at the end of every tick.
    pub fn end_frame(&mut self) {
        self.left.clear_edges();
        self.right.clear_edges();
        self.middle.clear_edges();
    }

    /// Reset all state to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
