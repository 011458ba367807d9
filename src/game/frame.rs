//! Render Frame Module
//!
//! The presentation snapshot handed to the render driver after each tick.
//! Rendering is an external collaborator: it consumes these plain structs
//! and never reaches back into simulation state.

use glam::Vec3;

/// Camera transform for this frame.
#[derive(Debug, Clone, Copy)]
pub struct CameraFrame {
    /// Eye position in world space
    pub position: Vec3,
    /// Horizontal view angle (radians)
    pub yaw: f32,
    /// Vertical view angle (radians)
    pub pitch: f32,
    /// View direction (normalized)
    pub forward: Vec3,
}

/// One taco to draw.
#[derive(Debug, Clone, Copy)]
pub struct TacoFrame {
    /// World position
    pub position: Vec3,
    /// Euler rotation angles (radians)
    pub rotation: Vec3,
    /// Parked on a plate (no longer simulated)
    pub resting: bool,
}

/// One plate to draw.
#[derive(Debug, Clone, Copy)]
pub struct PlateFrame {
    /// World position of the plate center
    pub position: Vec3,
    /// Whether this plate has been hit
    pub hit: bool,
    /// RGB display color derived from the hit flag
    pub color: [f32; 3],
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct RenderFrame {
    /// Camera transform
    pub camera: CameraFrame,
    /// All tacos, flying and resting
    pub tacos: Vec<TacoFrame>,
    /// All 100 plates with their colors
    pub plates: Vec<PlateFrame>,
    /// Current HUD status line
    pub status: String,
}

/// External rendering collaborator.
///
/// The shell owns one of these and hands it the frame snapshot once per
/// tick. A GPU implementation lives outside this crate.
pub trait RenderDriver {
    /// Draw one frame.
    fn present(&mut self, frame: &RenderFrame);

    /// The window surface changed size. Default: ignore.
    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// Render driver that logs the HUD line whenever it changes.
///
/// Useful for running the game headless and for watching state
/// transitions in the terminal.
#[derive(Debug, Default)]
pub struct ConsoleDriver {
    last_status: String,
}

impl ConsoleDriver {
    /// Create a console driver with no history.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderDriver for ConsoleDriver {
    fn present(&mut self, frame: &RenderFrame) {
        if frame.status != self.last_status {
            println!("[TacoArena] {}", frame.status);
            self.last_status = frame.status.clone();
        }
    }
}
