//! FPS Camera Controller Module
//!
//! First-person camera where raw mouse deltas directly rotate the view,
//! with no smoothing. The camera supplies two things to the game: the full
//! 3D forward vector (throw direction) and the yaw-only XZ basis
//! (movement directions).
//!
//! - Configurable sensitivity (default: 0.002 rad/pixel)
//! - Pitch clamped to +/-89 degrees to prevent gimbal lock

use glam::Vec3;

/// Pitch limit constant: -89 degrees in radians
const PITCH_LIMIT_MIN: f32 = -89.0 * std::f32::consts::PI / 180.0;
/// Pitch limit constant: +89 degrees in radians
const PITCH_LIMIT_MAX: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// First-person camera controller.
///
/// ## Usage
/// ```rust,ignore
/// let mut camera = FpsCamera::new();
///
/// // In your input loop, pass raw mouse delta (in pixels)
/// camera.apply_mouse_delta(mouse_dx, mouse_dy);
///
/// // Throw direction
/// let dir = camera.forward();
/// // Movement basis (horizontal only)
/// let fwd = camera.forward_xz();
/// let right = camera.right_xz();
/// ```
#[derive(Clone, Debug)]
pub struct FpsCamera {
    /// Camera position in world space (the player's eye)
    pub position: Vec3,
    /// Horizontal angle (radians) - unrestricted, wraps around
    pub yaw: f32,
    /// Vertical angle (radians) - clamped to +/-89 degrees
    pub pitch: f32,
    /// Mouse sensitivity in radians per pixel (default: 0.002)
    pub sensitivity: f32,
}

impl Default for FpsCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: 0.002,
        }
    }
}

impl FpsCamera {
    /// Create a new camera with default settings, looking toward -Z.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera at a specific world position.
    pub fn with_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Apply mouse movement delta to rotate the camera.
    ///
    /// Standard FPS convention: moving the mouse right increases yaw
    /// (look right), moving it down decreases pitch (look down). Pitch is
    /// clamped to +/-89 degrees.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(PITCH_LIMIT_MIN, PITCH_LIMIT_MAX);
    }

    /// Get the camera's forward direction vector (normalized).
    ///
    /// # Coordinate System
    /// - +X = right
    /// - +Y = up
    /// - -Z = forward
    ///
    /// When yaw=0 and pitch=0, the camera looks toward -Z.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Get the forward direction projected onto the XZ plane (normalized).
    ///
    /// This is the movement basis: walking forward never changes height
    /// regardless of where the player is looking.
    #[inline]
    pub fn forward_xz(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos()).normalize()
    }

    /// Get the right direction on the XZ plane (normalized).
    #[inline]
    pub fn right_xz(&self) -> Vec3 {
        let forward = self.forward_xz();
        Vec3::new(-forward.z, 0.0, forward.x).normalize()
    }

    /// Reset orientation to default (looking toward -Z).
    pub fn reset_orientation(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}
