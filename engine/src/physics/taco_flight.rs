//! Taco flight simulation
//!
//! Per-tick integration for thrown tacos: gravity, airborne tumbling,
//! ground friction with a snap-to-zero epsilon, and a one-time horizontal
//! damping on ground impact. No external physics dependencies.
//!
//! All constants are per-tick increments on a fixed timestep, one tick per
//! displayed frame. There is no delta-time scaling anywhere in this module.
//!
//! # Example
//!
//! ```ignore
//! use taco_toss_engine::physics::{FlightConfig, TacoBody};
//! use glam::Vec3;
//!
//! let config = FlightConfig::default();
//! let mut taco = TacoBody::launch(Vec3::new(0.0, 2.0, 20.0), Vec3::NEG_Z, 0.5);
//! taco.step(&config);
//! ```

use glam::Vec3;

/// Configuration for taco flight, all values per tick.
#[derive(Debug, Clone, Copy)]
pub struct FlightConfig {
    /// Downward velocity gained each tick while simulated
    pub gravity: f32,
    /// Height at or below which the taco is touching the floor
    pub ground_height: f32,
    /// Horizontal velocity multiplier applied every tick on the ground
    pub ground_friction: f32,
    /// Horizontal velocity components below this magnitude snap to zero
    pub stop_epsilon: f32,
    /// One-time horizontal velocity multiplier on ground impact
    pub impact_damping: f32,
    /// Tumbling rotation gained per airborne tick around X
    pub tumble_x: f32,
    /// Tumbling rotation gained per airborne tick around Z
    pub tumble_z: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            gravity: 0.01,
            ground_height: 0.5,
            ground_friction: 0.85,
            stop_epsilon: 0.005,
            impact_damping: 0.8,
            tumble_x: 0.1,
            tumble_z: 0.05,
        }
    }
}

/// A taco in flight.
///
/// Rotation is tracked as Euler angles so the renderer can tumble the mesh
/// directly; on the ground the rotation locks to the flat resting
/// orientation (open side up).
#[derive(Debug, Clone, Copy)]
pub struct TacoBody {
    /// Current position in world space
    pub position: Vec3,
    /// Current velocity (per-tick displacement)
    pub velocity: Vec3,
    /// Euler rotation angles (radians)
    pub rotation: Vec3,
}

impl TacoBody {
    /// Launch a taco from `position` along `direction` at `speed` units
    /// per tick.
    pub fn launch(position: Vec3, direction: Vec3, speed: f32) -> Self {
        Self {
            position,
            velocity: direction.normalize_or_zero() * speed,
            rotation: Vec3::ZERO,
        }
    }

    /// Whether the taco is at or below the ground threshold.
    pub fn on_ground(&self, config: &FlightConfig) -> bool {
        self.position.y <= config.ground_height
    }

    /// Advance the taco by one tick.
    ///
    /// Order matters and matches the gameplay feel exactly:
    /// 1. gravity accelerates the fall
    /// 2. on the ground: friction, snap-to-zero, rotation lock;
    ///    airborne: tumble
    /// 3. integrate position
    /// 4. on crossing the ground threshold: clamp height, kill vertical
    ///    velocity, damp horizontal velocity once
    ///
    /// After this returns, `position.y >= config.ground_height` always
    /// holds: a taco cannot tunnel below the floor within a tick.
    pub fn step(&mut self, config: &FlightConfig) {
        self.velocity.y -= config.gravity;

        if self.on_ground(config) {
            self.velocity.x *= config.ground_friction;
            self.velocity.z *= config.ground_friction;

            if self.velocity.x.abs() < config.stop_epsilon {
                self.velocity.x = 0.0;
            }
            if self.velocity.z.abs() < config.stop_epsilon {
                self.velocity.z = 0.0;
            }

            self.lock_rotation();
        } else {
            self.rotation.x += config.tumble_x;
            self.rotation.z += config.tumble_z;
        }

        self.position += self.velocity;

        if self.position.y < config.ground_height {
            self.position.y = config.ground_height;
            self.velocity.y = 0.0;
            self.velocity.x *= config.impact_damping;
            self.velocity.z *= config.impact_damping;
        }
    }

    /// Stop all motion and lock the resting orientation.
    ///
    /// Used when the taco lands on a plate.
    pub fn settle(&mut self) {
        self.velocity = Vec3::ZERO;
        self.lock_rotation();
    }

    /// Lock rotation to the flat resting orientation.
    ///
    /// X snaps to a quarter turn (shell lying flat); Z keeps its current
    /// facing, wrapped into one revolution.
    fn lock_rotation(&mut self) {
        self.rotation.x = std::f32::consts::FRAC_PI_2;
        self.rotation.z = self.rotation.z.rem_euclid(std::f32::consts::TAU);
    }
}
