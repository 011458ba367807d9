//! Game Configuration
//!
//! Centralized configuration for the arena layout and gameplay tuning.
//! `Default` returns the values the game shipped with; everything is fixed
//! at compile time, there is no config file.
//!
//! All speeds and accelerations are per-tick increments on a fixed
//! timestep (one tick per displayed frame), not per-second rates.

use glam::Vec3;

use crate::physics::FlightConfig;

/// Player tuning, per tick where applicable.
#[derive(Clone, Debug)]
pub struct PlayerConfig {
    /// Where the player stands on load and after reset
    pub start_position: Vec3,
    /// Eye height; the floor clamp for the player position
    pub height: f32,
    /// Horizontal displacement per held movement key per tick
    pub move_step: f32,
    /// Downward velocity gained per tick
    pub gravity: f32,
    /// Upward velocity set by a jump
    pub jump_impulse: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(0.0, 2.0, 20.0),
            height: 2.0,
            move_step: 0.1,
            gravity: 0.02,
            jump_impulse: 0.2,
        }
    }
}

/// Central configuration for the whole game.
#[derive(Clone, Debug, Default)]
pub struct GameConfig {
    /// Player movement tuning
    pub player: PlayerConfig,
    /// Taco flight tuning
    pub flight: FlightConfig,
    /// Throwing and scoring tuning
    pub throwing: ThrowConfig,
}

/// Throwing and plate-scoring tuning.
#[derive(Clone, Debug)]
pub struct ThrowConfig {
    /// Taco velocity magnitude at launch, per tick
    pub launch_speed: f32,
    /// A taco within this distance of an unhit plate center scores it
    pub hit_radius: f32,
    /// Height a scored taco rests at on its plate
    pub rest_height: f32,
    /// Upper bound on simultaneously flying tacos
    pub max_active_tacos: usize,
}

impl Default for ThrowConfig {
    fn default() -> Self {
        Self {
            launch_speed: 0.5,
            hit_radius: 1.5,
            rest_height: 0.5,
            max_active_tacos: 64,
        }
    }
}
