//! Player Module
//!
//! First-person player controller. Movement is a fixed per-tick
//! displacement along the camera's horizontal basis; vertical motion is
//! gravity-integrated with a floor clamp at the player height.

use glam::Vec3;

use super::config::PlayerConfig;

/// First-person player state.
#[derive(Debug, Clone)]
pub struct Player {
    /// Eye position in world space; `y` is clamped to the player height
    pub position: Vec3,
    /// Vertical velocity, per tick (positive = upward)
    pub vertical_velocity: f32,
    /// Whether the player is standing on the floor
    pub on_ground: bool,
}

impl Player {
    /// Create a player standing at the configured start position.
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            position: config.start_position,
            vertical_velocity: 0.0,
            on_ground: true,
        }
    }

    /// Jump if grounded. Airborne jumps are a no-op.
    ///
    /// Returns `true` if the jump happened.
    pub fn jump(&mut self, config: &PlayerConfig) -> bool {
        if self.on_ground {
            self.vertical_velocity = config.jump_impulse;
            self.on_ground = false;
            true
        } else {
            false
        }
    }

    /// Advance the player by one tick.
    ///
    /// Gravity integrates first, then the floor clamp, then horizontal
    /// steps along the camera basis. `forward_axis`/`right_axis` are the
    /// -1/0/1 values from the held movement keys.
    pub fn update(
        &mut self,
        config: &PlayerConfig,
        forward: Vec3,
        right: Vec3,
        forward_axis: i32,
        right_axis: i32,
    ) {
        self.vertical_velocity -= config.gravity;
        self.position.y += self.vertical_velocity;

        if self.position.y < config.height {
            self.position.y = config.height;
            self.vertical_velocity = 0.0;
            self.on_ground = true;
        }

        self.position += forward * (config.move_step * forward_axis as f32);
        self.position += right * (config.move_step * right_axis as f32);
    }

    /// Return to the start position, standing still.
    pub fn reset(&mut self, config: &PlayerConfig) {
        self.position = config.start_position;
        self.vertical_velocity = 0.0;
        self.on_ground = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlayerConfig {
        PlayerConfig::default()
    }

    #[test]
    fn test_new_player_at_start() {
        let config = config();
        let player = Player::new(&config);
        assert_eq!(player.position, config.start_position);
        assert!(player.on_ground);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let config = config();
        let mut player = Player::new(&config);

        assert!(player.jump(&config));
        assert_eq!(player.vertical_velocity, config.jump_impulse);
        assert!(!player.on_ground);

        // Airborne jump must not touch vertical velocity
        let vv = player.vertical_velocity;
        assert!(!player.jump(&config));
        assert_eq!(player.vertical_velocity, vv);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let config = config();
        let mut player = Player::new(&config);
        player.jump(&config);

        let mut peak = player.position.y;
        for _ in 0..100 {
            player.update(&config, Vec3::NEG_Z, Vec3::X, 0, 0);
            peak = peak.max(player.position.y);
            if player.on_ground {
                break;
            }
        }

        assert!(player.on_ground);
        assert_eq!(player.position.y, config.height);
        assert!(peak > config.height);
    }

    #[test]
    fn test_forward_step() {
        let config = config();
        let mut player = Player::new(&config);
        let start = player.position;

        player.update(&config, Vec3::NEG_Z, Vec3::X, 1, 0);
        let moved = player.position - start;
        assert!((moved.z - (-config.move_step)).abs() < 1e-6);
        assert_eq!(moved.x, 0.0);
    }

    #[test]
    fn test_strafe_step() {
        let config = config();
        let mut player = Player::new(&config);
        let start = player.position;

        player.update(&config, Vec3::NEG_Z, Vec3::X, 0, -1);
        let moved = player.position - start;
        assert!((moved.x - (-config.move_step)).abs() < 1e-6);
        assert_eq!(moved.z, 0.0);
    }

    #[test]
    fn test_grounded_stays_clamped() {
        let config = config();
        let mut player = Player::new(&config);

        for _ in 0..10 {
            player.update(&config, Vec3::NEG_Z, Vec3::X, 0, 0);
        }
        assert_eq!(player.position.y, config.height);
        assert_eq!(player.vertical_velocity, 0.0);
        assert!(player.on_ground);
    }

    #[test]
    fn test_reset_restores_start() {
        let config = config();
        let mut player = Player::new(&config);
        player.jump(&config);
        player.update(&config, Vec3::NEG_Z, Vec3::X, 1, 1);

        player.reset(&config);
        assert_eq!(player.position, config.start_position);
        assert_eq!(player.vertical_velocity, 0.0);
        assert!(player.on_ground);
    }
}
