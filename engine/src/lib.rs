//! Taco Toss Engine Library
//!
//! Simulation core for the first-person taco toss minigame: the player walks
//! a flat arena and throws tacos at a 10x10 grid of plates, racing to hit
//! all 100 for a completion time.
//!
//! The library is strictly headless. It owns input snapshots, the FPS
//! camera, player and taco physics, the plate field, and the game state
//! machine. Rendering is an external collaborator that consumes the
//! [`game::RenderFrame`] snapshot produced after each tick; nothing in here
//! touches a GPU or a window.
//!
//! # Modules
//!
//! - [`input`] - Platform-agnostic keyboard/mouse state and cursor capture
//! - [`camera`] - First-person camera (yaw/pitch, view basis vectors)
//! - [`physics`] - Per-tick taco flight integration
//! - [`game`] - Plates, tacos, player, clock, session state machine
//!
//! # Example
//!
//! ```ignore
//! use std::time::Instant;
//! use taco_toss_engine::game::{GameConfig, GameSession, TickInput};
//!
//! let mut session = GameSession::new(GameConfig::default());
//!
//! // Each displayed frame:
//! let input = TickInput {
//!     start_pressed: true, // Space edge starts the game
//!     pointer_captured: true,
//!     ..TickInput::default()
//! };
//! let report = session.tick(&input, Instant::now());
//! let frame = session.render_frame(Instant::now());
//! ```

pub mod camera;
pub mod input;
pub mod physics;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used input types
pub use input::{CursorManager, InputState, KeyCode, MouseButton, MovementKeys};
// Re-export the camera controller
pub use camera::FpsCamera;
