//! Camera Module
//!
//! First-person camera control. The camera is pure orientation state;
//! its position is written by the game from the player position each tick.

pub mod fps_controller;

pub use fps_controller::FpsCamera;
