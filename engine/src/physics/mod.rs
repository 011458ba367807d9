//! Physics Module
//!
//! Per-tick taco flight integration. Player gravity lives with the player
//! controller in the game module; this module only knows about thrown
//! tacos.

pub mod taco_flight;

pub use taco_flight::{FlightConfig, TacoBody};
