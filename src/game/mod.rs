//! Game Module
//!
//! Game-specific simulation on top of the engine primitives: the plate
//! grid, taco lifecycle, player controller, run clock, HUD strings, and
//! the session state machine that ties them together.

pub mod clock;
pub mod config;
pub mod frame;
pub mod hud;
pub mod plates;
pub mod player;
pub mod session;
pub mod tacos;

pub use clock::GameClock;
pub use config::{GameConfig, PlayerConfig, ThrowConfig};
pub use frame::{CameraFrame, ConsoleDriver, PlateFrame, RenderDriver, RenderFrame, TacoFrame};
pub use plates::{PLATE_COUNT, Plate, PlateColor, PlateField};
pub use player::Player;
pub use session::{
    CaptureRequest, GamePhase, GameSession, PhaseChange, TickInput, TickReport,
};
pub use tacos::{Taco, TacoState, TacoSystem};
