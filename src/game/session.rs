//! Game Session
//!
//! Central state struct that holds the whole simulation together, with a
//! single `tick` entry point driven once per displayed frame. The session
//! owns the camera, player, tacos, plates, clock, and the three-phase
//! state machine; the shell feeds it input snapshots and applies the
//! pointer-capture requests it reports back.

use std::time::Instant;

use glam::Vec3;

use crate::camera::FpsCamera;
use crate::input::MovementKeys;

use super::clock::GameClock;
use super::config::GameConfig;
use super::frame::{CameraFrame, PlateFrame, RenderFrame, TacoFrame};
use super::hud;
use super::plates::{PLATE_COUNT, PlateField};
use super::player::Player;
use super::tacos::TacoSystem;

/// The three phases of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting on the start prompt
    NotStarted,
    /// Clock running, plates being scored
    InProgress,
    /// All 100 plates hit; time frozen
    Complete,
}

/// Phase transition that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseChange {
    /// NotStarted -> InProgress
    Started,
    /// InProgress -> Complete
    Completed,
    /// Complete -> NotStarted
    Reset,
}

/// Pointer-capture change requested by a phase transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureRequest {
    /// Hide and confine the cursor
    Capture,
    /// Show and free the cursor
    Release,
}

/// Input snapshot consumed by one tick.
///
/// Built by the shell from the event-loop input state; edge flags
/// (`start_pressed`, `throw_pressed`) fire at most once per physical
/// press.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held movement keys
    pub movement: MovementKeys,
    /// Space went down this tick (start / jump / restart)
    pub start_pressed: bool,
    /// Left mouse went down this tick (throw)
    pub throw_pressed: bool,
    /// Accumulated mouse-look delta since the previous tick
    pub look_delta: (f32, f32),
    /// Whether the pointer is currently captured by the window
    pub pointer_captured: bool,
}

/// What happened during a tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickReport {
    /// Phase transition, if one occurred (at most one per tick)
    pub phase_change: Option<PhaseChange>,
    /// Pointer-capture change the shell should apply
    pub capture_request: Option<CaptureRequest>,
    /// Plates scored this tick
    pub plates_hit: u32,
    /// A taco was thrown this tick
    pub threw: bool,
    /// The player jumped this tick
    pub jumped: bool,
}

/// Central simulation state with a per-tick update.
pub struct GameSession {
    /// Gameplay tuning
    pub config: GameConfig,
    /// First-person view; position mirrors the player eye
    pub camera: FpsCamera,
    /// Player position and vertical physics
    pub player: Player,
    /// Thrown tacos, flying and resting
    pub tacos: TacoSystem,
    /// The 10x10 target grid
    pub plates: PlateField,
    /// Run timer
    pub clock: GameClock,
    phase: GamePhase,
    score: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameSession {
    /// Create a fresh session on the start prompt.
    pub fn new(config: GameConfig) -> Self {
        let camera = FpsCamera::with_position(config.player.start_position);
        let player = Player::new(&config.player);
        let tacos = TacoSystem::new(config.flight, config.throwing.max_active_tacos);

        Self {
            config,
            camera,
            player,
            tacos,
            plates: PlateField::new(),
            clock: GameClock::new(),
            phase: GamePhase::NotStarted,
            score: 0,
        }
    }

    /// Current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Plates hit so far (0..=100).
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Seconds on the run clock: live while in progress, frozen once
    /// complete, `None` before the first start.
    pub fn elapsed_seconds(&self, now: Instant) -> Option<f32> {
        self.clock.elapsed_seconds(now)
    }

    /// Advance the simulation by one tick.
    ///
    /// Reads the input snapshot exactly once, in this order: mouse look,
    /// the start action (start / jump / restart), player movement, throw,
    /// taco physics, collision and scoring, completion check.
    pub fn tick(&mut self, input: &TickInput, now: Instant) -> TickReport {
        let mut report = TickReport::default();

        // Mouse look whenever the pointer is ours, in any phase
        if input.pointer_captured {
            self.camera
                .apply_mouse_delta(input.look_delta.0, input.look_delta.1);
        }

        if input.start_pressed {
            self.handle_start_action(input, now, &mut report);
        }

        // Player physics only run while playing with the pointer captured
        if self.phase == GamePhase::InProgress && input.pointer_captured {
            self.player.update(
                &self.config.player,
                self.camera.forward_xz(),
                self.camera.right_xz(),
                input.movement.forward_axis(),
                input.movement.right_axis(),
            );

            if input.throw_pressed {
                report.threw = self.tacos.throw(
                    self.player.position,
                    self.camera.forward(),
                    self.config.throwing.launch_speed,
                );
            }
        }

        // Camera rides the player eye
        self.camera.position = self.player.position;

        self.tacos.update();
        report.plates_hit = self.scan_collisions();

        if self.phase == GamePhase::InProgress && self.score as usize == PLATE_COUNT {
            self.clock.stop(now);
            self.phase = GamePhase::Complete;
            report.phase_change = Some(PhaseChange::Completed);
            report.capture_request = Some(CaptureRequest::Release);
        }

        report
    }

    /// Dispatch the start action by phase: start, jump, or restart.
    fn handle_start_action(&mut self, input: &TickInput, now: Instant, report: &mut TickReport) {
        match self.phase {
            GamePhase::NotStarted => {
                self.clock.start(now);
                self.phase = GamePhase::InProgress;
                report.phase_change = Some(PhaseChange::Started);
                report.capture_request = Some(CaptureRequest::Capture);
            }
            GamePhase::InProgress => {
                if input.pointer_captured {
                    report.jumped = self.player.jump(&self.config.player);
                }
            }
            GamePhase::Complete => {
                self.reset();
                report.phase_change = Some(PhaseChange::Reset);
                report.capture_request = Some(CaptureRequest::Capture);
            }
        }
    }

    /// Check every flying taco against the unhit plates.
    ///
    /// A matching taco parks on its plate and scores it; the hit flag is
    /// checked and set within this single pass, so a plate can never be
    /// scored twice. Returns the number of plates scored.
    fn scan_collisions(&mut self) -> u32 {
        let radius = self.config.throwing.hit_radius;
        let rest_height = self.config.throwing.rest_height;
        let mut scored = 0;

        let hits: Vec<(usize, usize)> = self
            .tacos
            .flying()
            .filter_map(|(taco_index, position)| {
                self.plates
                    .find_hit(position, radius)
                    .map(|plate_index| (taco_index, plate_index))
            })
            .collect();

        for (taco_index, plate_index) in hits {
            if !self.plates.mark_hit(plate_index) {
                continue;
            }
            let plate_position = self.plates.get(plate_index).position;
            self.tacos.rest_on_plate(taco_index, plate_position, rest_height);
            self.score += 1;
            scored += 1;
        }

        scored
    }

    /// Return to the start prompt: clear score, timestamps, hit flags,
    /// and tacos; put the player back at the start position.
    ///
    /// Reached through the start action while `Complete`, but callable
    /// from any phase.
    pub fn reset(&mut self) {
        self.score = 0;
        self.clock.reset();
        self.plates.reset();
        self.tacos.clear();
        self.player.reset(&self.config.player);
        self.camera.position = self.player.position;
        self.phase = GamePhase::NotStarted;
    }

    /// Current HUD line for this phase.
    pub fn status_line(&self, now: Instant) -> String {
        match self.phase {
            GamePhase::NotStarted => hud::START_PROMPT.to_string(),
            GamePhase::InProgress => match self.clock.elapsed_seconds(now) {
                Some(elapsed) => hud::progress_line(self.score, elapsed),
                None => hud::score_line(self.score),
            },
            GamePhase::Complete => {
                let total = self.clock.elapsed_seconds(now).unwrap_or(0.0);
                hud::completion_line(total)
            }
        }
    }

    /// Build the presentation snapshot for the render driver.
    pub fn render_frame(&self, now: Instant) -> RenderFrame {
        RenderFrame {
            camera: CameraFrame {
                position: self.camera.position,
                yaw: self.camera.yaw,
                pitch: self.camera.pitch,
                forward: self.camera.forward(),
            },
            tacos: self
                .tacos
                .iter()
                .map(|taco| TacoFrame {
                    position: taco.body.position,
                    rotation: taco.body.rotation,
                    resting: !taco.is_flying(),
                })
                .collect(),
            plates: self
                .plates
                .iter()
                .map(|plate| PlateFrame {
                    position: plate.position,
                    hit: plate.hit,
                    color: plate.color().rgb(),
                })
                .collect(),
            status: self.status_line(now),
        }
    }

    /// Drop a taco for tests and tooling: spawn it at an exact position
    /// with an exact velocity direction, bypassing the player.
    #[doc(hidden)]
    pub fn spawn_taco_at(&mut self, position: Vec3, direction: Vec3, speed: f32) -> bool {
        self.tacos.throw(position, direction, speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_input() -> TickInput {
        TickInput {
            start_pressed: true,
            pointer_captured: true,
            ..TickInput::default()
        }
    }

    fn idle_input() -> TickInput {
        TickInput {
            pointer_captured: true,
            ..TickInput::default()
        }
    }

    #[test]
    fn test_new_session_not_started() {
        let session = GameSession::default();
        assert_eq!(session.phase(), GamePhase::NotStarted);
        assert_eq!(session.score(), 0);
        assert_eq!(session.status_line(Instant::now()), hud::START_PROMPT);
    }

    #[test]
    fn test_start_transitions_and_requests_capture() {
        let mut session = GameSession::default();
        let report = session.tick(&start_input(), Instant::now());

        assert_eq!(session.phase(), GamePhase::InProgress);
        assert_eq!(report.phase_change, Some(PhaseChange::Started));
        assert_eq!(report.capture_request, Some(CaptureRequest::Capture));
        assert!(session.clock.is_running());
    }

    #[test]
    fn test_space_jumps_while_in_progress() {
        let mut session = GameSession::default();
        session.tick(&start_input(), Instant::now());

        // Second space press while grounded: jump, no phase change
        let report = session.tick(&start_input(), Instant::now());
        assert!(report.jumped);
        assert_eq!(report.phase_change, None);
        assert_eq!(session.phase(), GamePhase::InProgress);

        // Third press while airborne: no-op
        let report = session.tick(&start_input(), Instant::now());
        assert!(!report.jumped);
    }

    #[test]
    fn test_throw_requires_capture_and_progress() {
        let mut session = GameSession::default();

        // Not started: throw ignored
        let mut input = idle_input();
        input.throw_pressed = true;
        let report = session.tick(&input, Instant::now());
        assert!(!report.threw);
        assert_eq!(session.tacos.len(), 0);

        session.tick(&start_input(), Instant::now());

        // In progress but pointer released: still ignored
        let mut input = TickInput::default();
        input.throw_pressed = true;
        let report = session.tick(&input, Instant::now());
        assert!(!report.threw);

        // In progress and captured: taco flies
        let mut input = idle_input();
        input.throw_pressed = true;
        let report = session.tick(&input, Instant::now());
        assert!(report.threw);
        assert_eq!(session.tacos.flying_count(), 1);
    }

    #[test]
    fn test_movement_ignored_before_start() {
        let mut session = GameSession::default();
        let mut input = idle_input();
        input.movement.forward = true;

        let start = session.player.position;
        session.tick(&input, Instant::now());
        assert_eq!(session.player.position, start);
    }

    #[test]
    fn test_scoring_single_plate() {
        let mut session = GameSession::default();
        session.tick(&start_input(), Instant::now());

        // Drop a taco just above the first plate
        let plate = session.plates.get(0).position;
        session.spawn_taco_at(plate + Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y, 0.1);

        let report = session.tick(&idle_input(), Instant::now());
        assert_eq!(report.plates_hit, 1);
        assert_eq!(session.score(), 1);
        assert!(session.plates.get(0).hit);
        assert_eq!(session.tacos.flying_count(), 0);
        assert_eq!(session.tacos.resting_count(), 1);

        // The taco is parked dead center on the plate
        let taco = session.tacos.get(0);
        assert_eq!(taco.body.position.x, plate.x);
        assert_eq!(taco.body.position.z, plate.z);
        assert_eq!(taco.body.position.y, session.config.throwing.rest_height);
    }

    #[test]
    fn test_score_is_monotonic_and_capped() {
        let mut session = GameSession::default();
        session.tick(&start_input(), Instant::now());

        let mut last_score = 0;
        for plate_index in 0..PLATE_COUNT {
            let plate = session.plates.get(plate_index).position;
            session.spawn_taco_at(plate + Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y, 0.1);
            session.tick(&idle_input(), Instant::now());

            assert!(session.score() >= last_score);
            assert!(session.score() as usize <= PLATE_COUNT);
            last_score = session.score();
        }
        assert_eq!(session.score() as usize, PLATE_COUNT);
    }
}
