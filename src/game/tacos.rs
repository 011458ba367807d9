//! Taco Lifecycle Module
//!
//! Owns every thrown taco through its whole life: `Flying` tacos are
//! integrated each tick and checked against plates; once one lands on a
//! plate it becomes `Resting`, parked on the plate center and excluded
//! from physics and collision but still handed to the renderer.

use glam::Vec3;

use crate::physics::{FlightConfig, TacoBody};

/// Lifecycle state of a taco.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TacoState {
    /// Simulated every tick and eligible to score plates
    Flying,
    /// Landed on a plate; display only
    Resting,
}

/// A thrown taco.
#[derive(Debug, Clone, Copy)]
pub struct Taco {
    /// Physical state (position, velocity, rotation)
    pub body: TacoBody,
    /// Lifecycle state
    pub state: TacoState,
}

impl Taco {
    /// Whether this taco is still being simulated.
    pub fn is_flying(&self) -> bool {
        self.state == TacoState::Flying
    }
}

/// Manages the set of thrown tacos.
pub struct TacoSystem {
    tacos: Vec<Taco>,
    config: FlightConfig,
    /// Maximum number of simultaneously flying tacos.
    pub max_flying: usize,
}

impl TacoSystem {
    /// Create an empty system with the given flight configuration.
    pub fn new(config: FlightConfig, max_flying: usize) -> Self {
        Self {
            tacos: Vec::new(),
            config,
            max_flying,
        }
    }

    /// Throw a taco if under the flying limit.
    ///
    /// Returns `true` if the taco was added.
    pub fn throw(&mut self, position: Vec3, direction: Vec3, speed: f32) -> bool {
        if self.flying_count() >= self.max_flying {
            return false;
        }
        self.tacos.push(Taco {
            body: TacoBody::launch(position, direction, speed),
            state: TacoState::Flying,
        });
        true
    }

    /// Integrate physics for every flying taco. Resting tacos are skipped.
    pub fn update(&mut self) {
        for taco in &mut self.tacos {
            if taco.is_flying() {
                taco.body.step(&self.config);
            }
        }
    }

    /// Park a flying taco on a plate.
    ///
    /// Stops all motion, locks the resting orientation, centers the taco
    /// on the plate at `rest_height`, and moves it to `Resting` so it
    /// drops out of simulation and collision.
    pub fn rest_on_plate(&mut self, index: usize, plate_position: Vec3, rest_height: f32) {
        let taco = &mut self.tacos[index];
        taco.body.settle();
        taco.body.position.x = plate_position.x;
        taco.body.position.z = plate_position.z;
        taco.body.position.y = rest_height;
        taco.state = TacoState::Resting;
    }

    /// Remove every taco (game reset).
    pub fn clear(&mut self) {
        self.tacos.clear();
    }

    /// Number of tacos still being simulated.
    pub fn flying_count(&self) -> usize {
        self.tacos.iter().filter(|t| t.is_flying()).count()
    }

    /// Number of tacos parked on plates.
    pub fn resting_count(&self) -> usize {
        self.tacos.len() - self.flying_count()
    }

    /// Total tacos, flying and resting.
    pub fn len(&self) -> usize {
        self.tacos.len()
    }

    /// Whether no tacos exist at all.
    pub fn is_empty(&self) -> bool {
        self.tacos.is_empty()
    }

    /// Taco by index.
    pub fn get(&self, index: usize) -> &Taco {
        &self.tacos[index]
    }

    /// Iterate all tacos (e.g. for rendering).
    pub fn iter(&self) -> impl Iterator<Item = &Taco> {
        self.tacos.iter()
    }

    /// Indices and positions of flying tacos, for the collision scan.
    pub fn flying(&self) -> impl Iterator<Item = (usize, Vec3)> + '_ {
        self.tacos
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_flying())
            .map(|(i, t)| (i, t.body.position))
    }

    /// Access the flight configuration.
    pub fn config(&self) -> &FlightConfig {
        &self.config
    }
}
