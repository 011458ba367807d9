//! Plate Field Module
//!
//! The 100 target plates, laid out once in a 10x10 grid on the arena
//! floor. Plates are never created or destroyed after startup; scoring
//! flips their hit flag and reset clears it.

use glam::Vec3;
use static_assertions::const_assert_eq;

/// Rows in the plate grid.
pub const PLATE_ROWS: usize = 10;
/// Columns in the plate grid.
pub const PLATE_COLS: usize = 10;
/// Total number of plates; hitting them all completes the game.
pub const PLATE_COUNT: usize = 100;

const_assert_eq!(PLATE_ROWS * PLATE_COLS, PLATE_COUNT);

/// Distance between neighboring plate centers.
const PLATE_SPACING: f32 = 5.0;
/// Height of a plate's center above the floor.
const PLATE_BASE_HEIGHT: f32 = 0.05;

/// Display color of a plate, derived from its hit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlateColor {
    /// Not hit yet
    White,
    /// Hit
    Green,
}

impl PlateColor {
    /// RGB triple for the renderer.
    pub fn rgb(self) -> [f32; 3] {
        match self {
            Self::White => [1.0, 1.0, 1.0],
            Self::Green => [0.0, 1.0, 0.0],
        }
    }
}

/// A single target plate.
#[derive(Debug, Clone, Copy)]
pub struct Plate {
    /// Fixed world position of the plate center
    pub position: Vec3,
    /// Whether a taco has landed on this plate
    pub hit: bool,
}

impl Plate {
    /// Display color derived from the hit flag.
    pub fn color(&self) -> PlateColor {
        if self.hit {
            PlateColor::Green
        } else {
            PlateColor::White
        }
    }
}

/// The full grid of target plates.
#[derive(Debug, Clone)]
pub struct PlateField {
    plates: Vec<Plate>,
}

impl Default for PlateField {
    fn default() -> Self {
        Self::new()
    }
}

impl PlateField {
    /// Lay out the grid, centered on the arena origin.
    pub fn new() -> Self {
        let half_extent = (PLATE_COLS - 1) as f32 * PLATE_SPACING * 0.5;
        let plates = (0..PLATE_COUNT)
            .map(|i| {
                let row = i / PLATE_COLS;
                let col = i % PLATE_COLS;
                Plate {
                    position: Vec3::new(
                        col as f32 * PLATE_SPACING - half_extent,
                        PLATE_BASE_HEIGHT,
                        row as f32 * PLATE_SPACING - half_extent,
                    ),
                    hit: false,
                }
            })
            .collect();
        Self { plates }
    }

    /// Number of plates hit so far.
    pub fn hit_count(&self) -> usize {
        self.plates.iter().filter(|p| p.hit).count()
    }

    /// Whether every plate has been hit.
    pub fn all_hit(&self) -> bool {
        self.plates.iter().all(|p| p.hit)
    }

    /// Find the first unhit plate within `radius` of `position`.
    ///
    /// Plates already hit are skipped, so a plate can never match twice.
    pub fn find_hit(&self, position: Vec3, radius: f32) -> Option<usize> {
        self.plates
            .iter()
            .position(|p| !p.hit && p.position.distance(position) < radius)
    }

    /// Mark a plate as hit.
    ///
    /// Returns `false` if the plate was already hit; the caller must not
    /// score in that case.
    pub fn mark_hit(&mut self, index: usize) -> bool {
        let plate = &mut self.plates[index];
        if plate.hit {
            return false;
        }
        plate.hit = true;
        true
    }

    /// Clear every hit flag (game reset).
    pub fn reset(&mut self) {
        for plate in &mut self.plates {
            plate.hit = false;
        }
    }

    /// Plate by index.
    pub fn get(&self, index: usize) -> &Plate {
        &self.plates[index]
    }

    /// Iterate all plates in grid order.
    pub fn iter(&self) -> impl Iterator<Item = &Plate> {
        self.plates.iter()
    }

    /// Number of plates (always [`PLATE_COUNT`]).
    pub fn len(&self) -> usize {
        self.plates.len()
    }

    /// Always `false`; present for the conventional pair with `len`.
    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout() {
        let field = PlateField::new();
        assert_eq!(field.len(), PLATE_COUNT);

        // First plate is the grid corner
        assert_eq!(field.get(0).position, Vec3::new(-22.5, 0.05, -22.5));
        // Last plate is the opposite corner
        assert_eq!(field.get(99).position, Vec3::new(22.5, 0.05, 22.5));
        // Second plate is one spacing along the column axis
        assert_eq!(field.get(1).position, Vec3::new(-17.5, 0.05, -22.5));
    }

    #[test]
    fn test_grid_is_centered() {
        let field = PlateField::new();
        let sum: Vec3 = field.iter().map(|p| p.position).sum();
        let center = sum / PLATE_COUNT as f32;
        assert!(center.x.abs() < 1e-4);
        assert!(center.z.abs() < 1e-4);
    }

    #[test]
    fn test_color_follows_hit_flag() {
        let mut field = PlateField::new();
        assert_eq!(field.get(3).color(), PlateColor::White);

        field.mark_hit(3);
        assert_eq!(field.get(3).color(), PlateColor::Green);
        assert_eq!(field.get(3).color().rgb(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_mark_hit_only_once() {
        let mut field = PlateField::new();
        assert!(field.mark_hit(7));
        assert!(!field.mark_hit(7));
        assert_eq!(field.hit_count(), 1);
    }

    #[test]
    fn test_find_hit_skips_hit_plates() {
        let mut field = PlateField::new();
        let target = field.get(0).position;

        assert_eq!(field.find_hit(target, 1.5), Some(0));
        field.mark_hit(0);
        // Same spot no longer matches; neighbors are 5.0 away
        assert_eq!(field.find_hit(target, 1.5), None);
    }

    #[test]
    fn test_find_hit_radius_boundary() {
        let field = PlateField::new();
        let target = field.get(0).position;

        // Just inside the radius
        let near = target + Vec3::new(1.49, 0.0, 0.0);
        assert_eq!(field.find_hit(near, 1.5), Some(0));

        // Exactly at the radius: strict less-than, no hit
        let edge = target + Vec3::new(1.5, 0.0, 0.0);
        assert_eq!(field.find_hit(edge, 1.5), None);
    }

    #[test]
    fn test_reset_clears_all_hits() {
        let mut field = PlateField::new();
        for i in 0..PLATE_COUNT {
            field.mark_hit(i);
        }
        assert!(field.all_hit());

        field.reset();
        assert_eq!(field.hit_count(), 0);
        assert!(!field.all_hit());
    }
}
