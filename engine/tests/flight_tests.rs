//! Flight Tests - Taco Trajectories Over Full Arcs
//!
//! Long-running integration checks on the taco flight model: floor
//! containment across a fan of launch directions, and the land-slide-stop
//! sequence.

use glam::Vec3;
use taco_toss_engine::physics::{FlightConfig, TacoBody};

#[test]
fn test_floor_containment_across_launch_fan() {
    let config = FlightConfig::default();

    // Launch in a ring of directions, including steeply downward ones
    for i in 0..24 {
        let angle = i as f32 * std::f32::consts::TAU / 24.0;
        for pitch in [-0.9f32, -0.4, 0.0, 0.4] {
            let direction = Vec3::new(
                angle.sin() * pitch.cos(),
                pitch.sin(),
                -angle.cos() * pitch.cos(),
            );
            let mut taco = TacoBody::launch(Vec3::new(0.0, 2.0, 20.0), direction, 0.5);

            for tick in 0..1500 {
                taco.step(&config);
                assert!(
                    taco.position.y >= config.ground_height,
                    "direction {direction:?} sank to y={} at tick {tick}",
                    taco.position.y
                );
            }
        }
    }
}

#[test]
fn test_thrown_taco_lands_and_stops() {
    let config = FlightConfig::default();
    let mut taco = TacoBody::launch(Vec3::new(0.0, 2.0, 20.0), Vec3::NEG_Z, 0.5);

    let mut landed_at = None;
    for tick in 0..2000 {
        taco.step(&config);
        if landed_at.is_none() && taco.on_ground(&config) {
            landed_at = Some(tick);
        }
    }

    let landed_at = landed_at.expect("taco never reached the floor");
    // Full speed forward from 1.5m above the threshold: lands in well
    // under a second of ticks
    assert!(landed_at < 120, "landed at tick {landed_at}");

    // Friction plus the stop epsilon bring it to a dead stop
    assert_eq!(taco.velocity, Vec3::ZERO);
    assert_eq!(taco.position.y, config.ground_height);

    // Resting orientation is flat
    assert_eq!(taco.rotation.x, std::f32::consts::FRAC_PI_2);
}

#[test]
fn test_forward_throw_travels_before_stopping() {
    let config = FlightConfig::default();
    let start = Vec3::new(0.0, 2.0, 20.0);
    let mut taco = TacoBody::launch(start, Vec3::NEG_Z, 0.5);

    for _ in 0..2000 {
        taco.step(&config);
    }

    // It flew meters down-range, not straight down
    let travelled = (taco.position - start).length();
    assert!(travelled > 5.0, "only travelled {travelled}");
    assert!(taco.position.z < start.z);
}

#[test]
fn test_straight_drop_stays_put_horizontally() {
    let config = FlightConfig::default();
    let mut taco = TacoBody::launch(Vec3::new(3.0, 4.0, -7.0), Vec3::NEG_Y, 0.5);

    for _ in 0..500 {
        taco.step(&config);
    }

    assert_eq!(taco.position.x, 3.0);
    assert_eq!(taco.position.z, -7.0);
    assert_eq!(taco.position.y, config.ground_height);
}
