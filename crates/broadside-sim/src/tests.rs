//! End-to-end tests through the simulator facade.

use broadside_core::constants::*;
use broadside_core::enums::{ShellType, ShipClass};
use broadside_core::error::SimError;
use broadside_core::state::{AccelerationData, DispersionEllipse};
use broadside_core::types::{Engine, Hull, Shell, ShipPropulsion};

use crate::dispersion::{DispersionParams, GunDispersion};
use crate::engine::{SimConfig, Simulator};

fn seeded(seed: u64) -> Simulator {
    Simulator::new(SimConfig {
        seed: Some(seed),
        ..Default::default()
    })
}

fn battleship() -> ShipPropulsion {
    ShipPropulsion {
        index: "PASB018".into(),
        class: ShipClass::Battleship,
        hull: Hull {
            max_speed: 30.0,
            tonnage: 60_000.0,
            engine_power: 200_000.0,
        },
        engine: Engine {
            forward_up_time: 30.0,
            backward_up_time: 15.0,
            forward_forsage: 1.5,
            forward_forsage_max_speed: 5.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn battleship_ap() -> Shell {
    Shell {
        muzzle_velocity: 820.0,
        caliber: 0.406,
        mass: 1225.0,
        air_drag: 0.263,
        krupp: 2500.0,
        shell_type: ShellType::Ap,
        penetration: 0.0,
    }
}

fn battleship_guns() -> GunDispersion {
    GunDispersion {
        ideal_radius: 10.0,
        min_radius: 2.8,
        ideal_distance: 1000.0,
        taper_dist: 6000.0,
        radius_on_zero: 0.2,
        radius_on_delim: 0.6,
        radius_on_max: 0.8,
        delim: 0.5,
    }
}

// ---- Propulsion ----

#[test]
fn test_full_ahead_from_stop() {
    let sim = seeded(1);
    let data = sim.acceleration(&battleship(), &[0, 4]).unwrap();

    assert_eq!(data.time_for_gear.len(), 1);
    assert!(data.is_complete());
    assert_eq!(data.points[0].time, 0.0);
    assert_eq!(data.points[0].speed, 0.0);
    for pair in data.points.windows(2) {
        assert!(pair[1].speed >= pair[0].speed, "speed dropped at t = {}", pair[1].time);
        assert!(pair[1].time > pair[0].time);
    }
    let last = data.points.last().unwrap();
    assert!((last.speed - 30.0).abs() < SETTLE_SPEED_TOLERANCE);
    assert!((data.total_time() - data.time_for_gear[0]).abs() < 1e-9);
}

#[test]
fn test_repeated_notch_is_a_single_point() {
    let sim = seeded(1);
    let data = sim.acceleration(&battleship(), &[2, 2]).unwrap();
    assert!(data.time_for_gear.is_empty());
    assert_eq!(data.points.len(), 1);
    assert!((data.points[0].speed - 15.0).abs() < 1e-12);
}

#[test]
fn test_one_settling_time_per_distinct_transition() {
    let sim = seeded(1);
    let data = sim
        .acceleration(&battleship(), &[0, 4, 4, 2, -1, 0, 0, 1])
        .unwrap();
    // Collapses to 0, 4, 2, -1, 0, 1.
    assert_eq!(data.time_for_gear.len(), 5);
    assert!(data.time_for_gear.iter().all(|t| *t > 0.0));
    let sum: f64 = data.time_for_gear.iter().sum();
    assert!((sum - data.total_time()).abs() < 1e-6);
}

#[test]
fn test_speed_stays_within_hull_limits() {
    let sim = seeded(1);
    let ship = battleship();
    let data = sim.acceleration(&ship, &[4, -1, 4]).unwrap();
    let reverse = ship.hull.max_speed / REVERSE_SPEED_DIVISOR + REVERSE_SPEED_OFFSET;
    for point in &data.points {
        assert!(point.speed <= ship.hull.max_speed + 1e-9);
        assert!(point.speed >= -reverse - 1e-9);
    }
}

#[test]
fn test_bad_throttle_is_rejected() {
    let sim = seeded(1);
    assert_eq!(
        sim.acceleration(&battleship(), &[0, -2]),
        Err(SimError::InvalidThrottle(-2))
    );
}

// ---- Ballistics ----

#[test]
fn test_range_zero_row_uses_muzzle_velocity() {
    let sim = seeded(1);
    let shell = battleship_ap();
    let table = sim.ballistics(&shell, 23_000.0, None).unwrap();
    let first = &table.rows()[0];
    assert_eq!(first.range, 0.0);
    assert_eq!(first.impact_velocity, 820.0);
    // 0.000469055 * 820^1.48221 * 0.406^-0.6521 * 1225^0.5506 * 2500/2400
    assert!((first.penetration - 919.2511).abs() < 1e-3);
}

#[test]
fn test_table_ranges_strictly_increase() {
    let sim = seeded(1);
    let table = sim.ballistics(&battleship_ap(), 23_000.0, None).unwrap();
    assert!(table.len() > 100);
    assert!(table.warnings().is_empty());
    for pair in table.rows().windows(2) {
        assert!(pair[1].range > pair[0].range);
    }
    let rows = table.rows();
    assert!(rows[rows.len() - 1].penetration < rows[0].penetration);
    assert!(table.max_range() <= 23_000.0 * MAX_RANGE_OVERSCAN);
    assert!(table.max_range() > 15_000.0);
}

#[test]
fn test_flattest_shot_barely_slows() {
    let sim = seeded(1);
    let table = sim.ballistics(&battleship_ap(), 23_000.0, None).unwrap();
    let flat = &table.rows()[1];
    assert!(flat.impact_velocity < 820.0 && flat.impact_velocity > 815.0);
    assert!(flat.range < 50.0);
    assert!(flat.flight_time > 0.0);
}

#[test]
fn test_he_penetration_is_constant() {
    let sim = seeded(1);
    let he = Shell {
        shell_type: ShellType::He,
        penetration: 68.0,
        ..battleship_ap()
    };
    let table = sim.ballistics(&he, 23_000.0, None).unwrap();
    assert!(table.iter().all(|row| row.penetration == 68.0));

    let overridden = sim.ballistics(&he, 23_000.0, Some(102.0)).unwrap();
    assert!(overridden.iter().all(|row| row.penetration == 102.0));
}

#[test]
fn test_bad_shell_is_rejected() {
    let sim = seeded(1);
    let shell = Shell {
        mass: 0.0,
        ..battleship_ap()
    };
    assert!(matches!(
        sim.ballistics(&shell, 23_000.0, None),
        Err(SimError::InvalidShell(_))
    ));
}

// ---- Dispersion ----

#[test]
fn test_dispersion_inside_range() {
    let mut sim = seeded(42);
    let ellipse = sim
        .dispersion(&battleship_guns(), &battleship_ap(), 23_000.0, 15_000.0, 1.0, 2.0)
        .unwrap();
    assert!(ellipse.is_valid);
    assert_eq!(ellipse.real_points.len(), DEFAULT_SHOT_COUNT);
    assert!(ellipse.water_vertical_radius > ellipse.vertical_radius);
    assert!(ellipse.half_horizontal_radius <= ellipse.horizontal_radius);
    assert!(ellipse.half_vertical_radius <= ellipse.vertical_radius);
    assert!(ellipse.half_water_vertical_radius <= ellipse.water_vertical_radius);
    assert!(ellipse.half_perpendicular_vertical_radius <= ellipse.perpendicular_vertical_radius);
}

#[test]
fn test_dispersion_beyond_table_is_invalid() {
    let mut sim = seeded(42);
    let ellipse = sim
        .dispersion(&battleship_guns(), &battleship_ap(), 23_000.0, 60_000.0, 1.0, 2.0)
        .unwrap();
    assert_eq!(ellipse, DispersionEllipse::invalid());
    assert_eq!(ellipse.horizontal_radius, 0.0);
    assert!(ellipse.real_points.is_empty());
}

#[test]
fn test_dispersion_rejects_zero_sigma() {
    let mut sim = seeded(42);
    let err = sim
        .dispersion(&battleship_guns(), &battleship_ap(), 23_000.0, 15_000.0, 1.0, 0.0)
        .unwrap_err();
    assert_eq!(err, SimError::InvalidSigma(0.0));
}

#[test]
fn test_shot_count_from_config() {
    let mut sim = Simulator::new(SimConfig {
        seed: Some(5),
        shot_count: 25,
    });
    let ellipse = sim
        .dispersion(&battleship_guns(), &battleship_ap(), 23_000.0, 12_000.0, 1.0, 1.8)
        .unwrap();
    assert_eq!(ellipse.real_points.len(), 25);
    assert_eq!(ellipse.perpendicular_points.len(), 25);
}

#[test]
fn test_modifier_scales_radii() {
    let guns = battleship_guns();
    let shell = battleship_ap();
    let stock = seeded(4)
        .dispersion(&guns, &shell, 23_000.0, 12_000.0, 1.0, 2.0)
        .unwrap();
    let upgraded = seeded(4)
        .dispersion(&guns, &shell, 23_000.0, 12_000.0, 0.9, 2.0)
        .unwrap();
    assert!((upgraded.horizontal_radius - 0.9 * stock.horizontal_radius).abs() < 1e-9);
    assert!((upgraded.vertical_radius - 0.9 * stock.vertical_radius).abs() < 1e-9);
    let half_water = 0.9 * stock.half_water_vertical_radius;
    assert!((upgraded.half_water_vertical_radius - half_water).abs() < 1e-9);
}

#[test]
fn test_tiny_sigma_completes() {
    let mut sim = seeded(8);
    let ellipse = sim
        .dispersion(&battleship_guns(), &battleship_ap(), 23_000.0, 12_000.0, 1.0, 1e-6)
        .unwrap();
    assert!(ellipse.is_valid);
    assert_eq!(ellipse.real_points.len(), DEFAULT_SHOT_COUNT);
    let ratio = ellipse.half_horizontal_radius / ellipse.horizontal_radius;
    assert!((ratio - 0.5).abs() < 1e-3);
}

#[test]
fn test_table_reuse_matches_direct_query() {
    let guns = battleship_guns();
    let shell = battleship_ap();

    let mut direct = seeded(9);
    let a = direct.dispersion(&guns, &shell, 23_000.0, 12_000.0, 1.0, 2.0).unwrap();

    let mut reuse = seeded(9);
    let table = reuse.ballistics(&shell, 23_000.0, None).unwrap();
    let params = DispersionParams::new(23_000.0, 12_000.0, 2.0);
    let b = reuse.dispersion_with_table(&guns, &table, &params).unwrap();

    assert_eq!(a, b);
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut sim_a = seeded(12345);
    let mut sim_b = seeded(12345);
    for aim in [8_000.0, 12_000.0, 16_000.0] {
        let a = sim_a
            .dispersion(&battleship_guns(), &battleship_ap(), 23_000.0, aim, 1.0, 2.0)
            .unwrap();
        let b = sim_b
            .dispersion(&battleship_guns(), &battleship_ap(), 23_000.0, aim, 1.0, 2.0)
            .unwrap();
        assert_eq!(a.real_points, b.real_points, "point clouds diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut sim_a = seeded(111);
    let mut sim_b = seeded(222);
    let a = sim_a
        .dispersion(&battleship_guns(), &battleship_ap(), 23_000.0, 12_000.0, 1.0, 2.0)
        .unwrap();
    let b = sim_b
        .dispersion(&battleship_guns(), &battleship_ap(), 23_000.0, 12_000.0, 1.0, 2.0)
        .unwrap();
    assert_ne!(a.real_points, b.real_points);
}

// ---- Serialization ----

#[test]
fn test_results_serialize() {
    let mut sim = seeded(3);
    let accel = sim.acceleration(&battleship(), &[0, 4, 2]).unwrap();
    let json = serde_json::to_string(&accel).unwrap();
    let back: AccelerationData = serde_json::from_str(&json).unwrap();
    assert_eq!(back.time_for_gear, accel.time_for_gear);
    assert_eq!(back.points.len(), accel.points.len());

    let ellipse = sim
        .dispersion(&battleship_guns(), &battleship_ap(), 23_000.0, 12_000.0, 1.0, 2.0)
        .unwrap();
    let value = serde_json::to_value(&ellipse).unwrap();
    assert_eq!(value["is_valid"], true);
    assert_eq!(value["real_points"].as_array().map(Vec::len), Some(DEFAULT_SHOT_COUNT));

    let config: SimConfig = serde_json::from_str(r#"{"seed":7,"shot_count":10}"#).unwrap();
    assert_eq!(config.seed, Some(7));
}
