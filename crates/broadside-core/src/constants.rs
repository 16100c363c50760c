//! Simulation constants and tuning parameters.

// --- Propulsion ---

/// Propulsion integration step (seconds).
pub const PROPULSION_DT: f64 = 0.01;

/// Maximum integration steps for a single throttle transition.
pub const PROPULSION_MAX_STEPS: u32 = 20_000;

/// Speed tolerance (knots) within which a transition counts as settled.
pub const SETTLE_SPEED_TOLERANCE: f64 = 0.055;

/// Acceleration below which a transition near its limit counts as settled.
pub const SETTLE_ACCELERATION_TOLERANCE: f64 = 0.25;

/// Exponent applied to the power-to-tonnage ratio for forward power.
pub const POWER_RATIO_EXPONENT: f64 = 0.42;

/// Reverse speed is `max_speed / REVERSE_SPEED_DIVISOR + REVERSE_SPEED_OFFSET`.
pub const REVERSE_SPEED_DIVISOR: f64 = 4.0;

/// Constant reverse speed bonus (knots).
pub const REVERSE_SPEED_OFFSET: f64 = 4.9;

/// Number of forward throttle notches (full ahead).
pub const FORWARD_NOTCHES: f64 = 4.0;

/// Ship index whose forward/backward power ratio is pinned regardless of class.
pub const POWER_RATIO_OVERRIDE_INDEX: &str = "PASC045";

/// Power ratio returned for `POWER_RATIO_OVERRIDE_INDEX`.
pub const POWER_RATIO_OVERRIDE: f64 = 3.0;

// --- Ballistics ---

/// Trajectory integration step (seconds).
pub const TRAJECTORY_DT: f64 = 0.02;

/// Number of launch angles in the sweep.
pub const ANGLE_COUNT: usize = 600;

/// Launch angle increment (radians, ~0.1°).
pub const ANGLE_STEP_RAD: f64 = 0.00174533;

/// Ballistic tables cover this multiple of the requested max range.
pub const MAX_RANGE_OVERSCAN: f64 = 1.5;

/// Step bound for a single launch angle (~2000 s of flight).
pub const MAX_TRAJECTORY_STEPS: u32 = 100_000;

/// Game-time scale; real flight time is divided by this before storage.
pub const TIME_SCALE: f64 = 2.61;

// --- Standard atmosphere (troposphere) ---

/// Sea-level standard temperature (K).
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15;

/// Temperature lapse rate (K/m).
pub const TEMPERATURE_LAPSE_RATE: f64 = 0.0065;

/// Sea-level standard pressure (Pa).
pub const SEA_LEVEL_PRESSURE: f64 = 101_325.0;

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.8;

/// Molar mass of dry air (kg/mol).
pub const AIR_MOLAR_MASS: f64 = 0.0289644;

/// Universal gas constant (J/(mol·K)).
pub const GAS_CONSTANT: f64 = 8.31447;

// --- Penetration ---

pub const PENETRATION_COEFFICIENT: f64 = 0.00046905491615181766;
pub const PENETRATION_VELOCITY_EXPONENT: f64 = 1.4822064892953855;
pub const PENETRATION_CALIBER_EXPONENT: f64 = -0.6521;
pub const PENETRATION_MASS_EXPONENT: f64 = 0.5506;

/// Krupp value the penetration formula is normalised against.
pub const REFERENCE_KRUPP: f64 = 2400.0;

// --- Dispersion ---

/// Metres per BigWorld distance unit.
pub const BW_TO_METERS: f64 = 30.0;

/// Scale of the log compression applied to short-falling shots (metres).
pub const DISPERSION_LOG_SCALE: f64 = 300.0;

/// Default Monte-Carlo shot count.
pub const DEFAULT_SHOT_COUNT: usize = 1000;
