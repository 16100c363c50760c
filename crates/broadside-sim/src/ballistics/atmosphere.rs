//! International standard atmosphere, troposphere layer only.

use broadside_core::constants::{
    AIR_MOLAR_MASS, GAS_CONSTANT, GRAVITY, SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE,
    TEMPERATURE_LAPSE_RATE,
};

/// Air state at one altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    /// Temperature (K).
    pub temperature: f64,
    /// Pressure (Pa).
    pub pressure: f64,
    /// Density (kg/m³).
    pub density: f64,
}

/// Barometric exponent g·M / (R·L).
fn pressure_exponent() -> f64 {
    GRAVITY * AIR_MOLAR_MASS / (GAS_CONSTANT * TEMPERATURE_LAPSE_RATE)
}

/// Standard atmosphere at `altitude` metres above sea level.
///
/// Above the altitude where the lapse rate reaches 0 K the air is treated as vacuum.
pub fn at_altitude(altitude: f64) -> Atmosphere {
    let temperature = SEA_LEVEL_TEMPERATURE - TEMPERATURE_LAPSE_RATE * altitude;
    if temperature <= 0.0 {
        return Atmosphere {
            temperature: 0.0,
            pressure: 0.0,
            density: 0.0,
        };
    }
    let pressure =
        SEA_LEVEL_PRESSURE * (temperature / SEA_LEVEL_TEMPERATURE).powf(pressure_exponent());
    let density = pressure * AIR_MOLAR_MASS / (GAS_CONSTANT * temperature);
    Atmosphere {
        temperature,
        pressure,
        density,
    }
}

/// Air density only; the trajectory loop needs nothing else.
pub fn density(altitude: f64) -> f64 {
    at_altitude(altitude).density
}
