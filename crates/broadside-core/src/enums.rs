//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{POWER_RATIO_OVERRIDE, POWER_RATIO_OVERRIDE_INDEX};

/// Ship class, used to pick the forward/backward engine power ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipClass {
    Battleship,
    Cruiser,
    Destroyer,
    Submarine,
    #[default]
    Other,
}

impl ShipClass {
    /// Ratio between maximum forward and maximum backward engine power.
    ///
    /// One ship index is pinned to a fixed ratio regardless of its class.
    pub fn power_ratio(self, ship_index: &str) -> f64 {
        if ship_index == POWER_RATIO_OVERRIDE_INDEX {
            return POWER_RATIO_OVERRIDE;
        }
        match self {
            ShipClass::Battleship => 4.0,
            ShipClass::Cruiser => 3.0,
            ShipClass::Destroyer => 2.0,
            ShipClass::Submarine => 2.0,
            ShipClass::Other => 4.0,
        }
    }
}

/// Artillery shell type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShellType {
    /// Armor piercing: penetration depends on impact velocity.
    #[default]
    Ap,
    /// High explosive: fixed penetration.
    He,
    /// Semi-armor piercing: fixed penetration.
    Sap,
}

impl ShellType {
    /// Whether penetration is derived from impact velocity.
    pub fn is_velocity_dependent(self) -> bool {
        matches!(self, ShellType::Ap)
    }
}

/// Severity of a simulation diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WarningLevel {
    Info,
    Warning,
}
