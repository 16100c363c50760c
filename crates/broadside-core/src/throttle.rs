//! Throttle commands fed to the propulsion integrator.
//!
//! Notches are validated on construction; sequences collapse repeated
//! notches so every adjacent pair is a real transition.

use serde::{Deserialize, Serialize};

use crate::constants::FORWARD_NOTCHES;
use crate::error::SimError;

/// A discrete throttle setting: -1 = full reverse, 0 = stop, 1..=4 = quarter steps ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Throttle(i32);

impl Throttle {
    pub const FULL_REVERSE: Throttle = Throttle(-1);
    pub const STOP: Throttle = Throttle(0);
    pub const FULL_AHEAD: Throttle = Throttle(4);

    pub fn new(notch: i32) -> Result<Self, SimError> {
        if (-1..=4).contains(&notch) {
            Ok(Self(notch))
        } else {
            Err(SimError::InvalidThrottle(notch))
        }
    }

    pub fn notch(self) -> i32 {
        self.0
    }

    pub fn is_reverse(self) -> bool {
        self.0 < 0
    }

    /// Fraction of full ahead (notch / 4). Negative for reverse.
    pub fn fraction(self) -> f64 {
        self.0 as f64 / FORWARD_NOTCHES
    }
}

impl TryFrom<i32> for Throttle {
    type Error = SimError;

    fn try_from(notch: i32) -> Result<Self, Self::Error> {
        Throttle::new(notch)
    }
}

impl From<Throttle> for i32 {
    fn from(throttle: Throttle) -> Self {
        throttle.0
    }
}

/// Non-empty throttle command list with consecutive duplicates collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThrottleSequence(Vec<Throttle>);

impl ThrottleSequence {
    /// Validate every notch, then drop repeats of the previous notch.
    pub fn new(notches: &[i32]) -> Result<Self, SimError> {
        let mut collapsed: Vec<Throttle> = Vec::with_capacity(notches.len());
        for &notch in notches {
            let throttle = Throttle::new(notch)?;
            if collapsed.last() != Some(&throttle) {
                collapsed.push(throttle);
            }
        }
        if collapsed.is_empty() {
            return Err(SimError::EmptyThrottleSequence);
        }
        Ok(Self(collapsed))
    }

    pub fn first(&self) -> Throttle {
        self.0[0]
    }

    pub fn notches(&self) -> &[Throttle] {
        &self.0
    }

    /// Adjacent (from, to) pairs, one per transition.
    pub fn transitions(&self) -> impl Iterator<Item = (Throttle, Throttle)> + '_ {
        self.0.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn transition_count(&self) -> usize {
        self.0.len() - 1
    }
}
