//! Propulsion integrator: ship speed response to a sequence of throttle notches.
//!
//! Engine power ramps toward the commanded notch while quadratic hull drag
//! opposes the current speed. Each transition is integrated with explicit
//! Euler steps until the speed settles on the notch's limit or the step cap
//! is hit, in which case a warning is recorded and the next transition runs.

use broadside_core::constants::*;
use broadside_core::error::SimError;
use broadside_core::events::SimWarning;
use broadside_core::state::{AccelerationData, AccelerationPoint};
use broadside_core::throttle::{Throttle, ThrottleSequence};
use broadside_core::types::ShipPropulsion;

use crate::drag::hull_drag;

/// Engine figures derived once per run from hull, engine and modifiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropulsionProfile {
    pub max_forward_speed: f64,
    pub max_reverse_speed: f64,
    pub max_power_forward: f64,
    pub max_power_backward: f64,
    /// Power gained per step while ramping forward.
    pub power_increase_forward: f64,
    /// Power gained per step while ramping backward.
    pub power_increase_backward: f64,
    pub forward_forsage: f64,
    pub backward_forsage: f64,
    pub forward_forsage_max_speed: f64,
    pub backward_forsage_max_speed: f64,
}

impl PropulsionProfile {
    pub fn new(ship: &ShipPropulsion) -> Self {
        let hull = &ship.hull;
        let engine = &ship.engine;
        let modifiers = &ship.modifiers;
        let boost = &ship.speed_boost;

        let speed_multiplier = (1.0 + engine.speed_coef) * modifiers.speed;
        let speed_multiplier_sq = speed_multiplier * speed_multiplier;

        let max_forward_speed = hull.max_speed * speed_multiplier;
        let max_reverse_speed =
            (hull.max_speed / REVERSE_SPEED_DIVISOR + REVERSE_SPEED_OFFSET) * speed_multiplier;

        let power_ratio = hull.engine_power / hull.tonnage;
        let max_power_forward = power_ratio.powf(POWER_RATIO_EXPONENT) * speed_multiplier_sq;
        let max_power_backward =
            max_power_forward / ship.class.power_ratio(&ship.index) * speed_multiplier_sq;

        let time_forward = boosted(
            engine.forward_up_time,
            modifiers.forward_up_time,
            boost.forward_up_time,
        );
        let time_backward = boosted(
            engine.backward_up_time,
            modifiers.backward_up_time,
            boost.backward_up_time,
        );

        Self {
            max_forward_speed,
            max_reverse_speed,
            max_power_forward,
            max_power_backward,
            power_increase_forward: PROPULSION_DT * max_power_forward / time_forward,
            power_increase_backward: PROPULSION_DT * max_power_backward / time_backward,
            forward_forsage: boosted(
                engine.forward_forsage,
                modifiers.forward_forsage,
                boost.forward_forsage,
            ),
            backward_forsage: boosted(
                engine.backward_forsage,
                modifiers.backward_forsage,
                boost.backward_forsage,
            ),
            forward_forsage_max_speed: boosted(
                engine.forward_forsage_max_speed,
                modifiers.forward_forsage_max_speed,
                boost.forward_forsage_max_speed,
            ),
            backward_forsage_max_speed: boosted(
                engine.backward_forsage_max_speed,
                modifiers.backward_forsage_max_speed,
                boost.backward_forsage_max_speed,
            ),
        }
    }

    /// Speed the ship settles at for a notch (negative in reverse).
    pub fn speed_limit(&self, throttle: Throttle) -> f64 {
        if throttle.is_reverse() {
            -self.max_reverse_speed
        } else {
            self.max_forward_speed * throttle.fraction()
        }
    }

    /// Power that holds `speed` steady at a notch.
    fn holding_power(&self, throttle: Throttle, speed: f64) -> f64 {
        if speed >= 0.0 {
            self.max_power_forward * throttle.fraction().powi(2)
        } else {
            -self.max_power_backward
        }
    }

    fn drag(&self, speed: f64) -> f64 {
        hull_drag(
            speed,
            self.max_forward_speed,
            self.max_reverse_speed,
            self.max_power_forward,
            self.max_power_backward,
        )
    }
}

/// Speed boost overrides replace the modifier-adjusted value when non-zero.
fn boosted(base: f64, multiplier: f64, override_value: f64) -> f64 {
    if override_value != 0.0 {
        override_value
    } else {
        base * multiplier
    }
}

/// Integrator state carried between steps.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionState {
    pub speed: f64,
    pub power: f64,
    pub time: f64,
    /// Set on a shift to a lower forward notch, cleared on a shift upward.
    pub downshift: bool,
}

impl MotionState {
    /// Start at rest on the first notch: its speed limit and holding power.
    pub fn at_notch(profile: &PropulsionProfile, throttle: Throttle) -> Self {
        let speed = profile.speed_limit(throttle);
        Self {
            speed,
            power: profile.holding_power(throttle, speed),
            time: 0.0,
            downshift: false,
        }
    }

    /// Update the downshift flag for a transition from `from` to `to`.
    fn shift(self, from: Throttle, to: Throttle) -> Self {
        let downshift = if to > from {
            false
        } else if from.notch() > 0 && to.notch() > 0 {
            true
        } else {
            self.downshift
        };
        Self { downshift, ..self }
    }
}

/// Advance one `PROPULSION_DT` step toward `target`.
///
/// Returns the new state and whether the transition has settled.
pub fn step(
    state: MotionState,
    target: Throttle,
    profile: &PropulsionProfile,
) -> (MotionState, bool) {
    let limit = profile.speed_limit(target);
    let speed = state.speed;

    let (power, direction) = if speed < limit {
        let exponent = if state.downshift { 2 } else { 0 };
        let ceiling = profile.max_power_forward * target.fraction().powi(exponent);
        let power = (state.power.max(0.0) + profile.power_increase_forward).min(ceiling);
        (power, 1.0)
    } else if speed > limit {
        let power = (state.power.min(0.0) - profile.power_increase_backward)
            .max(-profile.max_power_backward);
        (power, -1.0)
    } else {
        (profile.holding_power(target, speed), 0.0)
    };

    let drag = profile.drag(speed);
    let mut acceleration = (power + drag) * f64::abs(direction);

    if (0.0..profile.forward_forsage_max_speed).contains(&speed) && power > 0.0 {
        acceleration = profile.max_power_forward * profile.forward_forsage + drag;
    } else if speed > -profile.backward_forsage_max_speed && speed <= 0.0 && power < 0.0 {
        acceleration = -profile.max_power_backward * profile.backward_forsage + drag;
    }

    let mut new_speed = speed + PROPULSION_DT * acceleration;
    let mut settled = false;

    // Overshoot is judged on the post-update speed.
    let overshoot =
        (direction >= 0.0 && new_speed > limit) || (direction <= 0.0 && new_speed < limit);
    if overshoot && power * new_speed > 0.0 {
        new_speed = limit;
        settled = true;
    }
    if (new_speed - limit).abs() < SETTLE_SPEED_TOLERANCE
        && acceleration.abs() < SETTLE_ACCELERATION_TOLERANCE
    {
        new_speed = limit;
        settled = true;
    }

    let next = MotionState {
        speed: new_speed,
        power,
        time: state.time + PROPULSION_DT,
        downshift: state.downshift,
    };
    (next, settled)
}

/// Simulate a ship through a throttle command list.
///
/// Notches are validated and collapsed before anything runs. The trace
/// starts with one point at t = 0 on the first notch; each later notch adds
/// one settling time and its integration samples.
pub fn simulate(ship: &ShipPropulsion, notches: &[i32]) -> Result<AccelerationData, SimError> {
    let sequence = ThrottleSequence::new(notches)?;
    ship.validate()?;
    Ok(simulate_sequence(&PropulsionProfile::new(ship), &sequence))
}

/// Run an already validated sequence against a derived profile.
pub fn simulate_sequence(
    profile: &PropulsionProfile,
    sequence: &ThrottleSequence,
) -> AccelerationData {
    let mut state = MotionState::at_notch(profile, sequence.first());
    let mut data = AccelerationData {
        time_for_gear: Vec::with_capacity(sequence.transition_count()),
        points: vec![AccelerationPoint {
            speed: state.speed,
            time: state.time,
        }],
        warnings: Vec::new(),
    };

    for (from, to) in sequence.transitions() {
        state = state.shift(from, to);
        let start_time = state.time;
        let mut settled = false;
        let mut steps = 0;

        while steps < PROPULSION_MAX_STEPS {
            let (next, done) = step(state, to, profile);
            state = next;
            steps += 1;
            data.points.push(AccelerationPoint {
                speed: state.speed,
                time: state.time,
            });
            if done {
                settled = true;
                break;
            }
        }

        if !settled {
            data.warnings.push(SimWarning::TransitionTruncated {
                from,
                to,
                steps,
                speed: state.speed,
            });
        }
        data.time_for_gear.push(state.time - start_time);
    }

    data
}
