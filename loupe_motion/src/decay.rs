// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::float;

/// Tuning parameters for a [`Decay`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecayConfig {
    /// Per-millisecond velocity retention factor, in `(0, 1)`.
    pub deceleration: f64,
    /// Speed below which the decay comes to rest.
    pub rest_velocity: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            deceleration: 0.991,
            rest_velocity: 1.0,
        }
    }
}

/// Exponential velocity decay for one scalar, optionally clamped to a range.
///
/// Velocity decays as `v(t) = v0 * deceleration^(1000 t)` and the position
/// advances by the closed-form integral over each tick, so the trajectory is
/// independent of tick granularity. The motion either dies out when the
/// velocity drops below the rest threshold or stops exactly on a clamp bound,
/// whichever comes first. A fling therefore glides toward the bound the
/// velocity points at and lands on it, or comes to rest short of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decay {
    config: DecayConfig,
    position: f64,
    velocity: f64,
    clamp: Option<(f64, f64)>,
    finished: bool,
}

impl Decay {
    /// Creates a decay from `from` with an initial `velocity` in units/second.
    #[must_use]
    pub fn new(from: f64, velocity: f64) -> Self {
        Self::with_config(from, velocity, DecayConfig::default())
    }

    /// Creates a decay with an explicit config.
    #[must_use]
    pub fn with_config(from: f64, velocity: f64, config: DecayConfig) -> Self {
        Self {
            config,
            position: from,
            velocity,
            clamp: None,
            finished: velocity.abs() < config.rest_velocity,
        }
    }

    /// Restricts the motion to `[min, max]`; reaching a bound ends the decay.
    #[must_use]
    pub fn with_clamp(mut self, min: f64, max: f64) -> Self {
        self.clamp = Some((min, max));
        self
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.position
    }

    /// Remaining velocity in units/second.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns `true` once the motion has died out or hit a clamp bound.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances the decay by `dt` seconds and returns the new value.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if self.finished || dt <= 0.0 {
            return self.position;
        }

        // v(t) = v0 * e^(k t) with k = 1000 ln(deceleration) < 0;
        // the position advances by the integral of v over the tick.
        let k = 1000.0 * float::ln(self.config.deceleration);
        let kv = float::exp(k * dt);
        self.position += self.velocity * (kv - 1.0) / k;
        self.velocity *= kv;

        if let Some((min, max)) = self.clamp {
            if self.position <= min {
                self.position = min;
                self.velocity = 0.0;
                self.finished = true;
            } else if self.position >= max {
                self.position = max;
                self.velocity = 0.0;
                self.finished = true;
            }
        }
        if self.velocity.abs() < self.config.rest_velocity {
            self.finished = true;
        }
        self.position
    }
}
