// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::float;

/// Tuning parameters for a [`Spring`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Spring stiffness coefficient.
    pub stiffness: f64,
    /// Viscous damping coefficient.
    pub damping: f64,
    /// Mass of the animated value.
    pub mass: f64,
    /// When `true`, the value is pinned to the target the moment it would
    /// cross to the far side of it.
    pub overshoot_clamping: bool,
    /// Displacement below which the spring may come to rest.
    pub rest_displacement_threshold: f64,
    /// Speed below which the spring may come to rest.
    pub rest_speed_threshold: f64,
}

impl Default for SpringConfig {
    /// The viewer's settling spring: heavily overdamped, so the value eases
    /// onto its target without oscillating.
    fn default() -> Self {
        Self {
            stiffness: 1000.0,
            damping: 500.0,
            mass: 3.0,
            overshoot_clamping: true,
            rest_displacement_threshold: 0.01,
            rest_speed_threshold: 0.1,
        }
    }
}

/// A damped-harmonic spring animating one scalar toward a fixed target.
///
/// Each [`tick`](Spring::tick) advances the closed-form solution of the
/// damped oscillator by the elapsed time, so the trajectory is independent of
/// tick granularity. Once both rest thresholds are met the value snaps
/// exactly onto the target and the spring reports itself finished.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    target: f64,
    position: f64,
    velocity: f64,
    // Which side of the target the spring started on; overshoot clamping
    // pins the value once it crosses to the other side.
    from_side: f64,
    finished: bool,
}

impl Spring {
    /// Creates a spring from `from` toward `target` with the default config.
    #[must_use]
    pub fn new(from: f64, target: f64) -> Self {
        Self::with_config(from, target, SpringConfig::default())
    }

    /// Creates a spring from `from` toward `target` with an explicit config.
    #[must_use]
    pub fn with_config(from: f64, target: f64, config: SpringConfig) -> Self {
        Self {
            config,
            target,
            position: from,
            velocity: 0.0,
            from_side: from - target,
            finished: from == target,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.position
    }

    /// The value the spring settles at.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Returns `true` once the spring has come to rest on its target.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances the spring by `dt` seconds and returns the new value.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if self.finished || dt <= 0.0 {
            return self.position;
        }

        let c = self.config;
        let omega0 = float::sqrt(c.stiffness / c.mass);
        let zeta = c.damping / (2.0 * float::sqrt(c.stiffness * c.mass));

        // Displacement-space initial conditions for this tick.
        let x0 = self.position - self.target;
        let v0 = self.velocity;

        let (x, v) = if zeta < 1.0 {
            // Underdamped: decaying oscillation.
            let omega_d = omega0 * float::sqrt(1.0 - zeta * zeta);
            let envelope = float::exp(-zeta * omega0 * dt);
            let (sin, cos) = (float::sin(omega_d * dt), float::cos(omega_d * dt));
            let a = x0;
            let b = (v0 + zeta * omega0 * x0) / omega_d;
            let x = envelope * (a * cos + b * sin);
            let v = envelope
                * ((b * omega_d - zeta * omega0 * a) * cos - (a * omega_d + zeta * omega0 * b) * sin);
            (x, v)
        } else if zeta == 1.0 {
            // Critically damped.
            let envelope = float::exp(-omega0 * dt);
            let c0 = v0 + omega0 * x0;
            let x = envelope * (x0 + c0 * dt);
            let v = envelope * (v0 - omega0 * c0 * dt);
            (x, v)
        } else {
            // Overdamped: two decaying real modes. Expressed directly in
            // mode amplitudes so neither exponential can overflow.
            let omega_d = omega0 * float::sqrt(zeta * zeta - 1.0);
            let r1 = -zeta * omega0 + omega_d;
            let r2 = -zeta * omega0 - omega_d;
            let b = (v0 + zeta * omega0 * x0) / omega_d;
            let m1 = (x0 + b) / 2.0;
            let m2 = (x0 - b) / 2.0;
            let e1 = float::exp(r1 * dt);
            let e2 = float::exp(r2 * dt);
            (m1 * e1 + m2 * e2, m1 * r1 * e1 + m2 * r2 * e2)
        };

        self.position = self.target + x;
        self.velocity = v;

        if c.overshoot_clamping && self.from_side * (self.position - self.target) < 0.0 {
            self.position = self.target;
            self.velocity = 0.0;
            self.finished = true;
        } else if (self.position - self.target).abs() < c.rest_displacement_threshold
            && self.velocity.abs() < c.rest_speed_threshold
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.finished = true;
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::{Spring, SpringConfig};

    const DT: f64 = 1.0 / 60.0;

    fn run_to_rest(spring: &mut Spring) -> usize {
        let mut frames = 0;
        while !spring.is_finished() {
            spring.tick(DT);
            frames += 1;
            assert!(frames < 10_000, "spring failed to settle");
        }
        frames
    }

    #[test]
    fn settles_exactly_on_target_from_above_and_below() {
        for from in [250.0, -120.0, 0.5] {
            let mut spring = Spring::new(from, 0.0);
            run_to_rest(&mut spring);
            assert_eq!(spring.value(), 0.0);
        }
    }

    #[test]
    fn default_spring_never_crosses_its_target() {
        let mut spring = Spring::new(100.0, 0.0);
        while !spring.is_finished() {
            let v = spring.tick(DT);
            assert!(v >= 0.0, "overdamped spring must approach monotonically");
        }
    }

    #[test]
    fn underdamped_spring_is_clamped_at_first_crossing() {
        let config = SpringConfig {
            damping: 10.0,
            ..SpringConfig::default()
        };
        let mut spring = Spring::with_config(100.0, 0.0, config);
        while !spring.is_finished() {
            let v = spring.tick(DT);
            assert!(v >= 0.0, "overshoot clamping must pin the value at the target");
        }
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn starting_on_target_is_immediately_finished() {
        let mut spring = Spring::new(42.0, 42.0);
        assert!(spring.is_finished());
        assert_eq!(spring.tick(DT), 42.0);
    }

    #[test]
    fn trajectory_is_tick_rate_independent() {
        let mut fine = Spring::new(200.0, 0.0);
        let mut coarse = Spring::new(200.0, 0.0);
        for _ in 0..30 {
            fine.tick(DT / 4.0);
            fine.tick(DT / 4.0);
            fine.tick(DT / 4.0);
            fine.tick(DT / 4.0);
            coarse.tick(DT);
        }
        assert!(
            (fine.value() - coarse.value()).abs() < 1e-6,
            "closed-form stepping must not depend on tick granularity"
        );
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut spring = Spring::new(10.0, 0.0);
        let before = spring.tick(DT);
        assert_eq!(spring.tick(0.0), before);
    }
}
