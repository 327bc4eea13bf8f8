// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transcendental float functions, routed to std or libm.
//!
//! `f64::abs`/`clamp`/`min`/`max` live in `core`; only the functions below
//! need a math library. With both features enabled, std wins.

#[cfg(feature = "std")]
pub(crate) fn exp(x: f64) -> f64 {
    x.exp()
}

#[cfg(feature = "std")]
pub(crate) fn ln(x: f64) -> f64 {
    x.ln()
}

#[cfg(feature = "std")]
pub(crate) fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(feature = "std")]
pub(crate) fn sin(x: f64) -> f64 {
    x.sin()
}

#[cfg(feature = "std")]
pub(crate) fn cos(x: f64) -> f64 {
    x.cos()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn exp(x: f64) -> f64 {
    libm::exp(x)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn ln(x: f64) -> f64 {
    libm::log(x)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn sin(x: f64) -> f64 {
    libm::sin(x)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn cos(x: f64) -> f64 {
    libm::cos(x)
}
