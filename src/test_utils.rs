// SPDX-License-Identifier: MPL-2.0
//! Test helpers for float comparisons.
//!
//! Drag offsets, progress fractions and opacities are all `f32`; compare
//! them with the `approx` macros instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for pixel offsets and fractions computed from millisecond
/// clocks.
pub const F32_EPSILON: f32 = 1e-4;
