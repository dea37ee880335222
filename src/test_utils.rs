// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Viewport math is all `f32`; these `approx` macros handle rounding noise
//! that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;
