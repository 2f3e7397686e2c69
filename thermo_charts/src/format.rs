// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for tick labels and annotations.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats `value` with exactly `decimals` fractional digits, like C's `%.Nf`.
///
/// Rounding is Rust's `{:.N}` (round-half-to-even on the decimal representation), and
/// negative values that round to zero keep their sign (`-0`), as `printf` does.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Formats a tick value using just enough decimals to distinguish ticks `step` apart.
///
/// Ticks that land on zero are printed as `0` regardless of floating-point sign noise.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = decimals_for_step(step);
    let v = if value.abs() < step.abs() * 1e-9 {
        0.0
    } else {
        value
    };
    format_fixed(v, decimals)
}

fn decimals_for_step(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 || step >= 1.0 {
        return 0;
    }
    let d = (-step.log10()).ceil();
    if d <= 0.0 {
        0
    } else {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "steps below 1 give a small positive digit count, capped at 12"
        )]
        {
            d.min(12.0) as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_matches_printf_zero_decimals() {
        assert_eq!(format_fixed(-8.0, 0), "-8");
        assert_eq!(format_fixed(23.0, 0), "23");
        assert_eq!(format_fixed(6.6, 0), "7");
    }

    #[test]
    fn tick_decimals_follow_step() {
        assert_eq!(format_tick(10.0, 5.0), "10");
        assert_eq!(format_tick(0.5, 0.5), "0.5");
        assert_eq!(format_tick(0.25, 0.05), "0.25");
        assert_eq!(format_tick(-1e-17, 5.0), "0");
    }
}
