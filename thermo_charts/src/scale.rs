// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales: mappings from data values into plot coordinates.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a scale mapping `domain` onto `range`.
    ///
    /// For a y axis pass the range as `(plot.y1, plot.y0)` so larger values sit higher.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a domain value into range space.
    ///
    /// A zero-width domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns nice tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Specification for a linear scale: a domain plus policies, no range yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
    /// Extend the domain to round tick values.
    pub nice: bool,
    /// Extend the domain so it contains `0`.
    pub zero: bool,
}

impl ScaleLinearSpec {
    /// Creates a spec with neither `nice` nor `zero`.
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            domain,
            nice: false,
            zero: false,
        }
    }

    /// Enables or disables nice-domain behavior.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// Enables or disables including zero in the domain.
    pub fn with_zero(mut self, zero: bool) -> Self {
        self.zero = zero;
        self
    }

    /// Returns the domain after applying `zero` and then `nice`.
    pub fn resolved_domain(&self, tick_count: usize) -> (f64, f64) {
        let (mut lo, mut hi) = self.domain;
        if lo > hi {
            core::mem::swap(&mut lo, &mut hi);
        }
        if self.zero {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }
        if !self.nice {
            return (lo, hi);
        }
        let ticks = nice_ticks(lo, hi, tick_count);
        match (ticks.first(), ticks.last()) {
            (Some(&first), Some(&last)) if ticks.len() >= 2 => (first, last),
            _ => (lo, hi),
        }
    }

    /// Instantiates a scale over `range` using the resolved domain.
    pub fn instantiate(&self, range: (f64, f64), tick_count: usize) -> ScaleLinear {
        ScaleLinear::new(self.resolved_domain(tick_count), range)
    }
}

/// Returns round tick values spanning `[min, max]`, roughly `count` of them.
///
/// The first and last ticks enclose the input interval.
pub fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f.min(10_000.0) as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// Returns `(min, max)` of the finite values, or `None` if there are none.
pub fn infer_domain(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// A discrete band scale for categorical axes.
///
/// `count` equal bands are laid out over the range with inner padding between bands and
/// outer padding at both ends, both expressed as a fraction of the band step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a band scale with `0.1` inner and outer padding.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if self.count == 0 {
            return 0.0;
        }
        let denom = n - self.padding_inner + 2.0 * self.padding_outer;
        if denom <= 0.0 {
            0.0
        } else {
            (r1 - r0).abs() / denom
        }
    }

    /// Width of one band.
    pub fn band_width(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Start position of band `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let start = r0.min(r1);
        let step = self.step();
        start + step * self.padding_outer + step * index as f64
    }

    /// Center position of band `index`.
    pub fn center(&self, index: usize) -> f64 {
        self.x(index) + 0.5 * self.band_width()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn linear_maps_endpoints_and_inverts_for_y() {
        let s = ScaleLinear::new((-10.0, 25.0), (300.0, 0.0));
        assert_eq!(s.map(-10.0), 300.0);
        assert_eq!(s.map(25.0), 0.0);
        assert!(s.map(0.0) < 300.0 && s.map(0.0) > 0.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = ScaleLinear::new((3.0, 3.0), (10.0, 20.0));
        assert_eq!(s.map(99.0), 10.0);
    }

    #[test]
    fn zero_and_nice_extend_the_domain() {
        let spec = ScaleLinearSpec::new((-8.0, 23.0))
            .with_zero(true)
            .with_nice(true);
        assert_eq!(spec.resolved_domain(5), (-10.0, 25.0));

        let positive = ScaleLinearSpec::new((3.0, 9.0)).with_zero(true);
        assert_eq!(positive.resolved_domain(5), (0.0, 9.0));
    }

    #[test]
    fn nice_ticks_enclose_the_interval() {
        let t = nice_ticks(-8.0, 23.0, 5);
        assert_eq!(t.first().copied(), Some(-10.0));
        assert_eq!(t.last().copied(), Some(25.0));
        assert_eq!(t.len(), 8);
    }

    #[test]
    fn infer_domain_skips_non_finite() {
        assert_eq!(infer_domain(&[]), None);
        assert_eq!(infer_domain(&[f64::NAN]), None);
        assert_eq!(infer_domain(&[2.0, f64::INFINITY, -1.0]), Some((-1.0, 2.0)));
    }

    #[test]
    fn bands_tile_the_range() {
        let band = ScaleBand::new((0.0, 120.0), 12).with_padding(0.2, 0.1);
        let first = band.x(0);
        let last_end = band.x(11) + band.band_width();
        assert!((first - band.step() * 0.1).abs() < 1e-9);
        assert!((last_end + band.step() * 0.1 - 120.0).abs() < 1e-9);
        assert!(band.center(0) < band.center(1));
    }

    #[test]
    fn empty_band_scale_is_zero_width() {
        let band = ScaleBand::new((0.0, 100.0), 0);
        assert_eq!(band.step(), 0.0);
        assert_eq!(band.band_width(), 0.0);
    }
}
