// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sample dataset.

use core::fmt;

/// A calendar month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    /// January.
    Jan,
    /// February.
    Feb,
    /// March.
    Mar,
    /// April.
    Apr,
    /// May.
    May,
    /// June.
    Jun,
    /// July.
    Jul,
    /// August.
    Aug,
    /// September.
    Sep,
    /// October.
    Oct,
    /// November.
    Nov,
    /// December.
    Dec,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Oct,
        Self::Nov,
        Self::Dec,
    ];

    /// The upper-case three-letter label, e.g. `"JAN"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jan => "JAN",
            Self::Feb => "FEB",
            Self::Mar => "MAR",
            Self::Apr => "APR",
            Self::May => "MAY",
            Self::Jun => "JUN",
            Self::Jul => "JUL",
            Self::Aug => "AUG",
            Self::Sep => "SEP",
            Self::Oct => "OCT",
            Self::Nov => "NOV",
            Self::Dec => "DEC",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One month's temperature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemperatureRecord {
    /// Month of the reading.
    pub month: Month,
    /// Temperature in degrees Celsius.
    pub celsius: f64,
}

impl TemperatureRecord {
    /// Creates a record.
    pub const fn new(month: Month, celsius: f64) -> Self {
        Self { month, celsius }
    }
}

/// The twelve sample readings, January through December.
pub const TEMPERATURES: [TemperatureRecord; 12] = [
    TemperatureRecord::new(Month::Jan, -8.0),
    TemperatureRecord::new(Month::Feb, -5.0),
    TemperatureRecord::new(Month::Mar, 2.0),
    TemperatureRecord::new(Month::Apr, 9.0),
    TemperatureRecord::new(Month::May, 15.0),
    TemperatureRecord::new(Month::Jun, 20.0),
    TemperatureRecord::new(Month::Jul, 23.0),
    TemperatureRecord::new(Month::Aug, 21.0),
    TemperatureRecord::new(Month::Sep, 15.0),
    TemperatureRecord::new(Month::Oct, 8.0),
    TemperatureRecord::new(Month::Nov, -4.0),
    TemperatureRecord::new(Month::Dec, -6.0),
];

/// Returns the sample readings in calendar order.
pub fn temperatures() -> &'static [TemperatureRecord] {
    &TEMPERATURES
}

/// Arithmetic mean of the readings, or `None` for an empty slice.
pub fn mean_celsius(records: &[TemperatureRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let sum: f64 = records.iter().map(|r| r.celsius).sum();
    Some(sum / records.len() as f64)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn dataset_covers_the_year_in_order() {
        let months: Vec<Month> = temperatures().iter().map(|r| r.month).collect();
        assert_eq!(months, Month::ALL);
        let labels: Vec<&str> = months.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            [
                "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV",
                "DEC"
            ]
        );
        assert_eq!(Month::Sep.to_string(), "SEP");
    }

    #[test]
    fn readings_match_the_sample() {
        let values: Vec<f64> = temperatures().iter().map(|r| r.celsius).collect();
        assert_eq!(
            values,
            [
                -8.0, -5.0, 2.0, 9.0, 15.0, 20.0, 23.0, 21.0, 15.0, 8.0, -4.0, -6.0
            ]
        );
        assert_eq!(values.iter().sum::<f64>(), 90.0);
    }

    #[test]
    fn mean_is_sum_over_count() {
        assert_eq!(mean_celsius(temperatures()), Some(7.5));
        assert_eq!(mean_celsius(&[]), None);
        assert_eq!(
            mean_celsius(&[TemperatureRecord::new(Month::Jan, -3.5)]),
            Some(-3.5)
        );
    }
}
