//! Dispersion measures for price windows
//!
//! Contains:
//! - Population standard deviation of a caller-supplied window
//! - A streaming rolling standard deviation over a fixed period
//! - Trailing-window standard deviations for a whole series

use crate::{MathError, Result};
use statrs::statistics::Statistics;
use std::collections::VecDeque;

/// Population standard deviation (divides by N) of the given window.
///
/// Returns `0.0` for an empty window.
pub fn population_std_dev(window: &[f64]) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    window.iter().population_std_dev()
}

/// Standard deviation of each trailing window of `period` values.
///
/// For every index `i` in `period..values.len()` the result holds the
/// population standard deviation of `values[i - period..i]`, so the window
/// ends just before the point it is reported against.
pub fn rolling_std_devs(values: &[f64], period: usize) -> Result<Vec<f64>> {
    let mut rolling = RollingStandardDeviation::new(period)?;
    let mut readings = Vec::with_capacity(values.len().saturating_sub(period));
    for &value in values {
        if rolling.is_ready() {
            readings.push(rolling.value()?);
        }
        rolling.update(value);
    }

    Ok(readings)
}

/// Rolling standard deviation over the last `period` values
#[derive(Debug, Clone)]
pub struct RollingStandardDeviation {
    period: usize,
    values: VecDeque<f64>,
}

impl RollingStandardDeviation {
    /// Create a new RollingStandardDeviation with the specified period
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(MathError::InvalidInput(
                "Period must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            period,
            values: VecDeque::with_capacity(period + 1),
        })
    }

    /// Push a new value, dropping the oldest once the window is full
    pub fn update(&mut self, value: f64) {
        self.values.push_back(value);
        if self.values.len() > self.period {
            self.values.pop_front();
        }
    }

    /// Whether a full window has been seen
    pub fn is_ready(&self) -> bool {
        self.values.len() == self.period
    }

    /// Get the current standard deviation
    pub fn value(&self) -> Result<f64> {
        if !self.is_ready() {
            return Err(MathError::InsufficientData(format!(
                "Not enough data for standard deviation calculation. Need {} values, have {}.",
                self.period,
                self.values.len()
            )));
        }

        Ok(self.values.iter().population_std_dev())
    }

    /// Get the current period
    pub fn period(&self) -> usize {
        self.period
    }

    /// Reset the RollingStandardDeviation, clearing all values
    pub fn reset(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_population_std_dev() {
        // sqrt(((10-20)^2 + (20-20)^2 + (30-20)^2) / 3)
        let expected = (200.0f64 / 3.0).sqrt();
        assert_relative_eq!(population_std_dev(&[10.0, 20.0, 30.0]), expected, epsilon = 1e-12);
        assert_eq!(population_std_dev(&[]), 0.0);
        assert_eq!(population_std_dev(&[42.0]), 0.0);
    }

    #[test]
    fn test_rolling_standard_deviation() {
        let mut std_dev = RollingStandardDeviation::new(3).unwrap();

        std_dev.update(10.0);
        std_dev.update(20.0);
        assert!(matches!(std_dev.value(), Err(MathError::InsufficientData(_))));

        std_dev.update(30.0);
        assert_relative_eq!(std_dev.value().unwrap(), (200.0f64 / 3.0).sqrt(), epsilon = 1e-12);

        // Oldest value (10) drops out
        std_dev.update(20.0);
        let expected = population_std_dev(&[20.0, 30.0, 20.0]);
        assert_relative_eq!(std_dev.value().unwrap(), expected, epsilon = 1e-12);

        std_dev.reset();
        assert!(!std_dev.is_ready());
    }

    #[test]
    fn test_rolling_std_devs_windows_end_before_point() {
        let values = [1.0, 2.0, 3.0, 4.0, 100.0];
        let result = rolling_std_devs(&values, 2).unwrap();

        assert_eq!(result.len(), 3);
        assert_relative_eq!(result[0], 0.5);
        assert_relative_eq!(result[1], 0.5);
        assert_relative_eq!(result[2], 0.5);
    }

    #[test]
    fn test_rolling_std_devs_short_input() {
        assert!(rolling_std_devs(&[1.0, 2.0], 12).unwrap().is_empty());
        assert!(rolling_std_devs(&[1.0, 2.0], 0).is_err());
    }
}
