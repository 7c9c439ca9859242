//! Volatility series: derivation from prices and averaging

use crate::data::TimeSeriesPoint;
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Volatility reading for one date
///
/// Units depend on the origin: the built-in yearly series is in percent, while
/// [`rolling_volatility`] reports in price units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityPoint {
    pub date: NaiveDate,
    pub volatility: f64,
}

impl VolatilityPoint {
    pub fn new(date: NaiveDate, volatility: f64) -> Self {
        Self { date, volatility }
    }
}

/// Rolling standard deviation of prices over the `window` points before each date.
///
/// With monthly data a window of 12 covers one year. The first reading is
/// dated at index `window`, so a series of `n` points gives `n - window`
/// readings (none if `n <= window`).
pub fn rolling_volatility(prices: &[TimeSeriesPoint], window: usize) -> Result<Vec<VolatilityPoint>> {
    if window == 0 {
        return Err(ForecastError::InvalidParameter(
            "Volatility window must be greater than zero".to_string(),
        ));
    }

    let values: Vec<f64> = prices.iter().map(|p| p.value).collect();
    let readings = series_math::rolling_std_devs(&values, window)?;

    Ok(prices
        .iter()
        .skip(window)
        .zip(readings)
        .map(|(point, volatility)| VolatilityPoint::new(point.date, volatility))
        .collect())
}

/// Arithmetic mean of the volatility readings, `0.0` for an empty series
pub fn average_volatility(series: &[VolatilityPoint]) -> f64 {
    let readings: Vec<f64> = series.iter().map(|p| p.volatility).collect();
    series_math::mean(&readings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_average_volatility() {
        let series = [
            VolatilityPoint::new(ymd(2008, 1, 1), 18.0),
            VolatilityPoint::new(ymd(2009, 1, 1), 16.0),
            VolatilityPoint::new(ymd(2010, 1, 1), 14.0),
        ];
        assert_relative_eq!(average_volatility(&series), 16.0);
        assert_eq!(average_volatility(&[]), 0.0);
    }

    #[test]
    fn test_rolling_volatility_dates_and_values() {
        let prices: Vec<TimeSeriesPoint> = [10.0, 20.0, 30.0, 30.0]
            .iter()
            .enumerate()
            .map(|(i, &v)| TimeSeriesPoint::new(ymd(2000, i as u32 + 1, 1), v))
            .collect();

        let readings = rolling_volatility(&prices, 3).unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].date, ymd(2000, 4, 1));
        assert_relative_eq!(readings[0].volatility, (200.0f64 / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_rolling_volatility_short_series() {
        let prices = [TimeSeriesPoint::new(ymd(2000, 1, 1), 10.0)];
        assert!(rolling_volatility(&prices, 12).unwrap().is_empty());
        assert!(rolling_volatility(&prices, 0).is_err());
    }
}
