//! Forecasting models that extend a monthly series to a target date

use crate::data::{ForecastPoint, ForecastSeries, MonthlySeries};
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub mod average_growth;
pub mod holt_winters;

pub use average_growth::AverageGrowthForecaster;
pub use holt_winters::{HoltWintersParams, SeasonalForecaster};

/// Model that projects a monthly series forward
pub trait ForecastModel: Debug {
    /// Forecast points dated the 1st of each month after the last point of
    /// `history`, through `end` inclusive
    fn forecast(&self, history: &MonthlySeries, end: NaiveDate) -> Result<Vec<ForecastPoint>>;

    /// Name of the model
    fn name(&self) -> &str;

    /// History followed by its forecast
    fn extend(&self, history: &MonthlySeries, end: NaiveDate) -> Result<ForecastSeries> {
        let forecast = self.forecast(history, end)?;
        ForecastSeries::new(history, forecast)
    }
}

/// Which model a report uses to project gold prices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMethod {
    /// Holt-Winters triple exponential smoothing
    #[default]
    Seasonal,
    /// Mean monthly growth compounded forward
    AverageGrowth,
}

impl std::str::FromStr for ForecastMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "seasonal" | "holt_winters" => Ok(Self::Seasonal),
            "average_growth" | "growth" => Ok(Self::AverageGrowth),
            other => Err(format!("Unknown forecast method: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_method_parsing() {
        assert_eq!("seasonal".parse::<ForecastMethod>(), Ok(ForecastMethod::Seasonal));
        assert_eq!("Holt-Winters".parse::<ForecastMethod>(), Ok(ForecastMethod::Seasonal));
        assert_eq!(
            "average-growth".parse::<ForecastMethod>(),
            Ok(ForecastMethod::AverageGrowth)
        );
        assert!("arima".parse::<ForecastMethod>().is_err());
    }

    #[test]
    fn test_forecast_method_json() {
        let method: ForecastMethod = serde_json::from_str(r#""average_growth""#).unwrap();
        assert_eq!(method, ForecastMethod::AverageGrowth);
        assert_eq!(ForecastMethod::default(), ForecastMethod::Seasonal);
    }
}
