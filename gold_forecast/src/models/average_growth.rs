//! Average-growth extrapolation for monthly price series

use crate::data::{ForecastPoint, MonthlySeries};
use crate::error::{ForecastError, Result};
use crate::models::ForecastModel;
use crate::utils::forecast_dates;
use chrono::NaiveDate;
use series_math::{round_to_cents, AverageGrowth};
use tracing::debug;

/// Compounds the mean month-over-month growth of recent history forward
#[derive(Debug, Clone)]
pub struct AverageGrowthForecaster {
    /// Name of the model
    name: String,
    model: AverageGrowth,
}

impl AverageGrowthForecaster {
    /// Create a new forecaster estimating growth over the last `lookback` points
    pub fn new(lookback: usize) -> Result<Self> {
        let model =
            AverageGrowth::new(lookback).map_err(|e| ForecastError::InvalidParameter(e.to_string()))?;

        Ok(Self {
            name: format!("Average Growth (lookback={})", lookback),
            model,
        })
    }
}

impl ForecastModel for AverageGrowthForecaster {
    fn forecast(&self, history: &MonthlySeries, end: NaiveDate) -> Result<Vec<ForecastPoint>> {
        if history.len() < 2 {
            return Err(ForecastError::InsufficientHistory {
                required: 2,
                available: history.len(),
            });
        }

        let fitted = self.model.fit(&history.values())?;
        debug!(growth_rate = fitted.growth_rate(), "fitted average growth");

        Ok(forecast_dates(history.last().date, end)
            .into_iter()
            .enumerate()
            .map(|(i, date)| ForecastPoint::projected(date, round_to_cents(fitted.forecast(i + 1))))
            .collect())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
