//! Seasonal (Holt-Winters) forecaster for monthly price series

use crate::data::{ForecastPoint, MonthlySeries};
use crate::error::{ForecastError, Result};
use crate::models::ForecastModel;
use crate::utils::forecast_dates;
use chrono::NaiveDate;
use series_math::{round_to_cents, TripleExponentialSmoothing};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Smoothing constants and cycle length for [`SeasonalForecaster`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoltWintersParams {
    /// Level smoothing
    pub alpha: f64,
    /// Trend smoothing
    pub beta: f64,
    /// Seasonal smoothing
    pub gamma: f64,
    /// Months per seasonal cycle
    pub season_length: usize,
}

impl Default for HoltWintersParams {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            beta: 0.1,
            gamma: 0.2,
            season_length: 12,
        }
    }
}

/// Triple exponential smoothing over the first-of-month points of a series
#[derive(Debug, Clone)]
pub struct SeasonalForecaster {
    /// Name of the model
    name: String,
    model: TripleExponentialSmoothing,
}

impl SeasonalForecaster {
    /// Create a new seasonal forecaster, validating the parameters
    pub fn new(params: HoltWintersParams) -> Result<Self> {
        let model = TripleExponentialSmoothing::new(
            params.alpha,
            params.beta,
            params.gamma,
            params.season_length,
        )
        .map_err(|e| ForecastError::InvalidParameter(e.to_string()))?;

        Ok(Self {
            name: model_name(&params),
            model,
        })
    }
}

fn model_name(params: &HoltWintersParams) -> String {
    format!(
        "Holt-Winters (alpha={}, beta={}, gamma={}, season={})",
        params.alpha, params.beta, params.gamma, params.season_length
    )
}

impl Default for SeasonalForecaster {
    fn default() -> Self {
        Self {
            name: model_name(&HoltWintersParams::default()),
            model: TripleExponentialSmoothing::default(),
        }
    }
}

impl ForecastModel for SeasonalForecaster {
    fn forecast(&self, history: &MonthlySeries, end: NaiveDate) -> Result<Vec<ForecastPoint>> {
        // Mid-month quotes are left out of training
        let values = history.month_start_values();
        let required = self.model.season_length();
        if values.len() < required {
            return Err(ForecastError::InsufficientHistory {
                required,
                available: values.len(),
            });
        }

        let fitted = self.model.fit(&values)?;
        debug!(
            training = fitted.observations(),
            level = fitted.level(),
            trend = fitted.trend(),
            "fitted seasonal model"
        );

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
