//! Forecasting implementations for monthly price series
//!
//! Contains:
//! - Triple Exponential Smoothing (multiplicative Holt-Winters)
//! - Average Growth extrapolation
//!
//! Both are deterministic: the same inputs and parameters always produce
//! bit-identical forecasts.

use crate::{MathError, Result};

/// Minimum number of trailing observations used for training
const MIN_TRAINING_WINDOW: usize = 24;

fn check_smoothing_constant(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 || value >= 1.0 {
        return Err(MathError::InvalidInput(format!(
            "{} must be between 0 and 1 (exclusive), got {}",
            name, value
        )));
    }
    Ok(())
}

/// Triple Exponential Smoothing (Holt-Winters, multiplicative seasonality)
///
/// ```text
/// Level:    L_t = α (x_t / S_s) + (1 - α)(L_{t-1} + T_{t-1})
/// Trend:    T_t = β (L_t - L_{t-1}) + (1 - β) T_{t-1}
/// Season:   S_s = γ (x_t / L_t) + (1 - γ) S_s
/// Forecast: F_{n+h} = (L_n + h T_n) S_{(n + h - 1) mod m}
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripleExponentialSmoothing {
    alpha: f64,
    beta: f64,
    gamma: f64,
    season_length: usize,
}

impl Default for TripleExponentialSmoothing {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            beta: 0.1,
            gamma: 0.2,
            season_length: 12,
        }
    }
}

impl TripleExponentialSmoothing {
    /// Create a new Triple Exponential Smoothing with the specified parameters
    pub fn new(alpha: f64, beta: f64, gamma: f64, season_length: usize) -> Result<Self> {
        check_smoothing_constant("Alpha", alpha)?;
        check_smoothing_constant("Beta", beta)?;
        check_smoothing_constant("Gamma", gamma)?;
        if season_length < 2 {
            return Err(MathError::InvalidInput(
                "Season length must be at least 2".to_string(),
            ));
        }

        Ok(Self {
            alpha,
            beta,
            gamma,
            season_length,
        })
    }

    /// Level smoothing constant
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Trend smoothing constant
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Seasonal smoothing constant
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Number of periods in one seasonal cycle
    pub fn season_length(&self) -> usize {
        self.season_length
    }

    /// Number of trailing observations the model trains on
    pub fn training_window(&self) -> usize {
        MIN_TRAINING_WINDOW.max(self.season_length * 2)
    }

    /// Fit the model on the trailing training window of `values`.
    ///
    /// Needs at least one full season of strictly positive, finite values.
    pub fn fit(&self, values: &[f64]) -> Result<FittedHoltWinters> {
        let m = self.season_length;
        let start = values.len().saturating_sub(self.training_window());
        let training = &values[start..];
        let n = training.len();

        if n < m {
            return Err(MathError::InsufficientData(format!(
                "Holt-Winters needs at least {} values, have {}",
                m, n
            )));
        }
        if let Some(bad) = training.iter().find(|v| !v.is_finite() || **v <= 0.0) {
            return Err(MathError::InvalidInput(format!(
                "Multiplicative seasonality needs positive values, got {}",
                bad
            )));
        }

        let mut level = training[..m].iter().sum::<f64>() / m as f64;

        // Average per-period change between the first two seasons, bounded by
        // what the training window actually covers
        let trend_end = (2 * m).min(n);
        let mut trend = if trend_end > m {
            (m..trend_end)
                .map(|i| (training[i] - training[i - m]) / m as f64)
                .sum::<f64>()
                / (trend_end - m) as f64
        } else {
            0.0
        };

        let mut seasonal = vec![0.0; m];
        let mut cycles = vec![0usize; m];
        for (i, &value) in training.iter().enumerate() {
            let base = level + trend * i as f64;
            if base == 0.0 {
                return Err(MathError::CalculationError(format!(
                    "Initial level and trend cancel out at index {}",
                    i
                )));
            }
            seasonal[i % m] += value / base;
            cycles[i % m] += 1;
        }
        for (index, count) in seasonal.iter_mut().zip(cycles.iter()) {
            *index /= *count as f64;
        }

        for (i, &value) in training.iter().enumerate() {
            let s = i % m;
            if seasonal[s] == 0.0 {
                return Err(MathError::CalculationError(format!(
                    "Seasonal index {} collapsed to zero",
                    s
                )));
            }

            let old_level = level;
            let old_trend = trend;
            level = self.alpha * (value / seasonal[s]) + (1.0 - self.alpha) * (old_level + old_trend);
            trend = self.beta * (level - old_level) + (1.0 - self.beta) * old_trend;

            if level == 0.0 {
                return Err(MathError::CalculationError(format!(
                    "Level collapsed to zero at index {}",
                    i
                )));
            }
            seasonal[s] = self.gamma * (value / level) + (1.0 - self.gamma) * seasonal[s];
        }

        Ok(FittedHoltWinters {
            level,
            trend,
            seasonal,
            observations: n,
        })
    }
}

/// Smoothed state after training a [`TripleExponentialSmoothing`] model
#[derive(Debug, Clone, PartialEq)]
pub struct FittedHoltWinters {
    level: f64,
    trend: f64,
    seasonal: Vec<f64>,
    observations: usize,
}

impl FittedHoltWinters {
    /// Final smoothed level
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Final smoothed trend per period
    pub fn trend(&self) -> f64 {
        self.trend
    }

    /// Seasonal indices, one per position in the cycle
    pub fn seasonal(&self) -> &[f64] {
        &self.seasonal
    }

    /// Number of observations the model was trained on
    pub fn observations(&self) -> usize {
        self.observations
    }

    /// Forecast `h` periods past the last training observation (`h >= 1`)
    pub fn forecast(&self, h: usize) -> f64 {
        let m = self.seasonal.len();
        let s = (self.observations + h.max(1) - 1) % m;
        (self.level + self.trend * h as f64) * self.seasonal[s]
    }

    /// Forecasts for `h = 1..=horizon`
    pub fn forecast_horizon(&self, horizon: usize) -> Vec<f64> {
        (1..=horizon).map(|h| self.forecast(h)).collect()
    }
}

/// Average period-over-period growth, compounded forward from the last value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageGrowth {
    lookback: usize,
}

impl Default for AverageGrowth {
    fn default() -> Self {
        Self {
            lookback: MIN_TRAINING_WINDOW,
        }
    }
}

impl AverageGrowth {
    /// Create a new Average Growth model looking back over `lookback` values
    pub fn new(lookback: usize) -> Result<Self> {
        if lookback < 2 {
            return Err(MathError::InvalidInput(
                "Lookback must be at least 2 for a growth rate".to_string(),
            ));
        }
        Ok(Self { lookback })
    }

    /// Number of trailing values used to estimate growth
    pub fn lookback(&self) -> usize {
        self.lookback
    }

    /// Estimate the mean growth rate over the trailing `lookback` values
    pub fn fit(&self, values: &[f64]) -> Result<FittedAverageGrowth> {
        let start = values.len().saturating_sub(self.lookback);
        let recent = &values[start..];
        if recent.len() < 2 {
            return Err(MathError::InsufficientData(format!(
                "Average growth needs at least 2 values, have {}",
                recent.len()
            )));
        }

        let mut total_growth = 0.0;
        for pair in recent.windows(2) {
            if pair[0] == 0.0 {
                return Err(MathError::CalculationError(
                    "Cannot compute growth from a zero value".to_string(),
                ));
            }
            total_growth += (pair[1] - pair[0]) / pair[0];
        }

        Ok(FittedAverageGrowth {
            growth_rate: total_growth / (recent.len() - 1) as f64,
            last_value: recent[recent.len() - 1],
        })
    }
}

/// Growth rate and anchor value from a fitted [`AverageGrowth`] model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedAverageGrowth {
    growth_rate: f64,
    last_value: f64,
}

impl FittedAverageGrowth {
    /// Mean growth per period, as a fraction
    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    /// Forecast `h` periods past the last observed value
    pub fn forecast(&self, h: usize) -> f64 {
        self.last_value * (1.0 + self.growth_rate).powf(h as f64)
    }
}
