//! Report configuration loaded from JSON

use crate::error::Result;
use crate::events::EventWindow;
use crate::models::{
    AverageGrowthForecaster, ForecastMethod, ForecastModel, HoltWintersParams, SeasonalForecaster,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for building a gold report
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Last date covered by the forecast, inclusive
    pub forecast_end: NaiveDate,
    pub method: ForecastMethod,
    pub holt_winters: HoltWintersParams,
    /// Trailing points used by the average-growth method
    pub growth_lookback: usize,
    /// Window used for events that do not carry their own
    pub event_window: EventWindow,
    /// Points per rolling volatility reading when volatility is derived
    pub volatility_window: usize,
    /// Years used for CAGR; calendar years of the gold history when unset
    pub cagr_years: Option<f64>,
    /// Derive volatility from prices instead of using the supplied series
    pub derive_volatility: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            forecast_end: NaiveDate::from_ymd_opt(2027, 12, 31).unwrap_or_default(),
            method: ForecastMethod::default(),
            holt_winters: HoltWintersParams::default(),
            growth_lookback: 24,
            event_window: EventWindow::default(),
            volatility_window: 12,
            cagr_years: None,
            derive_volatility: false,
        }
    }
}

impl ReportConfig {
    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Forecasting model selected by `method`, validated against its parameters
    pub fn model(&self) -> Result<Box<dyn ForecastModel>> {
        let model: Box<dyn ForecastModel> = match self.method {
            ForecastMethod::Seasonal => Box::new(SeasonalForecaster::new(self.holt_winters)?),
            ForecastMethod::AverageGrowth => {
                Box::new(AverageGrowthForecaster::new(self.growth_lookback)?)
            }
        };
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForecastError;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.forecast_end, NaiveDate::from_ymd_opt(2027, 12, 31).unwrap());
        assert_eq!(config.method, ForecastMethod::Seasonal);
        assert_eq!(config.event_window, EventWindow::new(3, 6));
        assert_eq!(config.volatility_window, 12);
        assert_eq!(config.cagr_years, None);
        assert!(!config.derive_volatility);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ReportConfig::from_json_str(
            r#"{
                "forecast_end": "2026-06-30",
                "method": "average_growth",
                "holt_winters": { "alpha": 0.5 },
                "event_window": { "months_after": 12 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.forecast_end, NaiveDate::from_ymd_opt(2026, 6, 30).unwrap());
        assert_eq!(config.method, ForecastMethod::AverageGrowth);
        assert_eq!(
            config.holt_winters,
            HoltWintersParams {
                alpha: 0.5,
                ..HoltWintersParams::default()
            }
        );
        assert_eq!(config.event_window, EventWindow::new(3, 12));
        assert_eq!(config.growth_lookback, 24);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "cagr_years": 20.0, "derive_volatility": true }}"#).unwrap();

        let config = ReportConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.cagr_years, Some(20.0));
        assert!(config.derive_volatility);
    }

    #[test]
    fn test_load_errors() {
        assert!(matches!(
            ReportConfig::from_json_str("{ not json"),
            Err(ForecastError::Config(_))
        ));
        assert!(matches!(
            ReportConfig::from_json_file("/nonexistent/gold_report.json"),
            Err(ForecastError::Io(_))
        ));
    }

    #[test]
    fn test_model_selection() {
        let config = ReportConfig::default();
        assert!(config.model().unwrap().name().starts_with("Holt-Winters"));

        let growth = ReportConfig {
            method: ForecastMethod::AverageGrowth,
            ..ReportConfig::default()
        };
        assert_eq!(growth.model().unwrap().name(), "Average Growth (lookback=24)");

        let invalid = ReportConfig {
            holt_winters: HoltWintersParams {
                season_length: 1,
                ..HoltWintersParams::default()
            },
            ..ReportConfig::default()
        };
        assert!(matches!(
            invalid.model(),
            Err(ForecastError::InvalidParameter(_))
        ));
    }
}
