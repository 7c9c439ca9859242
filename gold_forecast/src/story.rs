//! End-to-end pipeline: interpolate, forecast, then report

use crate::config::ReportConfig;
use crate::data::{interpolate_monthly, ForecastPoint, ForecastSeries, MonthlySeries, TimeSeriesPoint};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::events::MarketEvent;
use crate::metrics::{build_report, MetricsReport, ReportInputs};
use crate::utils::is_month_start;
use crate::volatility::{rolling_volatility, VolatilityPoint};
use serde::Serialize;
use tracing::debug;

/// Everything the presentation layer consumes for one report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldStory {
    /// Name of the model that produced the forecast
    pub model: String,
    pub gold: ForecastSeries,
    pub equity: MonthlySeries,
    pub inflation: MonthlySeries,
    pub gold_volatility: Vec<VolatilityPoint>,
    pub equity_volatility: Vec<VolatilityPoint>,
    pub events: Vec<MarketEvent>,
    pub metrics: MetricsReport,
}

impl GoldStory {
    /// Run the full pipeline over `dataset`
    pub fn build(dataset: &Dataset, config: &ReportConfig) -> Result<Self> {
        let gold_history = interpolate_monthly(&dataset.gold)?;
        let equity = interpolate_monthly(&dataset.equity)?;
        let inflation = interpolate_monthly(&dataset.inflation)?;

        let model = config.model()?;
        let gold = model.extend(&gold_history, config.forecast_end)?;
        debug!(
            model = model.name(),
            historical = gold_history.len(),
            forecast = gold.forecast().count(),
            "extended gold series"
        );

        let (gold_volatility, equity_volatility) = if config.derive_volatility {
            (
                rolling_volatility(&month_start_points(&gold_history), config.volatility_window)?,
                rolling_volatility(&month_start_points(&equity), config.volatility_window)?,
            )
        } else {
            (
                dataset.gold_volatility.clone(),
                dataset.equity_volatility.clone(),
            )
        };

        let metrics = build_report(
            &ReportInputs {
                gold: &gold,
                equity: equity.points(),
                inflation: inflation.points(),
                gold_volatility: &gold_volatility,
                equity_volatility: &equity_volatility,
                events: &dataset.events,
            },
            config,
        );

        Ok(Self {
            model: model.name().to_string(),
            gold,
            equity,
            inflation,
            gold_volatility,
            equity_volatility,
            events: dataset.events.clone(),
            metrics,
        })
    }

    /// Final projected point, if the forecast reaches past the history
    pub fn last_forecast(&self) -> Option<&ForecastPoint> {
        self.gold.last_forecast()
    }
}

fn month_start_points(series: &MonthlySeries) -> Vec<TimeSeriesPoint> {
    series
        .points()
        .iter()
        .filter(|p| is_month_start(p.date))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventWindow;
    use crate::models::ForecastMethod;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn small_dataset() -> Dataset {
        let monthly = |start: f64, step: f64| -> Vec<TimeSeriesPoint> {
            (0..36)
                .map(|m| {
                    TimeSeriesPoint::new(
                        crate::utils::shift_months(ymd(2020, 1, 1), m).unwrap(),
                        start + step * m as f64,
                    )
                })
                .collect()
        };

        Dataset {
            gold: monthly(1500.0, 10.0),
            equity: monthly(3000.0, 20.0),
            inflation: monthly(2.0, 0.1),
            gold_volatility: vec![VolatilityPoint::new(ymd(2020, 1, 1), 15.0)],
            equity_volatility: vec![VolatilityPoint::new(ymd(2020, 1, 1), 25.0)],
            events: vec![MarketEvent::new(ymd(2021, 1, 1), "Test", "", "red")],
        }
    }

    #[test]
    fn test_build_small_dataset() {
        let config = ReportConfig {
            forecast_end: ymd(2023, 6, 30),
            ..ReportConfig::default()
        };
        let story = GoldStory::build(&small_dataset(), &config).unwrap();

        assert_eq!(story.gold.historical().len(), 36);
        assert_eq!(story.gold.forecast().count(), 6);
        assert_eq!(story.last_forecast().unwrap().date, ymd(2023, 6, 1));
        assert_eq!(story.metrics.gold_avg_volatility, 15.0);
        assert_eq!(story.metrics.equity_avg_volatility, 25.0);
        assert!(story.metrics.gold_crisis_performance > 0.0);
        assert!(story.metrics.gold_inflation_correlation > 0.99);
    }

    #[test]
    fn test_derived_volatility() {
        let config = ReportConfig {
            derive_volatility: true,
            volatility_window: 12,
            ..ReportConfig::default()
        };
        let story = GoldStory::build(&small_dataset(), &config).unwrap();

        assert_eq!(story.gold_volatility.len(), 24);
        assert_eq!(story.gold_volatility[0].date, ymd(2021, 1, 1));
        // Any 12 consecutive points of a +10 line share the same spread
        let expected = 10.0 * ((143.0f64) / 12.0).sqrt();
        approx::assert_relative_eq!(story.metrics.gold_avg_volatility, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_average_growth_method() {
        let config = ReportConfig {
            method: ForecastMethod::AverageGrowth,
            forecast_end: ymd(2023, 2, 1),
            event_window: EventWindow::new(1, 1),
            ..ReportConfig::default()
        };
        let story = GoldStory::build(&small_dataset(), &config).unwrap();
        assert_eq!(story.model, "Average Growth (lookback=24)");
        assert_eq!(story.gold.forecast().count(), 2);
    }
}
