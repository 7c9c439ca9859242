//! # Gold Forecast
//!
//! Monthly price series for gold, an equity index and inflation, extended with
//! a seasonal forecast and summarised into a fixed set of headline metrics.
//!
//! ## Features
//!
//! - Monthly interpolation of sparse price points
//! - Holt-Winters (triple exponential smoothing) and average-growth forecasts
//! - Event-window performance, average volatility, CAGR and correlation
//! - A built-in 2000-2025 dataset and a JSON-configurable report pipeline
//!
//! ## Pipeline
//!
//! Raw series are interpolated to one point per calendar month, the gold
//! series is extended to the configured end date, and the report is computed
//! from the historical part only:
//!
//! ```rust,no_run
//! use gold_forecast::{Dataset, GoldStory, ReportConfig};
//!
//! let dataset = Dataset::builtin()?;
//! let story = GoldStory::build(&dataset, &ReportConfig::default())?;
//!
//! println!("{}", story.metrics);
//! if let Some(last) = story.last_forecast() {
//!     println!("{}: ${:.2}", last.date, last.price);
//! }
//! # Ok::<(), gold_forecast::ForecastError>(())
//! ```
//!
//! ## Using a model directly
//!
//! ```rust,no_run
//! use gold_forecast::data::{interpolate_monthly, TimeSeriesPoint};
//! use gold_forecast::models::{ForecastModel, HoltWintersParams, SeasonalForecaster};
//! use gold_forecast::utils::parse_date;
//!
//! let history = interpolate_monthly(&[
//!     TimeSeriesPoint::new(parse_date("2020-01")?, 1560.0),
//!     TimeSeriesPoint::new(parse_date("2024-01")?, 2050.0),
//! ])?;
//!
//! let model = SeasonalForecaster::new(HoltWintersParams::default())?;
//! let forecast = model.forecast(&history, parse_date("2025-12-31")?)?;
//! assert_eq!(forecast.len(), 23);
//! # Ok::<(), gold_forecast::ForecastError>(())
//! ```

pub mod config;
pub mod data;
pub mod dataset;
pub mod error;
pub mod events;
pub mod metrics;
pub mod models;
pub mod story;
pub mod utils;
pub mod volatility;

// Re-export commonly used types
pub use crate::config::ReportConfig;
pub use crate::data::{
    interpolate_monthly, ForecastPoint, ForecastSeries, MonthlySeries, TimeSeriesPoint,
};
pub use crate::dataset::Dataset;
pub use crate::error::{ForecastError, Result};
pub use crate::events::{EventWindow, MarketEvent};
pub use crate::metrics::{build_report, MetricsReport, ReportInputs};
pub use crate::models::{ForecastMethod, ForecastModel};
pub use crate::story::GoldStory;
pub use crate::volatility::VolatilityPoint;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
