//! # Gold Story
//!
//! Workspace facade over the two member crates:
//!
//! - [`series_math`]: numeric routines over plain `f64` slices (statistics,
//!   rolling volatility, Holt-Winters and average-growth fitting)
//! - [`gold_forecast`]: dated series, monthly interpolation, forecasting
//!   models, event windows and the metrics report
//!
//! ## Example
//!
//! ```
//! use gold_story_workspace::series_math::total_return;
//!
//! assert_eq!(total_return(100.0, 250.0), 150.0);
//! ```

pub use gold_forecast;
pub use series_math;
