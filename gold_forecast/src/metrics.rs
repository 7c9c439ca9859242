//! Headline metrics for the gold report

use crate::config::ReportConfig;
use crate::data::{ForecastSeries, TimeSeriesPoint};
use crate::events::{average_event_performance, MarketEvent};
use crate::volatility::{average_volatility, VolatilityPoint};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use series_math::{cagr, correlation, total_return};
use std::cmp::Ordering;
use tracing::debug;

/// Series the report is computed from
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    /// Gold prices, history followed by forecast
    pub gold: &'a ForecastSeries,
    /// Monthly equity index levels
    pub equity: &'a [TimeSeriesPoint],
    /// Monthly inflation rates
    pub inflation: &'a [TimeSeriesPoint],
    pub gold_volatility: &'a [VolatilityPoint],
    pub equity_volatility: &'a [VolatilityPoint],
    pub events: &'a [MarketEvent],
}

/// Fixed set of scalar results, percentages as plain numbers (12.3 = 12.3%)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    pub gold_total_return: f64,
    #[serde(rename = "goldCAGR")]
    pub gold_cagr: f64,
    pub gold_crisis_performance: f64,
    pub equity_crisis_performance: f64,
    pub gold_avg_volatility: f64,
    pub equity_avg_volatility: f64,
    pub gold_inflation_correlation: f64,
}

/// Build the report from `inputs`.
///
/// Forecast points never enter the gold figures. Gold and inflation are
/// paired by exact date before correlating; unpaired points are dropped.
pub fn build_report(inputs: &ReportInputs<'_>, config: &ReportConfig) -> MetricsReport {
    let gold = inputs.gold.historical();

    let (gold_total_return, gold_cagr) = match (gold.first(), gold.last()) {
        (Some(first), Some(last)) => {
            let years = config
                .cagr_years
                .unwrap_or_else(|| f64::from(last.date.year() - first.date.year()));
            (
                total_return(first.value, last.value),
                cagr(first.value, last.value, years),
            )
        }
        _ => (0.0, 0.0),
    };

    let (gold_aligned, inflation_aligned) = align_by_date(&gold, inputs.inflation);
    debug!(
        paired = gold_aligned.len(),
        gold_dropped = gold.len() - gold_aligned.len(),
        inflation_dropped = inputs.inflation.len() - inflation_aligned.len(),
        "aligned gold and inflation"
    );

    MetricsReport {
        gold_total_return,
        gold_cagr,
        gold_crisis_performance: average_event_performance(
            &gold,
            inputs.events,
            config.event_window,
        ),
        equity_crisis_performance: average_event_performance(
            inputs.equity,
            inputs.events,
            config.event_window,
        ),
        gold_avg_volatility: average_volatility(inputs.gold_volatility),
        equity_avg_volatility: average_volatility(inputs.equity_volatility),
        gold_inflation_correlation: correlation(&gold_aligned, &inflation_aligned),
    }
}

/// Values of `a` and `b` on the dates both series share, in date order
fn align_by_date(a: &[TimeSeriesPoint], b: &[TimeSeriesPoint]) -> (Vec<f64>, Vec<f64>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].date.cmp(&b[j].date) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                left.push(a[i].value);
                right.push(b[j].value);
                i += 1;
                j += 1;
            }
        }
    }

    (left, right)
}

impl MetricsReport {
    /// Gold total return rounded to the nearest hundred percent, e.g. `1300`
    pub fn headline_total_return(&self) -> f64 {
        (self.gold_total_return / 100.0).round() * 100.0
    }
}

/// Whole-number percentage with an explicit sign for non-negative values
pub fn signed_percent(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{}{:.0}%", sign, value)
}

impl std::fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Gold Report Metrics:")?;
        writeln!(f, "  Total Return:        ~{:.0}%", self.headline_total_return())?;
        writeln!(f, "  CAGR:                {:.1}%", self.gold_cagr)?;
        writeln!(
            f,
            "  Crisis (gold):       {}",
            signed_percent(self.gold_crisis_performance)
        )?;
        writeln!(
            f,
            "  Crisis (equity):     {}",
            signed_percent(self.equity_crisis_performance)
        )?;
        writeln!(f, "  Volatility (gold):   {:.0}%", self.gold_avg_volatility)?;
        writeln!(f, "  Volatility (equity): {:.0}%", self.equity_avg_volatility)?;
        writeln!(f, "  Gold/Inflation Corr: {:.2}", self.gold_inflation_correlation)?;
        Ok(())
    }
}
