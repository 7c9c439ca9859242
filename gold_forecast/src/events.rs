//! Market events and price performance around them

use crate::data::TimeSeriesPoint;
use crate::utils::shift_months;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Span of months measured around an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventWindow {
    pub months_before: u32,
    pub months_after: u32,
}

impl Default for EventWindow {
    fn default() -> Self {
        Self {
            months_before: 3,
            months_after: 6,
        }
    }
}

impl EventWindow {
    pub fn new(months_before: u32, months_after: u32) -> Self {
        Self {
            months_before,
            months_after,
        }
    }
}

/// An annotated historical event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketEvent {
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    /// Display colour for the annotation band, e.g. `rgba(255, 68, 68, 0.3)`
    pub color: String,
    /// Reference gold price on the event date
    #[serde(default)]
    pub gold_price: Option<f64>,
    /// Reference equity index level on the event date
    #[serde(default)]
    pub equity_level: Option<f64>,
    /// Overrides the report's default window for this event
    #[serde(default)]
    pub window: Option<EventWindow>,
}

impl MarketEvent {
    pub fn new(date: NaiveDate, title: &str, description: &str, color: &str) -> Self {
        Self {
            date,
            title: title.to_string(),
            description: description.to_string(),
            color: color.to_string(),
            gold_price: None,
            equity_level: None,
            window: None,
        }
    }

    /// Set a window specific to this event
    pub fn with_window(mut self, window: EventWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// This event's window, or `default` when it has none
    pub fn window_or(&self, default: EventWindow) -> EventWindow {
        self.window.unwrap_or(default)
    }
}

/// Index of the first point dated on or after `target`
fn first_on_or_after(series: &[TimeSeriesPoint], target: NaiveDate) -> Option<usize> {
    let index = series.partition_point(|p| p.date < target);
    (index < series.len()).then_some(index)
}

/// Percentage change across the window around `event_date`.
///
/// The "before" anchor is the first point on or after
/// `event_date - months_before`, the "after" anchor the first point on or
/// after `event_date + months_after`. `None` when either anchor falls
/// outside the series or the calendar, or the before price is zero.
pub fn event_window_performance(
    series: &[TimeSeriesPoint],
    event_date: NaiveDate,
    window: EventWindow,
) -> Option<f64> {
    let first = series.first()?;
    let months_before = i32::try_from(window.months_before).ok()?;
    let months_after = i32::try_from(window.months_after).ok()?;
    let before_date = shift_months(event_date, -months_before)?;
    let after_date = shift_months(event_date, months_after)?;

    if before_date < first.date {
        return None;
    }

    let before = &series[first_on_or_after(series, before_date)?];
    let after = &series[first_on_or_after(series, after_date)?];

    series_math::percent_change(before.value, after.value)
}

/// Mean event-window performance over the events that have both anchors.
///
/// Events without a valid window are left out of the average rather than
/// counted as zero. Returns `0.0` when no event qualifies.
pub fn average_event_performance(
    series: &[TimeSeriesPoint],
    events: &[MarketEvent],
    default_window: EventWindow,
) -> f64 {
    let performances: Vec<f64> = events
        .iter()
        .filter_map(|event| {
            let performance =
                event_window_performance(series, event.date, event.window_or(default_window));
            if performance.is_none() {
                debug!(event = %event.title, "event window outside series, skipped");
            }
            performance
        })
        .collect();

    series_math::mean(&performances)
}
