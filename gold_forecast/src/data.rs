//! Dated series: raw points, monthly series and forecast-annotated series

use crate::error::{ForecastError, Result};
use crate::utils::{is_month_start, month_start, months_between, shift_months};
use chrono::NaiveDate;
use series_math::round_to_cents;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single observation at calendar-month resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Series with no month left empty between its first and last points.
///
/// Only [`interpolate_monthly`] builds one, so the spacing holds for every
/// instance. Source points keep their original dates, so two quotes from the
/// same calendar month may sit next to each other.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MonthlySeries {
    points: Vec<TimeSeriesPoint>,
}

impl MonthlySeries {
    /// All points in date order
    pub fn points(&self) -> &[TimeSeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest point
    pub fn first(&self) -> &TimeSeriesPoint {
        &self.points[0]
    }

    /// Latest point
    pub fn last(&self) -> &TimeSeriesPoint {
        &self.points[self.points.len() - 1]
    }

    /// Values in date order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Values of the points dated on the 1st of their month
    pub fn month_start_values(&self) -> Vec<f64> {
        self.points
            .iter()
            .filter(|p| is_month_start(p.date))
            .map(|p| p.value)
            .collect()
    }

    /// Value recorded on exactly `date`, if any
    pub fn value_at(&self, date: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by(|p| p.date.cmp(&date))
            .ok()
            .map(|i| self.points[i].value)
    }

    pub fn into_points(self) -> Vec<TimeSeriesPoint> {
        self.points
    }
}

fn validate_raw(points: &[TimeSeriesPoint]) -> Result<()> {
    if points.is_empty() {
        return Err(ForecastError::InvalidInput(
            "Series must contain at least one point".to_string(),
        ));
    }

    if let Some(bad) = points.iter().find(|p| !p.value.is_finite()) {
        return Err(ForecastError::InvalidInput(format!(
            "Non-finite value {} on {}",
            bad.value, bad.date
        )));
    }

    if let Some(pair) = points.windows(2).find(|pair| pair[1].date <= pair[0].date) {
        return Err(ForecastError::InvalidInput(format!(
            "Dates must be strictly increasing: {} is followed by {}",
            pair[0].date, pair[1].date
        )));
    }

    Ok(())
}

/// Fill the monthly gaps of a sparse series by linear interpolation.
///
/// Between each pair of points `n` months apart, `n - 1` points are added on
/// the 1st of every month in between, with values rounded to cents. Source
/// points are copied through untouched.
pub fn interpolate_monthly(points: &[TimeSeriesPoint]) -> Result<MonthlySeries> {
    validate_raw(points)?;

    let mut result = Vec::with_capacity(points.len());
    for pair in points.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        result.push(current);

        let months = months_between(current.date, next.date);
        let anchor = month_start(current.date);
        for m in 1..months {
            let Some(date) = shift_months(anchor, m) else {
                return Err(ForecastError::InvalidInput(format!(
                    "Date {} is out of range",
                    current.date
                )));
            };
            let ratio = f64::from(m) / f64::from(months);
            let value = current.value + (next.value - current.value) * ratio;
            result.push(TimeSeriesPoint::new(date, round_to_cents(value)));
        }
    }
    result.push(points[points.len() - 1]);

    debug!(
        source = points.len(),
        interpolated = result.len() - points.len(),
        "interpolated monthly series"
    );

    Ok(MonthlySeries { points: result })
}

/// A price point in a chart-facing series, flagged when it is projected
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub price: f64,
    pub is_forecast: bool,
}

impl ForecastPoint {
    /// Observed point
    pub fn historical(point: &TimeSeriesPoint) -> Self {
        Self {
            date: point.date,
            price: point.value,
            is_forecast: false,
        }
    }

    /// Projected point
    pub fn projected(date: NaiveDate, price: f64) -> Self {
        Self {
            date,
            price,
            is_forecast: true,
        }
    }
}

/// Historical monthly points followed by contiguous forecast points
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ForecastSeries {
    points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    /// Append `forecast` to `history`.
    ///
    /// Forecast points must be flagged, dated on the 1st, and run month by
    /// month starting the month after the last historical point.
    pub fn new(history: &MonthlySeries, forecast: Vec<ForecastPoint>) -> Result<Self> {
        let mut previous = history.last().date;
        for point in &forecast {
            if !point.is_forecast {
                return Err(ForecastError::InvalidInput(format!(
                    "Point on {} is appended as a forecast but not flagged as one",
                    point.date
                )));
            }
            if !is_month_start(point.date) || months_between(previous, point.date) != 1 {
                return Err(ForecastError::InvalidInput(format!(
                    "Forecast point on {} does not follow {} by one month",
                    point.date, previous
                )));
            }
            previous = point.date;
        }

        let mut points: Vec<ForecastPoint> =
            history.points().iter().map(ForecastPoint::historical).collect();
        points.extend(forecast);

        Ok(Self { points })
    }

    /// Series with no projected points
    pub fn historical_only(history: &MonthlySeries) -> Self {
        Self {
            points: history.points().iter().map(ForecastPoint::historical).collect(),
        }
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Observed points, as plain series points
    pub fn historical(&self) -> Vec<TimeSeriesPoint> {
        self.points
            .iter()
            .filter(|p| !p.is_forecast)
            .map(|p| TimeSeriesPoint::new(p.date, p.price))
            .collect()
    }

    /// Projected points only
    pub fn forecast(&self) -> impl Iterator<Item = &ForecastPoint> + '_ {
        self.points.iter().filter(|p| p.is_forecast)
    }

    pub fn last_forecast(&self) -> Option<&ForecastPoint> {
        self.points.iter().rev().find(|p| p.is_forecast)
    }

    pub fn last_historical(&self) -> Option<&ForecastPoint> {
        self.points.iter().rev().find(|p| !p.is_forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn point(y: i32, m: u32, d: u32, value: f64) -> TimeSeriesPoint {
        TimeSeriesPoint::new(ymd(y, m, d), value)
    }

    #[test]
    fn test_linear_steps() {
        let monthly =
            interpolate_monthly(&[point(2000, 1, 1, 100.0), point(2000, 4, 1, 130.0)]).unwrap();

        assert_eq!(
            monthly.points(),
            &[
                point(2000, 1, 1, 100.0),
                point(2000, 2, 1, 110.0),
                point(2000, 3, 1, 120.0),
                point(2000, 4, 1, 130.0),
            ]
        );
    }

    #[test]
    fn test_single_point_series_is_not_empty() {
        let monthly = interpolate_monthly(&[point(2025, 10, 28, 3974.01)]).unwrap();
        assert_eq!(monthly.len(), 1);
        assert!(!monthly.is_empty());
    }

    #[test]
    fn test_interpolated_values_are_rounded() {
        let monthly =
            interpolate_monthly(&[point(2000, 1, 1, 282.85), point(2000, 6, 1, 286.40)]).unwrap();
        let values = monthly.values();

        assert_eq!(values.len(), 6);
        assert_eq!(values[1], 283.56);
        assert_eq!(values[2], 284.27);
        assert_eq!(values[5], 286.40);
    }

    #[test]
    fn test_source_points_are_not_rounded() {
        let monthly =
            interpolate_monthly(&[point(2000, 1, 1, 1.23456), point(2000, 3, 1, 2.34567)]).unwrap();
        assert_eq!(monthly.first().value, 1.23456);
        assert_eq!(monthly.last().value, 2.34567);
        assert_eq!(monthly.points()[1].value, 1.79);
    }

    #[test]
    fn test_mid_month_source_dates() {
        let monthly =
            interpolate_monthly(&[point(2008, 9, 15, 100.0), point(2008, 12, 10, 130.0)]).unwrap();
        let dates: Vec<NaiveDate> = monthly.points().iter().map(|p| p.date).collect();

        assert_eq!(
            dates,
            vec![ymd(2008, 9, 15), ymd(2008, 10, 1), ymd(2008, 11, 1), ymd(2008, 12, 10)]
        );
    }

    #[test]
    fn test_same_month_quotes_are_kept() {
        let points = [
            point(2025, 9, 1, 3600.0),
            point(2025, 10, 17, 4213.30),
            point(2025, 10, 20, 4359.40),
            point(2025, 10, 28, 3974.01),
        ];
        let monthly = interpolate_monthly(&points).unwrap();
        assert_eq!(monthly.points(), &points);
        assert_eq!(monthly.month_start_values(), vec![3600.0]);
    }

    #[test]
    fn test_single_point() {
        let monthly = interpolate_monthly(&[point(2000, 1, 1, 282.85)]).unwrap();
        assert_eq!(monthly.points(), &[point(2000, 1, 1, 282.85)]);
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            interpolate_monthly(&[]),
            Err(ForecastError::InvalidInput(_))
        ));
        assert!(matches!(
            interpolate_monthly(&[point(2000, 2, 1, 1.0), point(2000, 1, 1, 2.0)]),
            Err(ForecastError::InvalidInput(_))
        ));
        assert!(matches!(
            interpolate_monthly(&[point(2000, 1, 1, 1.0), point(2000, 1, 1, 2.0)]),
            Err(ForecastError::InvalidInput(_))
        ));
        assert!(matches!(
            interpolate_monthly(&[point(2000, 1, 1, f64::NAN)]),
            Err(ForecastError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_value_at() {
        let monthly =
            interpolate_monthly(&[point(2000, 1, 1, 100.0), point(2000, 4, 1, 130.0)]).unwrap();
        assert_eq!(monthly.value_at(ymd(2000, 3, 1)), Some(120.0));
        assert_eq!(monthly.value_at(ymd(2000, 3, 2)), None);
    }

    #[test]
    fn test_forecast_series_append() {
        let history =
            interpolate_monthly(&[point(2025, 8, 1, 3400.0), point(2025, 10, 28, 3974.01)]).unwrap();
        let series = ForecastSeries::new(
            &history,
            vec![
                ForecastPoint::projected(ymd(2025, 11, 1), 4000.0),
                ForecastPoint::projected(ymd(2025, 12, 1), 4050.0),
            ],
        )
        .unwrap();

        assert_eq!(series.points().len(), 5);
        assert_eq!(series.historical().len(), 3);
        assert_eq!(series.forecast().count(), 2);
        assert_eq!(series.last_forecast().map(|p| p.price), Some(4050.0));
        assert_eq!(series.last_historical().map(|p| p.price), Some(3974.01));
    }

    #[test]
    fn test_forecast_series_rejects_gaps_and_unflagged_points() {
        let history = interpolate_monthly(&[point(2025, 10, 1, 3974.01)]).unwrap();

        let gap = ForecastSeries::new(
            &history,
            vec![ForecastPoint::projected(ymd(2026, 1, 1), 4000.0)],
        );
        assert!(matches!(gap, Err(ForecastError::InvalidInput(_))));

        let unflagged = ForecastSeries::new(
            &history,
            vec![ForecastPoint::historical(&point(2025, 11, 1, 4000.0))],
        );
        assert!(matches!(unflagged, Err(ForecastError::InvalidInput(_))));
    }

    #[test]
    fn test_forecast_point_json_shape() {
        let json = serde_json::to_string(&ForecastPoint::projected(ymd(2027, 12, 1), 5123.45)).unwrap();
        assert_eq!(json, r#"{"date":"2027-12-01","price":5123.45,"isForecast":true}"#);
    }
}
