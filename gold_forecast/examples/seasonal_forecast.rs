use gold_forecast::models::{
    AverageGrowthForecaster, ForecastModel, HoltWintersParams, SeasonalForecaster,
};
use gold_forecast::utils::parse_date;
use gold_forecast::{interpolate_monthly, Dataset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dataset = Dataset::builtin()?;
    println!("Loaded {} raw gold prices", dataset.gold.len());

    // Fill in the missing months
    let history = interpolate_monthly(&dataset.gold)?;
    println!("Interpolated to {} points", history.len());

    let end = parse_date("2027-12-31")?;
    let models: Vec<Box<dyn ForecastModel>> = vec![
        Box::new(SeasonalForecaster::new(HoltWintersParams::default())?),
        Box::new(SeasonalForecaster::new(HoltWintersParams {
            alpha: 0.5,
            gamma: 0.1,
            ..HoltWintersParams::default()
        })?),
        Box::new(AverageGrowthForecaster::new(24)?),
    ];

    for model in &models {
        let forecast = model.forecast(&history, end)?;
        println!("\n{}:", model.name());
        for point in forecast.iter().step_by(6) {
            println!("  {}: ${:.2}", point.date, point.price);
        }
        if let Some(last) = forecast.last() {
            println!("  {}: ${:.2} (final)", last.date, last.price);
        }
    }

    Ok(())
}
