use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::load_trend;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{GREEN, RESET};
use crate::utils::date::STAMP_FMT;
use chrono::NaiveDateTime;

/// Width of the inline bar at the maximum BMI of the series.
const BAR_WIDTH: usize = 40;

/// Show the BMI trend over time: the ordered (timestamp, bmi) series,
/// one line per reading.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Trend) {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let series = load_trend(&mut pool)?;

        if series.is_empty() {
            info("No BMI data available to visualize.");
            return Ok(());
        }

        print_trend(&series, cfg.show_trend_bar);
    }
    Ok(())
}

fn print_trend(series: &[(NaiveDateTime, f64)], with_bar: bool) {
    println!("\nBMI trend ({} readings):\n", series.len());

    // Scale the bars between the series extremes so small day-to-day
    // changes stay visible.
    let min = series.iter().map(|(_, b)| *b).fold(f64::INFINITY, f64::min);
    let max = series
        .iter()
        .map(|(_, b)| *b)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(0.01);

    for (date, bmi) in series {
        if with_bar {
            let width = (((bmi - min) / span) * (BAR_WIDTH as f64 - 1.0)).round() as usize + 1;
            println!(
                "{} | {:>6.2} {}{}{}",
                date.format(STAMP_FMT),
                bmi,
                GREEN,
                "▪".repeat(width),
                RESET
            );
        } else {
            println!("{} | {:>6.2}", date.format(STAMP_FMT), bmi);
        }
    }

    println!();
}
