use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::load_records;
use crate::errors::{AppError, AppResult};
use crate::models::record::BmiRecord;
use crate::utils::colors::colorize_category;
use crate::utils::date::period_bounds;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let bounds = resolve_period(period)?;
        let records = load_records(&mut pool, bounds)?;

        if records.is_empty() {
            println!("No saved readings.");
            return Ok(());
        }

        print_table(&records, &cfg.separator_char);
    }
    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period {
        None => Ok(None),
        Some(p) if p == "all" => Ok(None),
        Some(p) => period_bounds(p).map(Some).map_err(AppError::InvalidPeriod),
    }
}

fn print_table(records: &[BmiRecord], separator: &str) {
    let sep = separator.repeat(72);

    println!("{:>4} | {:^19} | {:>7} | {:>7} | {:>6} | CATEGORY", "ID", "DATE", "WEIGHT", "HEIGHT", "BMI");
    println!("{}", sep);

    for r in records {
        println!(
            "{:>4} | {} | {:>7.1} | {:>7.1} | {:>6.2} | {}",
            r.id,
            r.date_str(),
            r.weight,
            r.height,
            r.bmi,
            colorize_category(r.category),
        );
    }

    println!("{}", sep);
    println!("{} reading(s)", records.len());
}
