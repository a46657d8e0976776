use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL RECORDS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM bmi_records", [], |row| row.get(0))?;
    println!(
        "{}• Total readings:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM bmi_records ORDER BY date ASC, id ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM bmi_records ORDER BY date DESC, id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!("{}• Date range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 4) BMI AGGREGATES
    //
    if count > 0 {
        let (min, avg, max): (f64, f64, f64) = pool.conn.query_row(
            "SELECT MIN(bmi), AVG(bmi), MAX(bmi) FROM bmi_records",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;
        println!(
            "{}• BMI:{} min {:.2} | avg {:.2} | max {:.2}",
            CYAN, RESET, min, avg, max
        );

        let latest: String = pool.conn.query_row(
            "SELECT category FROM bmi_records ORDER BY date DESC, id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )?;
        println!("{}• Latest category:{} {}", CYAN, RESET, latest);
    }

    println!();
    Ok(())
}
