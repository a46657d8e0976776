use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::record::BmiRecord;
use crate::utils::date::{STAMP_FMT, now_stamp};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, Result, Row, params};

/// Append one observation. The store assigns the id and the timestamp
/// (current local time, second precision); `weight`/`height` positivity is
/// the caller's contract, `bmi`/`category` must already be consistent with
/// them.
pub fn insert_record(
    conn: &Connection,
    weight: f64,
    height: f64,
    bmi: f64,
    category: Category,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO bmi_records (date, weight, height, bmi, category)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![now_stamp(), weight, height, bmi, category.to_db_str()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn map_row(row: &Row) -> Result<BmiRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDateTime::parse_from_str(&date_str, STAMP_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let category_str: String = row.get("category")?;
    let category = Category::from_db_str(&category_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!(
                "Invalid category: {}",
                category_str
            ))),
        )
    })?;

    Ok(BmiRecord {
        id: row.get("id")?,
        date,
        weight: row.get("weight")?,
        height: row.get("height")?,
        bmi: row.get("bmi")?,
        category,
    })
}

/// Load full records, oldest first, optionally restricted to an inclusive
/// date range. The id tie-break keeps same-second inserts in insertion
/// order.
pub fn load_records(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<BmiRecord>> {
    let mut out = Vec::new();

    match bounds {
        None => {
            let mut stmt = pool
                .conn
                .prepare("SELECT * FROM bmi_records ORDER BY date ASC, id ASC")?;
            let rows = stmt.query_map([], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        Some((start, end)) => {
            // `date` is a full datetime, so the end bound is pushed to the
            // last second of its day.
            let start_str = format!("{} 00:00:00", start.format("%Y-%m-%d"));
            let end_str = format!("{} 23:59:59", end.format("%Y-%m-%d"));

            let mut stmt = pool.conn.prepare(
                "SELECT * FROM bmi_records
                 WHERE date BETWEEN ?1 AND ?2
                 ORDER BY date ASC, id ASC",
            )?;
            let rows = stmt.query_map(params![start_str, end_str], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

/// The chart query: every (timestamp, bmi) pair, ascending by time.
/// An empty store yields an empty vec, never an error.
pub fn load_trend(pool: &mut DbPool) -> AppResult<Vec<(NaiveDateTime, f64)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date, bmi FROM bmi_records ORDER BY date ASC, id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (date_str, bmi) = r?;
        let date = NaiveDateTime::parse_from_str(&date_str, STAMP_FMT)
            .map_err(|_| AppError::InvalidDate(date_str.clone()))?;
        out.push((date, bmi));
    }
    Ok(out)
}

pub fn load_log(pool: &mut DbPool) -> Result<Vec<(String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date, operation, message FROM log ORDER BY date DESC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
