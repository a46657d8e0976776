use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

/// Store timestamp format: second precision, lexicographically sortable.
pub const STAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in the store's timestamp format.
pub fn now_stamp() -> String {
    Local::now().format(STAMP_FMT).to_string()
}

pub fn parse_stamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, STAMP_FMT).ok()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve a period expression into inclusive date bounds.
///
/// Accepted forms:
/// - `YYYY-MM-DD` → that single day
/// - `YYYY-MM`    → whole month
/// - `YYYY`       → whole year
/// - `start:end`  → range, each side in any of the forms above
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if let Some((start, end)) = p.split_once(':') {
        let (s, _) = single_period_bounds(start)?;
        let (_, e) = single_period_bounds(end)?;
        if s > e {
            return Err(format!("{} (start after end)", p));
        }
        return Ok((s, e));
    }

    single_period_bounds(p)
}

fn single_period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok((first, last_day_of_month(first)));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(p.to_string())
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let mut d = first;
    while let Some(next) = d.succ_opt() {
        if next.month() != first.month() {
            break;
        }
        d = next;
    }
    d
}
