use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `bmi_records` table exists.
pub fn bmi_records_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='bmi_records'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `bmi_records` table.
fn create_bmi_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS bmi_records (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            date     TEXT NOT NULL,
            weight   REAL NOT NULL,
            height   REAL NOT NULL,
            bmi      REAL NOT NULL,
            category TEXT NOT NULL
                CHECK(category IN ('Underweight','Normal weight','Overweight','Obesity'))
        );

        CREATE INDEX IF NOT EXISTS idx_bmi_records_date ON bmi_records(date);
        "#,
    )?;
    Ok(())
}

/// Public entry point: bring the schema up.
///
/// Invoked from db::init_db(). Create-if-absent only, idempotent; there are
/// no schema upgrades, the tables never change shape once created.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !bmi_records_table_exists(conn)? {
        create_bmi_records_table(conn)?;
    } else {
        conn.execute_batch(
            "CREATE INDEX IF NOT EXISTS idx_bmi_records_date ON bmi_records(date);",
        )?;
    }

    Ok(())
}
