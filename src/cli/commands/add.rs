use crate::cli::parser::Commands;
use crate::core::add::AddLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

/// Compute and save one BMI reading.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add { weight, height } = cmd {
        //
        // 1. Resolve height: explicit argument wins, then the config default
        //
        let height_final = match height {
            Some(h) => *h,
            None => cfg.default_height_cm.ok_or_else(|| {
                AppError::InvalidHeight(
                    "missing (pass a height in cm or set 'default_height_cm' in the config)"
                        .to_string(),
                )
            })?,
        };

        //
        // 2. Open DB and make sure the schema is there
        //
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        //
        // 3. Execute logic
        //
        AddLogic::apply(&mut pool, *weight, height_final)?;
    }

    Ok(())
}
