use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREY, RESET};

/// High-level logic for the `log` command.
pub struct LogLogic;

impl LogLogic {
    /// Print the internal audit-log table, newest first.
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let rows = load_log(pool)?;

        if rows.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        for (date, operation, message) in rows {
            println!("{GREY}{date}{RESET} {CYAN}[{operation}]{RESET} {message}");
        }

        Ok(())
    }
}
