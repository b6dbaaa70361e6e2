use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;
        let rows = log::list_log(&pool.conn)?;

        if rows.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        header("Internal log");

        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("DATE", 26),
            Column::new("OPERATION", 10),
            Column::new("TARGET", 16),
            Column::new("MESSAGE", 48),
        ]);

        for row in rows {
            table.add_row(vec![
                row.id.to_string(),
                row.date,
                row.operation,
                row.target,
                row.message,
            ]);
        }

        println!("{}", table.render());
    }

    Ok(())
}
