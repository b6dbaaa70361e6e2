use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{projects, users};
use crate::errors::{AppError, AppResult};
use crate::utils::formatting::money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Wallet { employee_id } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let user = users::get_user(&pool.conn, *employee_id)?
            .ok_or(AppError::UserNotFound(*employee_id))?;
        let history = projects::approved_projects_for(&pool.conn, user.id)?;

        println!("💰 Wallet for {} ({})", user.name, user.employee_id);
        println!(
            "   Balance : {}",
            money(user.wallet_balance, &cfg.currency_symbol)
        );

        if history.is_empty() {
            println!("   No approved projects yet.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("PROJECT", 10),
            Column::new("ASSIGNED", 20),
            Column::new("CREDITED", 12),
        ]);

        for p in &history {
            table.add_row(vec![
                p.project_name.clone(),
                p.assigned_date.clone(),
                money(p.cost, &cfg.currency_symbol),
            ]);
        }

        println!("\n{}", table.render());
    }

    Ok(())
}
