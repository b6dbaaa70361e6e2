use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::assign::AssignLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Assign {
        employee,
        tasks,
        cost,
        deposit,
        expiry_days,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let outcome =
            AssignLogic::apply(&mut pool, cfg, *employee, *tasks, *cost, *deposit, *expiry_days)?;

        success(format!(
            "Project {} (id {}) assigned: {} task(s), expires {}",
            outcome.project_name, outcome.project_id, outcome.task_count, outcome.expiry_date
        ));
    }

    Ok(())
}
