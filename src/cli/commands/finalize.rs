use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::review::ReviewLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::formatting::money;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Finalize {
        project_id,
        approve,
        reject,
    } = cmd
    {
        if !*approve && !*reject {
            return Err(AppError::Other(
                "use --approve or --reject to finalize a project".to_string(),
            ));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let outcome = ReviewLogic::finalize(&mut pool, *project_id, *approve)?;

        if let Some(amount) = outcome.credited {
            success(format!(
                "Project {} approved; {} credited to the employee wallet.",
                outcome.project.project_name,
                money(amount, &cfg.currency_symbol)
            ));
        } else {
            success(format!(
                "Project {} rejected.",
                outcome.project.project_name
            ));
        }
    }

    Ok(())
}
