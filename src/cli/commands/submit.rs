use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::review::ReviewLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit { project_id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let project = ReviewLogic::submit(&mut pool, *project_id)?;

        success(format!(
            "Project {} submitted for review.",
            project.project_name
        ));
    }

    Ok(())
}
