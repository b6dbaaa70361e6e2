use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::task::TaskEntry;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Entry {
        task_id,
        name,
        age,
        mobile,
        sex,
        address,
        receipt,
        review,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let patch = TaskEntry {
            name: name.clone(),
            age: age.clone(),
            mobile_number: mobile.clone(),
            sex: sex.clone(),
            address: address.clone(),
            receipt_number: receipt.clone(),
        };

        let task = EntryLogic::save(&mut pool, *task_id, patch, *review)?;

        success(format!(
            "{} saved ({})",
            task.label(),
            task.status.to_db_str()
        ));
    }

    Ok(())
}
