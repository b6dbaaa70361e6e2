use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sync::SyncLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sync { dry_run, strict } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let report = SyncLogic::run(&mut pool, cfg, *dry_run, *strict)?;

        for (name, why) in &report.warned {
            warning(format!("{}: {}", name, why));
        }
        for (name, reason) in &report.skipped {
            warning(format!("Skipped {}: {}", name, reason));
        }

        if report.added.is_empty() {
            info("No new images found in the pending folder.");
        } else {
            for name in &report.added {
                println!("  + {}", name);
            }
            if *dry_run {
                info(format!(
                    "Dry run: {} image(s) would be registered.",
                    report.added.len()
                ));
            } else {
                success(format!("Registered {} new image(s).", report.added.len()));
            }
        }
    }

    Ok(())
}
