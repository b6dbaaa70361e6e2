//! Image intake: diff `uploads/pending/` against the `images` table and
//! register what is new.

use crate::config::Config;
use crate::core::workspace;
use crate::db::pool::DbPool;
use crate::db::{images, log};
use crate::errors::{AppError, AppResult};
use crate::utils::filename;
use std::fs;

/// Outcome of one intake scan.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Files registered (or that would be, in dry-run mode).
    pub added: Vec<String>,
    /// Files accepted despite a filename advisory, with the advisory text.
    pub warned: Vec<(String, String)>,
    /// Files not registered, with the reason.
    pub skipped: Vec<(String, String)>,
}

pub struct SyncLogic;

impl SyncLogic {
    /// Scan the pending folder. Under `strict` a filename advisory aborts
    /// the whole scan before anything is registered.
    pub fn run(
        pool: &mut DbPool,
        cfg: &Config,
        dry_run: bool,
        strict: bool,
    ) -> AppResult<SyncReport> {
        let pending = workspace::pending_dir(cfg);
        if !pending.exists() {
            fs::create_dir_all(&pending)?;
        }

        let known = images::known_filenames(&pool.conn)?;
        let mut report = SyncReport::default();

        let mut entries: Vec<String> = Vec::new();
        for entry in fs::read_dir(&pending)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                entries.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        entries.sort();

        for name in entries {
            if known.contains(&name) {
                continue;
            }

            if !filename::extension_allowed(&name, &cfg.allowed_extensions) {
                report
                    .skipped
                    .push((name, "extension not allowed".to_string()));
                continue;
            }

            match filename::advisory(&name) {
                Some(why) if strict || cfg.strict_filenames => {
                    return Err(AppError::BadFilename(name, why));
                }
                Some(why) => {
                    report.warned.push((name.clone(), why));
                    report.added.push(name);
                }
                None => report.added.push(name),
            }
        }

        if !dry_run && !report.added.is_empty() {
            images::register(&mut pool.conn, &report.added)?;
            log::ttlog(
                &pool.conn,
                "sync",
                &pending.to_string_lossy(),
                &format!("Registered {} new image(s)", report.added.len()),
            )?;
        }

        Ok(report)
    }
}
