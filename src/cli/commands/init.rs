use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::workspace;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the workspace folder layout (safe to re-run)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let root = if let Commands::Init { root } = &cli.command {
        root.clone().unwrap_or_else(|| ".".to_string())
    } else {
        return Ok(());
    };

    let root = Path::new(&root);

    println!("⚙️  Initializing demshub workspace…");

    let created = workspace::scaffold(root)?;
    if created.is_empty() {
        println!("📁 Folder layout already in place");
    } else {
        for dir in &created {
            println!("📁 Created {}", dir.display());
        }
    }

    if !root.join(workspace::LOGO_FILE).exists() {
        println!(
            "🖼️  Drop the site logo at {} when ready",
            root.join(workspace::LOGO_FILE).display()
        );
    }

    let cfg = Config::init_all(root, cli.db.clone(), cli.test)?;

    let conn = Connection::open(&cfg.database)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &cfg.database);

    // Non-blocking internal log
    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "workspace",
        &format!("Workspace initialized at {}", root.display()),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 demshub initialization completed!");
    Ok(())
}
