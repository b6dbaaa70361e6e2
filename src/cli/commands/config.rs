use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workspace;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            print_current(cfg)?;
        }
        if *check {
            check_setup(cfg)?;
        }
        if *edit_config {
            open_in_editor(editor.as_deref());
        }
    }

    Ok(())
}

fn print_current(cfg: &Config) -> AppResult<()> {
    let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
    println!("📄 Current configuration:\n");
    println!("{yaml}");
    Ok(())
}

/// `config --check`: report missing config keys and missing workspace
/// directories without fixing anything.
fn check_setup(cfg: &Config) -> AppResult<()> {
    let missing = Config::missing_keys()?;
    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        for key in &missing {
            warning(format!("Missing key '{}' (default applies)", key));
        }
    }

    let missing_dirs = workspace::missing_dirs(Path::new(&cfg.workspace));
    if missing_dirs.is_empty() {
        success("Workspace layout is complete.");
    } else {
        for dir in &missing_dirs {
            warning(format!("Missing workspace directory '{}'", dir));
        }
    }

    Ok(())
}

fn platform_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".into()
            } else {
                "nano".into()
            }
        })
}

/// Try the requested editor first, then the platform default.
fn open_in_editor(requested: Option<&str>) {
    let path = Config::config_file();
    let fallback = platform_editor();

    let mut candidates = vec![fallback.clone()];
    if let Some(name) = requested
        && name != fallback
    {
        candidates.insert(0, name.to_string());
    }

    for (i, candidate) in candidates.iter().enumerate() {
        let launched = Command::new(candidate)
            .arg(&path)
            .status()
            .map(|s| s.success())
            .unwrap_or(false);

        if launched {
            success(format!("Configuration edited with '{}'", candidate));
            return;
        }

        if i + 1 < candidates.len() {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                candidate,
                candidates[i + 1]
            ));
        }
    }

    error(format!("No usable editor found for {}", path.display()));
}
