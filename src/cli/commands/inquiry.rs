use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::inquiries;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Inquiry {
        add,
        name,
        email,
        mobile,
        message,
        list,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *add {
            let name = name
                .as_deref()
                .ok_or_else(|| AppError::Other("--name is required with --add".to_string()))?;
            let email = email
                .as_deref()
                .ok_or_else(|| AppError::Other("--email is required with --add".to_string()))?;
            let message = message
                .as_deref()
                .ok_or_else(|| AppError::Other("--message is required with --add".to_string()))?;

            let id =
                inquiries::insert_inquiry(&pool.conn, name, email, mobile.as_deref(), message)?;

            success(format!("Inquiry {} recorded from {}", id, name));
        }

        if *list {
            let rows = inquiries::list_inquiries(&pool.conn)?;

            if rows.is_empty() {
                info("No inquiries recorded.");
                return Ok(());
            }

            for inquiry in &rows {
                println!(
                    "✉️  [{}] {} <{}>{}",
                    inquiry.submitted_at,
                    inquiry.name,
                    inquiry.email,
                    inquiry
                        .mobile_number
                        .as_deref()
                        .map(|m| format!(" ({})", m))
                        .unwrap_or_default()
                );
                println!("    {}", inquiry.message);
            }
            println!("{} inquiry(ies)", rows.len());
        }
    }

    Ok(())
}
