use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{projects, tasks, users};
use crate::errors::{AppError, AppResult};
use crate::models::project::ProjectStatus;
use crate::models::task::TaskStatus;
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::formatting::{money, progress_percent};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Projects {
        period,
        status,
        employee,
        review,
        show,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if let Some(id) = show {
            return show_project(&pool, cfg, *id);
        }

        let status_filter = if *review {
            Some(ProjectStatus::InReview)
        } else {
            match status.as_deref() {
                Some(code) => Some(
                    ProjectStatus::from_code(code)
                        .ok_or_else(|| AppError::InvalidStatus(code.to_string()))?,
                ),
                None => None,
            }
        };

        let rows =
            projects::list_projects(&pool.conn, period.as_deref(), status_filter, *employee)?;

        if rows.is_empty() {
            println!("No projects found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("PROJECT", 10),
            Column::new("EMPLOYEE", 22),
            Column::new("STATUS", 13),
            Column::new("ASSIGNED", 20),
            Column::new("COST", 12),
            Column::new("PROGRESS", 9),
        ]);

        for p in &rows {
            let employee_name = users::get_user(&pool.conn, p.employee_id)?
                .map(|u| u.name)
                .unwrap_or_else(|| format!("#{}", p.employee_id));

            let (total, saved) = tasks::task_counts(&pool.conn, p.id)?;
            let status_str = p.status.to_db_str();

            table.add_row(vec![
                p.id.to_string(),
                p.project_name.clone(),
                employee_name,
                format!("{}{}{}", color_for_status(status_str), status_str, RESET),
                p.assigned_date.clone(),
                money(p.cost, &cfg.currency_symbol),
                format!("{}%", progress_percent(saved as usize, total as usize)),
            ]);
        }

        println!("{}", table.render());
        println!("{} project(s)", rows.len());
    }

    Ok(())
}

fn show_project(pool: &DbPool, cfg: &Config, id: i64) -> AppResult<()> {
    let project =
        projects::get_project(&pool.conn, id)?.ok_or(AppError::ProjectNotFound(id))?;
    let employee = users::get_user(&pool.conn, project.employee_id)?;
    let task_rows = tasks::tasks_for_project(&pool.conn, project.id)?;

    let saved = task_rows
        .iter()
        .filter(|t| t.status != TaskStatus::Pending)
        .count();
    let status_str = project.status.to_db_str();

    println!("📦 {} (id {})", project.project_name, project.id);
    if let Some(u) = employee {
        println!("   Employee : {} ({})", u.name, u.employee_id);
    }
    println!(
        "   Status   : {}{}{}",
        color_for_status(status_str),
        status_str,
        RESET
    );
    println!("   Assigned : {}", project.assigned_date);
    if let Some(expiry) = &project.expiry_date {
        println!("   Expires  : {}", expiry);
    }
    println!("   Cost     : {}", money(project.cost, &cfg.currency_symbol));
    println!(
        "   Deposit  : {}",
        money(project.security_deposit, &cfg.currency_symbol)
    );
    if let Some(notes) = &project.notes {
        println!("   Notes    : {}", notes);
    }
    println!(
        "   Progress : {}/{} task(s) saved ({}%)",
        saved,
        task_rows.len(),
        progress_percent(saved, task_rows.len())
    );

    if task_rows.is_empty() {
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("TASK", 13),
        Column::new("IMAGE", 28),
        Column::new("STATUS", 10),
        Column::new("UPDATED", 20),
    ]);

    for t in &task_rows {
        let filename = tasks::image_filename(&pool.conn, t.id)?.unwrap_or_default();
        table.add_row(vec![
            t.label(),
            filename,
            t.status.to_db_str().to_string(),
            t.last_updated.clone().unwrap_or_default(),
        ]);
    }

    println!("\n{}", table.render());
    Ok(())
}
