use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth;
use crate::db::pool::DbPool;
use crate::db::users;
use crate::errors::{AppError, AppResult};
use crate::models::user::Role;
use crate::ui::messages::success;
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::formatting::money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User {
        add,
        name,
        email,
        password,
        role,
        list,
        show,
        toggle,
        update,
        phone,
        gender,
        dob,
        designation,
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
            let password = password
                .as_deref()
                .ok_or_else(|| AppError::Other("--password is required with --add".to_string()))?;

            let role = match role.as_deref() {
                Some(code) => {
                    Role::from_code(code).ok_or_else(|| AppError::InvalidRole(code.to_string()))?
                }
                None => Role::Employee,
            };

            let employee_id = users::next_employee_id(&pool.conn, &cfg.employee_id_prefix)?;
            let hash = auth::hash_password(password)?;
            let id = users::insert_user(&pool.conn, &employee_id, name, email, &hash, role)?;

            crate::db::log::ttlog(
                &pool.conn,
                "user-add",
                &employee_id,
                &format!("Account created for {} ({})", name, role.to_db_str()),
            )?;

            success(format!(
                "Account created: id {} / {} ({})",
                id,
                employee_id,
                role.to_db_str()
            ));
        }

        if *list {
            let accounts = users::list_users(&pool.conn)?;

            let mut table = Table::new(vec![
                Column::new("ID", 5),
                Column::new("EMPLOYEE", 14),
                Column::new("NAME", 22),
                Column::new("EMAIL", 28),
                Column::new("ROLE", 9),
                Column::new("STATUS", 9),
                Column::new("WALLET", 12),
            ]);

            for u in &accounts {
                table.add_row(vec![
                    u.id.to_string(),
                    u.employee_id.clone(),
                    u.name.clone(),
                    u.email.clone(),
                    u.role.to_db_str().to_string(),
                    format!(
                        "{}{}{}",
                        color_for_status(u.status.to_db_str()),
                        u.status.to_db_str(),
                        RESET
                    ),
                    money(u.wallet_balance, &cfg.currency_symbol),
                ]);
            }

            println!("{}", table.render());
            println!("{} account(s)", accounts.len());
        }

        if let Some(id) = show {
            let user =
                users::get_user(&pool.conn, *id)?.ok_or(AppError::UserNotFound(*id))?;
            let (assigned, completed) = users::project_counts(&pool.conn, user.id)?;

            println!("👤 {} ({})", user.name, user.employee_id);
            println!("   Email      : {}", user.email);
            println!("   Role       : {}", user.role.to_db_str());
            println!(
                "   Status     : {}{}{}",
                color_for_status(user.status.to_db_str()),
                user.status.to_db_str(),
                RESET
            );
            println!("   Joined     : {}", user.joining_date);
            println!(
                "   Wallet     : {}",
                money(user.wallet_balance, &cfg.currency_symbol)
            );
            println!("   Projects   : {} assigned, {} completed", assigned, completed);
            if let Some(phone) = &user.phone_number {
                println!("   Phone      : {}", phone);
            }
            if let Some(gender) = &user.gender {
                println!("   Gender     : {}", gender);
            }
            if let Some(dob) = &user.date_of_birth {
                println!("   Born       : {}", dob);
            }
            if let Some(designation) = &user.designation {
                println!("   Designation: {}", designation);
            }
            if let Some(last_login) = &user.last_login {
                println!("   Last login : {}", last_login);
            }
        }

        if let Some(id) = update {
            let user =
                users::get_user(&pool.conn, *id)?.ok_or(AppError::UserNotFound(*id))?;

            if phone.is_none() && gender.is_none() && dob.is_none() && designation.is_none() {
                return Err(AppError::Other(
                    "nothing to update: pass --phone, --gender, --dob or --designation"
                        .to_string(),
                ));
            }

            if let Some(d) = dob.as_deref() {
                chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d")
                    .map_err(|_| AppError::InvalidDate(d.to_string()))?;
            }

            users::update_profile(
                &pool.conn,
                user.id,
                phone.as_deref(),
                gender.as_deref(),
                dob.as_deref(),
                designation.as_deref(),
            )?;

            crate::db::log::ttlog(
                &pool.conn,
                "user-update",
                &user.employee_id,
                "Profile fields updated",
            )?;

            success(format!(
                "Profile updated for {} ({})",
                user.name, user.employee_id
            ));
        }

        if let Some(id) = toggle {
            let user =
                users::get_user(&pool.conn, *id)?.ok_or(AppError::UserNotFound(*id))?;
            let next = user.status.toggled();
            users::set_status(&pool.conn, user.id, next)?;

            crate::db::log::ttlog(
                &pool.conn,
                "user-toggle",
                &user.employee_id,
                &format!("Status changed to {}", next.to_db_str()),
            )?;

            success(format!(
                "{} is now {}",
                user.name,
                next.to_db_str()
            ));
        }
    }

    Ok(())
}
