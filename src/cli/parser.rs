use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for demshub
/// CLI application to manage an image data-entry hub backed by SQLite
#[derive(Parser)]
#[command(
    name = "demshub",
    version = env!("CARGO_PKG_VERSION"),
    about = "A data-entry hub CLI: workspace setup, image intake, projects, tasks and wallets over SQLite",
    long_about = None
)]
pub struct Cli {
    /// Use this database file instead of the configured one
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Skip config-file writes (integration-test harness)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the workspace, the configuration and the database
    Init {
        /// Workspace root directory (default: current directory)
        #[arg(long = "root", value_name = "DIR")]
        root: Option<String>,
    },

    /// Inspect or edit the configuration file
    Config {
        #[arg(long = "print", help = "Dump the active configuration as YAML")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Report missing config keys and workspace directories"
        )]
        check: bool,

        #[arg(long = "edit", help = "Open the configuration file in an editor")]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (defaults to $EDITOR/$VISUAL)")]
        editor: Option<String>,
    },

    /// Database maintenance (migrations, integrity, stats)
    Db {
        #[arg(long = "migrate", help = "Apply pending schema migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Run PRAGMA integrity_check")]
        check: bool,

        #[arg(long = "vacuum", help = "Reclaim space with VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show size, row counts and assignment span")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print the audit log, newest first")]
        print: bool,
    },

    /// Scan uploads/pending and register new images in the database
    Sync {
        #[arg(
            long = "dry-run",
            help = "Report what would be registered without touching the database"
        )]
        dry_run: bool,

        #[arg(
            long = "strict",
            help = "Refuse the scan on any filename advisory instead of warning"
        )]
        strict: bool,
    },

    /// Manage user accounts (admins and employees)
    User {
        #[arg(long = "add", help = "Create a new account")]
        add: bool,

        #[arg(long = "name", help = "Full name (with --add)")]
        name: Option<String>,

        #[arg(long = "email", help = "Email address, stored lowercase (with --add)")]
        email: Option<String>,

        #[arg(long = "password", help = "Plaintext password to hash (with --add)")]
        password: Option<String>,

        #[arg(
            long = "role",
            help = "Account role: admin or employee (default employee)"
        )]
        role: Option<String>,

        #[arg(long = "list", help = "List all accounts")]
        list: bool,

        #[arg(long = "show", value_name = "ID", help = "Show account details")]
        show: Option<i64>,

        #[arg(
            long = "toggle",
            value_name = "ID",
            help = "Toggle an account between active and inactive"
        )]
        toggle: Option<i64>,

        #[arg(
            long = "update",
            value_name = "ID",
            help = "Update profile fields on an account"
        )]
        update: Option<i64>,

        #[arg(long = "phone", help = "Phone number (with --update)")]
        phone: Option<String>,

        #[arg(long = "gender", help = "Gender (with --update)")]
        gender: Option<String>,

        #[arg(
            long = "dob",
            value_name = "YYYY-MM-DD",
            help = "Date of birth (with --update)"
        )]
        dob: Option<String>,

        #[arg(long = "designation", help = "Job designation (with --update)")]
        designation: Option<String>,
    },

    /// Create a project and assign pending images to an employee
    Assign {
        /// Employee user id receiving the project
        #[arg(long = "employee", value_name = "ID")]
        employee: i64,

        /// Number of images (one task each) to assign
        #[arg(long = "tasks", value_name = "N")]
        tasks: usize,

        /// Project cost, credited to the wallet on approval
        #[arg(long = "cost", default_value_t = 0.0)]
        cost: f64,

        /// Security deposit held for the project
        #[arg(long = "deposit", default_value_t = 0.0)]
        deposit: f64,

        /// Days until the project expires (default from config)
        #[arg(long = "expiry-days", value_name = "DAYS")]
        expiry_days: Option<i64>,
    },

    /// List projects or show one with its tasks
    Projects {
        /// Filter by assignment period (YYYY, YYYY-MM, YYYY-MM-DD, start:end ranges, or all)
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range on the assignment date"
        )]
        period: Option<String>,

        #[arg(
            long = "status",
            help = "Filter by status: in-progress, in-review, approved, rejected"
        )]
        status: Option<String>,

        #[arg(long = "employee", value_name = "ID", help = "Filter by employee id")]
        employee: Option<i64>,

        #[arg(long = "review", help = "Show only the review queue (status In Review)")]
        review: bool,

        #[arg(
            long = "show",
            value_name = "ID",
            help = "Show one project with its tasks and progress"
        )]
        show: Option<i64>,
    },

    /// Record the data-entry fields for a task
    Entry {
        /// Task id
        task_id: i64,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "age")]
        age: Option<String>,

        #[arg(long = "mobile", help = "Mobile number")]
        mobile: Option<String>,

        #[arg(long = "sex")]
        sex: Option<String>,

        #[arg(long = "address")]
        address: Option<String>,

        #[arg(long = "receipt", help = "Receipt number")]
        receipt: Option<String>,

        /// Correct data on a project already in review
        #[arg(long = "review")]
        review: bool,
    },

    /// Submit a fully saved project for review
    Submit {
        /// Project id
        project_id: i64,
    },

    /// Approve or reject a project in review
    Finalize {
        /// Project id
        project_id: i64,

        #[arg(
            long = "approve",
            conflicts_with = "reject",
            help = "Approve the project and credit its cost to the employee wallet"
        )]
        approve: bool,

        #[arg(long = "reject", help = "Reject the project")]
        reject: bool,
    },

    /// Show an employee's wallet balance and credit history
    Wallet {
        /// Employee user id
        employee_id: i64,
    },

    /// Record or list contact inquiries
    Inquiry {
        #[arg(long = "add", help = "Record a new inquiry")]
        add: bool,

        #[arg(long = "name", help = "Sender name (with --add)")]
        name: Option<String>,

        #[arg(long = "email", help = "Sender email (with --add)")]
        email: Option<String>,

        #[arg(long = "mobile", help = "Sender mobile number (optional)")]
        mobile: Option<String>,

        #[arg(long = "message", help = "Inquiry text (with --add)")]
        message: Option<String>,

        #[arg(long = "list", help = "List recorded inquiries, newest first")]
        list: bool,
    },

    /// Copy the database to a backup file
    Backup {
        /// Destination path for the copy
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the copy (zip on Windows, tar.gz elsewhere)
        #[arg(long)]
        compress: bool,
    },

    /// Export project or task data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range on the assignment date"
        )]
        range: Option<String>,

        /// Export PROJECTS (from `projects` table)
        #[arg(long, conflicts_with = "tasks")]
        projects: bool,

        /// Export TASKS with their entered data (from `tasks` table)
        #[arg(long, conflicts_with = "projects")]
        tasks: bool,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },
}
