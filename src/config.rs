use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Name of the database file at the workspace root.
pub const DATABASE_FILE: &str = "dems.db";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub workspace: String,
    pub database: String,
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    #[serde(default)]
    pub strict_filenames: bool,
    #[serde(default = "default_expiry_days")]
    pub default_expiry_days: i64,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_employee_prefix")]
    pub employee_id_prefix: String,
    #[serde(default = "default_project_prefix")]
    pub project_prefix: String,
}

fn default_allowed_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "gif"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_expiry_days() -> i64 {
    7
}
fn default_currency_symbol() -> String {
    "₹".to_string()
}
fn default_employee_prefix() -> String {
    "DT-UAO-".to_string()
}
fn default_project_prefix() -> String {
    "HL_B_".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let root = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::for_workspace(&root, None)
    }
}

impl Config {
    /// Build a config for a given workspace root; the database lands at
    /// `<root>/dems.db` unless a custom path is given.
    pub fn for_workspace(root: &Path, custom_db: Option<&str>) -> Self {
        let db_path = match custom_db {
            Some(p) => {
                let p = crate::utils::path::expand_tilde(p);
                if p.is_absolute() { p } else { root.join(p) }
            }
            None => root.join(DATABASE_FILE),
        };
        Self {
            workspace: root.to_string_lossy().to_string(),
            database: db_path.to_string_lossy().to_string(),
            allowed_extensions: default_allowed_extensions(),
            strict_filenames: false,
            default_expiry_days: default_expiry_days(),
            currency_symbol: default_currency_symbol(),
            employee_id_prefix: default_employee_prefix(),
            project_prefix: default_project_prefix(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("demshub")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".demshub")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("demshub.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Write the config file for a workspace and ensure the database file
    /// exists there. In test mode the config file is left untouched.
    pub fn init_all(
        root: &Path,
        custom_db: Option<String>,
        is_test: bool,
    ) -> io::Result<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Self::for_workspace(root, custom_db.as_deref());

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists; the schema comes later
        // through the migration engine.
        let db_path = Path::new(&config.database);
        if !db_path.exists() {
            if let Some(parent) = db_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::File::create(db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }

    /// Report config keys missing from the on-disk file (they fall back to
    /// their defaults at load time).
    pub fn missing_keys() -> io::Result<Vec<&'static str>> {
        let expected = [
            "workspace",
            "database",
            "allowed_extensions",
            "strict_filenames",
            "default_expiry_days",
            "currency_symbol",
            "employee_id_prefix",
            "project_prefix",
        ];

        let path = Self::config_file();
        if !path.exists() {
            return Ok(expected.to_vec());
        }

        let content = fs::read_to_string(&path)?;
        let doc: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| io::Error::other(e.to_string()))?;

        let mut missing = Vec::new();
        for key in expected {
            if doc.get(key).is_none() {
                missing.push(key);
            }
        }
        Ok(missing)
    }
}
