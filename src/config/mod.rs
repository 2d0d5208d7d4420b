use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_students_file")]
    pub students_file: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_students_file() -> String {
    "students.csv".to_string()
}
fn default_log_file() -> String {
    Config::log_path().to_string_lossy().to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            students_file: default_students_file(),
            log_file: default_log_file(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Return the full path of the internal audit log
    pub fn log_path() -> PathBuf {
        Self::config_dir().join("rattendance_log.csv")
    }

    /// Roster path with `~` expanded.
    pub fn students_path(&self) -> PathBuf {
        expand_tilde(&self.students_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Write the configuration file, creating its directory if needed.
    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;

        let yaml = serde_yaml::to_string(self)?;
        let path = Self::config_file();
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(path)
    }

    /// Build the configuration for `init`.
    ///
    /// A custom roster name is kept as given: relative names stay relative
    /// to the working directory, like the default `students.csv`.
    pub fn init_all(custom_file: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = Self::load()?;
        if let Some(name) = custom_file {
            config.students_file = name;
        }

        if !is_test {
            let path = config.save()?;
            println!("✅ Config file: {:?}", path);
        }

        Ok(config)
    }
}
