//! Configuration loading and data folder resolution

use crate::{Error, Result};
use std::path::PathBuf;

/// Database file name inside the data folder
pub const DATABASE_FILE: &str = "ecotrack.db";

/// Data folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file (`data_dir` key)
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_data_dir(cli_arg: Option<&str>, env_var_name: &str) -> Result<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Ok(PathBuf::from(path));
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        return Ok(PathBuf::from(path));
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = find_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(data_dir) = config.get("data_dir").and_then(|v| v.as_str()) {
                    return Ok(PathBuf::from(data_dir));
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    Ok(default_data_dir())
}

/// Full path of the SQLite database inside the resolved data folder
pub fn database_path(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join(DATABASE_FILE)
}

/// Get default configuration file path for the platform
fn find_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/ecotrack/config.toml first, then /etc/ecotrack/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("ecotrack").join("config.toml"));
        let system_config = PathBuf::from("/etc/ecotrack/config.toml");

        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config("No config file found".to_string()));
    }

    let config_path = dirs::config_dir()
        .map(|d| d.join("ecotrack").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if config_path.exists() {
        Ok(config_path)
    } else {
        Err(Error::Config(format!(
            "Config file not found: {:?}",
            config_path
        )))
    }
}

/// Get OS-dependent default data folder path
fn default_data_dir() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/ecotrack (or /var/lib/ecotrack for system-wide)
        dirs::data_local_dir()
            .map(|d| d.join("ecotrack"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/ecotrack"))
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/ecotrack
        dirs::data_dir()
            .map(|d| d.join("ecotrack"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/ecotrack"))
    } else if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\ecotrack
        dirs::data_local_dir()
            .map(|d| d.join("ecotrack"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\ecotrack"))
    } else {
        PathBuf::from("./ecotrack_data")
    }
}
