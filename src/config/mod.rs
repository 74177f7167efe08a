use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::geo::GeoJitter;
use crate::models::coordinate::Coordinate;
use crate::utils::path::ensure_parent_dir;

pub mod migrate;

/// One check-in cycle per calendar day.
pub const MAX_MIN_DURATION_HOURS: f64 = 24.0;

/// Near the poles the longitude scale `1 / cos(lat)` blows up.
pub const MAX_ABS_LATITUDE: f64 = 85.0;

/// Backend used for the daily check-in log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Json,
    Sqlite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_storage")]
    pub storage: StorageKind,
    #[serde(default = "default_sign_in_url")]
    pub sign_in_url: String,
    #[serde(default = "default_sign_out_url")]
    pub sign_out_url: String,
    #[serde(default = "default_center_longitude")]
    pub center_longitude: f64,
    #[serde(default = "default_center_latitude")]
    pub center_latitude: f64,
    #[serde(default = "default_radius_meters")]
    pub radius_meters: f64,
    #[serde(default = "default_min_duration_hours")]
    pub min_duration_hours: f64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_use_system_proxy")]
    pub use_system_proxy: bool,
    /// Shell command printing a bearer token on stdout (e.g. a login script).
    #[serde(default)]
    pub token_command: Option<String>,
}

fn default_log_file() -> String {
    Config::config_dir()
        .join("check_in_log.json")
        .to_string_lossy()
        .to_string()
}
fn default_storage() -> StorageKind {
    StorageKind::Json
}
fn default_sign_in_url() -> String {
    "https://ipahw.xjtu.edu.cn/szjy-boot/api/v1/sportActa/signRun".to_string()
}
fn default_sign_out_url() -> String {
    "https://ipahw.xjtu.edu.cn/szjy-boot/api/v1/sportActa/signOutTrain".to_string()
}
fn default_center_longitude() -> f64 {
    108.66
}
fn default_center_latitude() -> f64 {
    34.254
}
fn default_radius_meters() -> f64 {
    50.0
}
fn default_min_duration_hours() -> f64 {
    1.0
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_use_system_proxy() -> bool {
    true
}
fn default_user_agent() -> String {
    "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X) AppleWebKit/605.1.15 \
     (KHTML, like Gecko) Version/16.0 Mobile/15E148 Safari/604.1"
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            storage: default_storage(),
            sign_in_url: default_sign_in_url(),
            sign_out_url: default_sign_out_url(),
            center_longitude: default_center_longitude(),
            center_latitude: default_center_latitude(),
            radius_meters: default_radius_meters(),
            min_duration_hours: default_min_duration_hours(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            use_system_proxy: default_use_system_proxy(),
            token_command: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rcheckin")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rcheckin")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcheckin.conf")
    }

    /// Load the default config file, or defaults if it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Missing file → defaults; unparsable file → error.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        ensure_parent_dir(path)?;
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Reject values the check-in cycle cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if !self.radius_meters.is_finite() || self.radius_meters < 0.0 {
            return Err(AppError::Config(format!(
                "radius_meters must be >= 0 (got {})",
                self.radius_meters
            )));
        }
        if !(0.0..=MAX_MIN_DURATION_HOURS).contains(&self.min_duration_hours) {
            return Err(AppError::Config(format!(
                "min_duration_hours must be within [0, {}] (got {})",
                MAX_MIN_DURATION_HOURS,
                self.min_duration_hours
            )));
        }
        if !(-MAX_ABS_LATITUDE..=MAX_ABS_LATITUDE).contains(&self.center_latitude) {
            return Err(AppError::Config(format!(
                "center_latitude must be within [-{max}, {max}] (got {})",
                self.center_latitude,
                max = MAX_ABS_LATITUDE
            )));
        }
        if !(-180.0..=180.0).contains(&self.center_longitude) {
            return Err(AppError::Config(format!(
                "center_longitude must be within [-180, 180] (got {})",
                self.center_longitude
            )));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::Config("timeout_secs must be > 0".into()));
        }
        if self.sign_in_url.trim().is_empty() || self.sign_out_url.trim().is_empty() {
            return Err(AppError::Config("endpoint URLs must not be empty".into()));
        }
        Ok(())
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.center_longitude, self.center_latitude)
    }

    pub fn jitter(&self) -> GeoJitter {
        GeoJitter::new(self.center(), self.radius_meters)
    }

    /// Write a default config at `config_path`, unless one already exists
    /// and `force` is off. Returns the effective config and whether the file
    /// was written.
    pub fn init_all(
        config_path: &Path,
        log_file: Option<String>,
        force: bool,
    ) -> AppResult<(Self, bool)> {
        if config_path.exists() && !force {
            return Ok((Self::load_from(config_path)?, false));
        }

        let mut config = Config::default();
        if let Some(custom) = log_file {
            config.log_file = custom;
        }
        config.save_to(config_path)?;

        Ok((config, true))
    }
}
