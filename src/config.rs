// File: ./src/config.rs
use crate::calendar::WeekStart;
use crate::clock::{DateTimeFormat, check_pattern, parse_locale};
use crate::paths::AppPaths;
use crate::pincode::DEFAULT_PIN_LENGTH;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub greeting: String,
    pub pincode_length: usize,
    pub tick_interval_ms: u64,
    pub week_starts_on: WeekStart,
    pub locale: String,
    pub date_format: String,
    pub hour12: bool,
    pub time_step_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            greeting: "Good morning!".to_string(),
            pincode_length: DEFAULT_PIN_LENGTH,
            tick_interval_ms: 1000,
            week_starts_on: WeekStart::Monday,
            locale: "en_US".to_string(),
            date_format: "%A, %B %-d, %Y".to_string(),
            hour12: false,
            time_step_minutes: 10,
        }
    }
}

impl Config {
    /// Reads the user's config file. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::config_file()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::config_file()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.pincode_length == 0 {
            bail!("pincode_length must be at least 1");
        }
        if self.tick_interval_ms == 0 {
            bail!("tick_interval_ms must be positive");
        }
        if self.time_step_minutes == 0 {
            bail!("time_step_minutes must be positive");
        }
        parse_locale(&self.locale)?;
        check_pattern(&self.date_format)?;
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn date_time_format(&self) -> Result<DateTimeFormat> {
        DateTimeFormat::new(&self.locale, &self.date_format, self.hour12)
    }
}
