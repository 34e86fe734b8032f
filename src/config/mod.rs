use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use dirs::home_dir;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    core::scenario::{types::validate_rate, DEFAULT_SAVINGS_RATE},
    core::services::PROJECTION_DAY,
    domain::Account,
    errors::{Result, StoryError},
};

const DEFAULT_DIR_NAME: &str = ".finance_story";
const CONFIG_FILE: &str = "config.json";
const HOME_ENV: &str = "FINANCE_STORY_HOME";
const TMP_SUFFIX: &str = "tmp";

/// Scenario constants for one household narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    pub monthly_income: Decimal,
    pub starting_balance: Decimal,
    pub projection_year: i32,
    pub projection_day: u32,
    pub default_savings_rate: Decimal,
    pub checking_account: Account,
    pub savings_account: Account,
    /// Category marking recorded deposits on the savings account.
    pub savings_category: String,
    pub event: EventConfig,
}

/// The large one-off expense the what-if scenarios revolve around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    pub category: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub split_dates: [NaiveDate; 2],
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            monthly_income: Decimal::from(4500),
            starting_balance: Decimal::from(5000),
            projection_year: 2024,
            projection_day: PROJECTION_DAY,
            default_savings_rate: DEFAULT_SAVINGS_RATE,
            checking_account: Account::Checking,
            savings_account: Account::Savings,
            savings_category: "Savings Balance".into(),
            event: EventConfig::default(),
        }
    }
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            category: "Travel".into(),
            date: ymd(2024, 4, 15),
            amount: Decimal::from(-1200),
            split_dates: [ymd(2024, 4, 15), ymd(2024, 5, 15)],
        }
    }
}

impl StoryConfig {
    pub fn validate(&self) -> Result<()> {
        validate_rate(self.default_savings_rate)?;
        if self.monthly_income.is_sign_negative() && !self.monthly_income.is_zero() {
            return Err(StoryError::invalid(
                "monthly_income",
                format!("{} must not be negative", self.monthly_income),
            ));
        }
        if !(1..=28).contains(&self.projection_day) {
            return Err(StoryError::invalid(
                "projection_day",
                format!("{} must fall within 1..=28", self.projection_day),
            ));
        }
        if self.event.category.trim().is_empty() {
            return Err(StoryError::invalid("event.category", "must not be empty"));
        }
        Ok(())
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// Loads and saves [`StoryConfig`] as pretty JSON.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `$FINANCE_STORY_HOME/config.json`, defaulting to `~/.finance_story/config.json`.
    pub fn new() -> Self {
        Self::with_path(app_data_dir().join(CONFIG_FILE))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns defaults when the file does not exist yet.
    pub fn load(&self) -> Result<StoryConfig> {
        let config = if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data)?
        } else {
            debug!(path = %self.path.display(), "no config file; using defaults");
            StoryConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &StoryConfig) -> Result<()> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
