pub mod toml_config;

use crate::core::dialogue::{DialogueSettings, MATZ, MATZ_BIRTH_YEAR};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_positive_number, validate_range, Validate,
};
use toml_config::TomlConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-greeter")]
#[command(about = "Asks your name and age, then compares you with Matz")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Birth year to compare against
    #[arg(long)]
    pub reference_birth_year: Option<i32>,

    /// Who was born in the reference year
    #[arg(long)]
    pub reference_person: Option<String>,

    /// Stop after this many rejected answers per question
    #[arg(long)]
    pub max_attempts: Option<u32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 預設值 → TOML 檔案 → 命令列參數，最後驗證
    pub fn resolve(&self) -> Result<GreetingSettings> {
        let mut settings = match &self.config {
            Some(path) => GreetingSettings::from_toml(&TomlConfig::from_file(path)?),
            None => GreetingSettings::default(),
        };

        if let Some(year) = self.reference_birth_year {
            settings.reference_birth_year = year;
        }
        if let Some(person) = &self.reference_person {
            settings.reference_person = person.clone();
        }
        if self.max_attempts.is_some() {
            settings.max_attempts = self.max_attempts;
        }
        settings.log_json |= self.log_json;

        settings.validate()?;
        Ok(settings)
    }
}

/// 合併後的執行設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingSettings {
    pub reference_birth_year: i32,
    pub reference_person: String,
    pub max_attempts: Option<u32>,
    pub log_level: Option<String>,
    pub log_json: bool,
}

impl Default for GreetingSettings {
    fn default() -> Self {
        Self {
            reference_birth_year: MATZ_BIRTH_YEAR,
            reference_person: MATZ.to_string(),
            max_attempts: None,
            log_level: None,
            log_json: false,
        }
    }
}

impl GreetingSettings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            reference_birth_year: config
                .reference_birth_year()
                .unwrap_or(defaults.reference_birth_year),
            reference_person: config
                .reference_person()
                .map(str::to_string)
                .unwrap_or(defaults.reference_person),
            max_attempts: config.max_attempts(),
            log_level: config.log_level().map(str::to_string),
            log_json: config.log_json(),
        }
    }

    pub fn dialogue_settings(&self) -> DialogueSettings {
        DialogueSettings::from_provider(self)
    }
}

impl ConfigProvider for GreetingSettings {
    fn reference_birth_year(&self) -> i32 {
        self.reference_birth_year
    }

    fn reference_person(&self) -> &str {
        &self.reference_person
    }

    fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }
}

impl Validate for GreetingSettings {
    fn validate(&self) -> Result<()> {
        validate_range(
            "greeting.reference_birth_year",
            self.reference_birth_year,
            1,
            9999,
        )?;
        validate_non_empty_string("greeting.reference_person", &self.reference_person)?;
        if let Some(max) = self.max_attempts {
            validate_positive_number("dialogue.max_attempts", max, 1)?;
        }
        if let Some(level) = &self.log_level {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}
