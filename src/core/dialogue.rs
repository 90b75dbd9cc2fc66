use crate::domain::model::{Age, AgeComparison, GreetingReport, Stage, UserName};
use crate::domain::ports::{Clock, ConfigProvider, Console};
use crate::utils::error::{GreeterError, Result};

pub const MATZ_BIRTH_YEAR: i32 = 1964;
pub const MATZ: &str = "Yukihiro \"Matz\" Matsumoto, the lead designer of Ruby";

const NAME_PROMPT: &str = "What is your name?";
const NAME_RETRY_PROMPT: &str = "I didn't get that. What is your name?";
const AGE_RETRY_PROMPT: &str = "That's not really your age. How old are you, for real?";

/// 注入對話的設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueSettings {
    pub reference_birth_year: i32,
    pub reference_person: String,
    /// `None` 表示無限重試
    pub max_attempts: Option<u32>,
}

impl Default for DialogueSettings {
    fn default() -> Self {
        Self {
            reference_birth_year: MATZ_BIRTH_YEAR,
            reference_person: MATZ.to_string(),
            max_attempts: None,
        }
    }
}

impl DialogueSettings {
    pub fn from_provider<P: ConfigProvider + ?Sized>(provider: &P) -> Self {
        Self {
            reference_birth_year: provider.reference_birth_year(),
            reference_person: provider.reference_person().to_string(),
            max_attempts: provider.max_attempts(),
        }
    }
}

/// `0 < age < 120`，非整數文字一律視為無效
pub fn valid_age(input: &str) -> bool {
    Age::parse(input).is_some()
}

pub fn age_difference(reference_birth_year: i32, current_year: i32, age: Age) -> i32 {
    let birth_year = current_year - age.years();
    reference_birth_year - birth_year
}

/// 問名字、問年齡、回報與參考人物的年齡差，只跑一輪
pub struct Dialogue<C: Console, K: Clock> {
    console: C,
    clock: K,
    settings: DialogueSettings,
}

impl<C: Console, K: Clock> Dialogue<C, K> {
    pub fn new(console: C, clock: K, settings: DialogueSettings) -> Self {
        Self {
            console,
            clock,
            settings,
        }
    }

    pub fn into_console(self) -> C {
        self.console
    }

    pub fn greet(&mut self) -> Result<GreetingReport> {
        tracing::debug!("👋 Starting dialogue");

        self.console.write_line(NAME_PROMPT)?;
        let name = self.get_name()?;
        tracing::debug!("✅ Accepted name");

        self.console
            .write_line(&format!("Hello {}, how old are you?", name))?;
        let age = self.get_age()?;
        tracing::debug!("✅ Accepted age {}", age);

        let report = self.display_age_difference_from_matz(name, age)?;
        tracing::info!(
            "📊 Reported age difference {} for current year {}",
            report.difference,
            report.current_year
        );
        Ok(report)
    }

    /// 讀取名字，空白行會重新詢問
    pub fn get_name(&mut self) -> Result<UserName> {
        self.collect(Stage::Name, NAME_RETRY_PROMPT, UserName::parse)
    }

    /// 讀取年齡，無效輸入會重新詢問
    pub fn get_age(&mut self) -> Result<Age> {
        self.collect(Stage::Age, AGE_RETRY_PROMPT, Age::parse)
    }

    pub fn calculate_age_difference(&self, age: Age) -> (i32, i32) {
        let current_year = self.clock.current_year();
        let difference = age_difference(self.settings.reference_birth_year, current_year, age);
        (current_year, difference)
    }

    pub fn display_age_difference_from_matz(
        &mut self,
        name: UserName,
        age: Age,
    ) -> Result<GreetingReport> {
        let (current_year, difference) = self.calculate_age_difference(age);
        let comparison = AgeComparison::from_difference(difference);
        let message = comparison.describe(&self.settings.reference_person);
        self.console.write_line(&message)?;

        Ok(GreetingReport {
            name,
            age,
            current_year,
            difference,
            comparison,
            message,
        })
    }

    fn collect<T>(
        &mut self,
        stage: Stage,
        retry_prompt: &str,
        accept: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        let mut rejected = 0u32;
        loop {
            let line = self
                .console
                .read_line()?
                .ok_or(GreeterError::InputClosed { stage })?;

            if let Some(value) = accept(&line) {
                return Ok(value);
            }

            rejected += 1;
            tracing::debug!("🔁 Rejected {} input #{}: {:?}", stage, rejected, line);
            if let Some(max) = self.settings.max_attempts {
                if rejected >= max {
                    tracing::warn!("⚠️ Giving up on {} after {} attempts", stage, rejected);
                    return Err(GreeterError::TooManyAttempts {
                        stage,
                        attempts: rejected,
                    });
                }
            }
            self.console.write_line(retry_prompt)?;
        }
    }
}
