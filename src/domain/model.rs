use std::fmt;
use std::str::FromStr;

use crate::utils::error::GreeterError;

/// 對話中的收集階段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Name,
    Age,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Name => write!(f, "name"),
            Stage::Age => write!(f, "age"),
        }
    }
}

/// 命令列運算元：整數或浮點數
///
/// 兩個 `Int` 運算溢位時改以 `Float` 計算；與 `Float` 混用時一律提升為 `Float`。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub(crate) fn combine(
        self,
        rhs: Number,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match int_op(a, b) {
                Some(value) => Number::Int(value),
                None => Number::Float(float_op(a as f64, b as f64)),
            },
            (a, b) => Number::Float(float_op(a.as_f64(), b.as_f64())),
        }
    }
}

impl FromStr for Number {
    type Err = GreeterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(Number::Int(i));
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Number::Float(f)),
            _ => Err(GreeterError::InvalidOperand {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl std::ops::Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        self.combine(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl std::ops::Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        self.combine(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl std::ops::Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        self.combine(rhs, i64::checked_mul, |a, b| a * b)
    }
}

/// 使用者名稱，保證不是空白
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// 去除行尾空白與換行；全空白則回傳 `None`
    pub fn parse(line: &str) -> Option<Self> {
        let name = line.trim_end();
        if name.trim().is_empty() {
            None
        } else {
            Some(Self(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 年齡，範圍為開區間 (0, 120)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(u8);

impl Age {
    pub const UPPER_EXCLUSIVE: i64 = 120;

    /// Parse-or-reject: only a plain integer literal inside the range is accepted.
    pub fn parse(input: &str) -> Option<Self> {
        let value = input.trim().parse::<i64>().ok()?;
        Self::new(value)
    }

    pub fn new(value: i64) -> Option<Self> {
        if value > 0 && value < Self::UPPER_EXCLUSIVE {
            u8::try_from(value).ok().map(Self)
        } else {
            None
        }
    }

    pub fn years(self) -> i32 {
        i32::from(self.0)
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 與參考人物的年齡比較結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeComparison {
    Younger(u32),
    Older(u32),
    Same,
}

impl AgeComparison {
    pub fn from_difference(difference: i32) -> Self {
        match difference {
            d if d < 0 => AgeComparison::Younger(d.unsigned_abs()),
            d if d > 0 => AgeComparison::Older(d.unsigned_abs()),
            _ => AgeComparison::Same,
        }
    }

    pub fn describe(&self, reference_person: &str) -> String {
        match self {
            AgeComparison::Younger(years) => {
                format!("You're {} years younger than {}!", years, reference_person)
            }
            AgeComparison::Older(years) => {
                format!("You're {} years older than {}!", years, reference_person)
            }
            AgeComparison::Same => {
                format!("Woah, you're the same age as {}!", reference_person)
            }
        }
    }
}

/// 一次對話的最終結果
#[derive(Debug, Clone, PartialEq)]
pub struct GreetingReport {
    pub name: UserName,
    pub age: Age,
    pub current_year: i32,
    pub difference: i32,
    pub comparison: AgeComparison,
    pub message: String,
}
