pub mod calculator;
pub mod dialogue;

pub use crate::domain::model::{Age, AgeComparison, GreetingReport, Number, Stage, UserName};
pub use crate::domain::ports::{Clock, ConfigProvider, Console};
pub use crate::utils::error::Result;
