pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    clock::{FixedClock, SystemClock},
    console::LineConsole,
};
pub use config::GreetingSettings;
pub use crate::core::{
    calculator::{add, divide, multiply, subtract, Operand, Operation},
    dialogue::{Dialogue, DialogueSettings},
};
pub use utils::error::{GreeterError, Result};
