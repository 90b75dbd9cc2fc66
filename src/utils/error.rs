use thiserror::Error;

use crate::domain::model::Stage;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("Cannot divide by 0")]
    DivideByZero,

    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow { operation: String },

    #[error("Not a number: '{value}'")]
    InvalidOperand { value: String },

    #[error("Unknown operation: '{symbol}'")]
    UnknownOperation { symbol: String },

    #[error("Input closed while waiting for {stage}")]
    InputClosed { stage: Stage },

    #[error("Gave up on {stage} after {attempts} rejected answers")]
    TooManyAttempts { stage: Stage, attempts: u32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GreeterError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GreeterError::DivideByZero | GreeterError::ArithmeticOverflow { .. } => {
                ErrorSeverity::Low
            }
            GreeterError::TooManyAttempts { .. } => ErrorSeverity::Medium,
            GreeterError::InvalidOperand { .. }
            | GreeterError::UnknownOperation { .. }
            | GreeterError::InputClosed { .. }
            | GreeterError::ConfigValidationError { .. }
            | GreeterError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            GreeterError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度決定程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GreeterError::DivideByZero => "Cannot divide by 0".to_string(),
            GreeterError::ArithmeticOverflow { operation } => {
                format!("The result of {} does not fit in the operand type", operation)
            }
            GreeterError::InvalidOperand { value } => {
                format!("'{}' is neither an integer nor a decimal number", value)
            }
            GreeterError::UnknownOperation { symbol } => {
                format!("'{}' is not one of + - * /", symbol)
            }
            GreeterError::InputClosed { stage } => {
                format!("No more input was available while asking for your {}", stage)
            }
            GreeterError::TooManyAttempts { stage, attempts } => format!(
                "Stopped asking for your {} after {} invalid answers",
                stage, attempts
            ),
            GreeterError::IoError(e) => format!("Console I/O failed: {}", e),
            GreeterError::ConfigValidationError { field, message } => {
                format!("Could not read configuration ({}): {}", field, message)
            }
            GreeterError::InvalidConfigValueError { field, value, reason } => {
                format!("Setting {} = '{}' is not allowed: {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GreeterError::DivideByZero => "Use a non-zero divisor",
            GreeterError::ArithmeticOverflow { .. } => {
                "Use smaller operands or pass a decimal number to force float arithmetic"
            }
            GreeterError::InvalidOperand { .. } => "Pass operands like 42, -7 or 2.5",
            GreeterError::UnknownOperation { .. } => {
                "Use +, -, *, / or add, subtract, multiply, divide"
            }
            GreeterError::InputClosed { .. } => {
                "Run the program in an interactive terminal or pipe in one answer per line"
            }
            GreeterError::TooManyAttempts { .. } => {
                "Raise --max-attempts or leave it unset for unlimited retries"
            }
            GreeterError::IoError(_) => "Check that stdin and stdout are still open",
            GreeterError::ConfigValidationError { .. } => {
                "Make sure the file exists and is valid TOML format"
            }
            GreeterError::InvalidConfigValueError { .. } => {
                "Fix the value in the config file or on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;
