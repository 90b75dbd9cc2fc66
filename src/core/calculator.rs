use std::fmt;
use std::str::FromStr;

use crate::domain::model::Number;
use crate::utils::error::{GreeterError, Result};

/// 四則運算可接受的運算元
///
/// 整數除法向零截斷，浮點數依 IEEE-754。各運算溢位時回傳 `None`。
pub trait Operand: Copy {
    fn is_zero(&self) -> bool;

    fn sum(self, rhs: Self) -> Option<Self>;

    fn difference(self, rhs: Self) -> Option<Self>;

    fn product(self, rhs: Self) -> Option<Self>;

    fn quotient(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_int_operand {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                fn is_zero(&self) -> bool {
                    *self == 0
                }

                fn sum(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }

                fn difference(self, rhs: Self) -> Option<Self> {
                    self.checked_sub(rhs)
                }

                fn product(self, rhs: Self) -> Option<Self> {
                    self.checked_mul(rhs)
                }

                fn quotient(self, rhs: Self) -> Option<Self> {
                    self.checked_div(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_operand {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                fn is_zero(&self) -> bool {
                    *self == 0.0
                }

                fn sum(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                fn difference(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }

                fn product(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }

                fn quotient(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }
            }
        )*
    };
}

impl_int_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_operand!(f32, f64);

impl Operand for Number {
    fn is_zero(&self) -> bool {
        match self {
            Number::Int(i) => *i == 0,
            Number::Float(f) => *f == 0.0,
        }
    }

    // Int 溢位時改用 Float，因此永遠有值
    fn sum(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn difference(self, rhs: Self) -> Option<Self> {
        Some(self - rhs)
    }

    fn product(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }

    fn quotient(self, rhs: Self) -> Option<Self> {
        Some(self.combine(rhs, i64::checked_div, |a, b| a / b))
    }
}

fn overflow(operation: Operation) -> GreeterError {
    GreeterError::ArithmeticOverflow {
        operation: operation.to_string(),
    }
}

pub fn add<T: Operand>(a: T, b: T) -> Result<T> {
    a.sum(b).ok_or_else(|| overflow(Operation::Add))
}

pub fn subtract<T: Operand>(a: T, b: T) -> Result<T> {
    a.difference(b).ok_or_else(|| overflow(Operation::Subtract))
}

pub fn multiply<T: Operand>(a: T, b: T) -> Result<T> {
    a.product(b).ok_or_else(|| overflow(Operation::Multiply))
}

pub fn divide<T: Operand>(a: T, b: T) -> Result<T> {
    if b.is_zero() {
        return Err(GreeterError::DivideByZero);
    }
    a.quotient(b).ok_or_else(|| overflow(Operation::Divide))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn apply<T: Operand>(self, a: T, b: T) -> Result<T> {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
            Operation::Multiply => multiply(a, b),
            Operation::Divide => divide(a, b),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
            Operation::Divide => "division",
        };
        f.write_str(name)
    }
}

impl FromStr for Operation {
    type Err = GreeterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" => Ok(Operation::Add),
            "-" | "subtract" => Ok(Operation::Subtract),
            "*" | "x" | "multiply" => Ok(Operation::Multiply),
            "/" | "divide" => Ok(Operation::Divide),
            _ => Err(GreeterError::UnknownOperation {
                symbol: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(add(2, 3).unwrap(), 5);
        assert_eq!(subtract(2, 3).unwrap(), -1);
        assert_eq!(multiply(4, 3).unwrap(), 12);
        assert_eq!(add(0.5, 0.25).unwrap(), 0.75);
    }

    #[test]
    fn test_add_and_multiply_commute_subtract_does_not() {
        let pairs = [(7, 3), (-4, 9), (0, 12), (100, -100)];
        for (a, b) in pairs {
            assert_eq!(add(a, b).unwrap(), add(b, a).unwrap());
            assert_eq!(multiply(a, b).unwrap(), multiply(b, a).unwrap());
        }
        assert_ne!(subtract(7, 3).unwrap(), subtract(3, 7).unwrap());
    }

    #[test]
    fn test_integer_overflow_is_an_error_not_a_panic() {
        let err = subtract(2u32, 3u32).unwrap_err();
        assert!(matches!(
            err,
            GreeterError::ArithmeticOverflow { ref operation } if operation == "subtraction"
        ));
        assert!(matches!(
            add(i32::MAX, 1),
            Err(GreeterError::ArithmeticOverflow { .. })
        ));
        assert!(matches!(
            multiply(u8::MAX, 2),
            Err(GreeterError::ArithmeticOverflow { .. })
        ));
        assert!(matches!(
            Operation::Add.apply(i64::MAX, 1),
            Err(GreeterError::ArithmeticOverflow { .. })
        ));
    }

    #[test]
    fn test_float_operations_never_overflow_into_errors() {
        assert_eq!(add(f64::MAX, f64::MAX).unwrap(), f64::INFINITY);
        assert_eq!(subtract(2.0f32, 3.0f32).unwrap(), -1.0);
    }

    #[test]
    fn test_integer_division_truncates_toward_zero() {
        assert_eq!(divide(7, 2).unwrap(), 3);
        assert_eq!(divide(-7, 2).unwrap(), -3);
        assert_eq!(divide(7u32, 7u32).unwrap(), 1);
    }

    #[test]
    fn test_float_division() {
        assert_eq!(divide(7.0, 2.0).unwrap(), 3.5);
        assert_eq!(divide(1.0f32, 4.0f32).unwrap(), 0.25);
    }

    #[test]
    fn test_divide_by_zero_is_an_error() {
        assert!(matches!(divide(5, 0), Err(GreeterError::DivideByZero)));
        assert!(matches!(divide(5.0, 0.0), Err(GreeterError::DivideByZero)));
        assert!(matches!(divide(5.0, -0.0), Err(GreeterError::DivideByZero)));
        assert!(matches!(
            divide(Number::Float(1.5), Number::Int(0)),
            Err(GreeterError::DivideByZero)
        ));
    }

    #[test]
    fn test_integer_overflow_on_divide() {
        assert!(matches!(
            divide(i32::MIN, -1),
            Err(GreeterError::ArithmeticOverflow { .. })
        ));
    }

    #[test]
    fn test_number_division_policy() {
        assert_eq!(divide(Number::Int(7), Number::Int(2)).unwrap(), Number::Int(3));
        assert_eq!(divide(Number::Int(7), Number::Float(2.0)).unwrap(), Number::Float(3.5));
        assert_eq!(
            divide(Number::Int(i64::MIN), Number::Int(-1)).unwrap(),
            Number::Float(-(i64::MIN as f64))
        );
    }

    #[test]
    fn test_operation_parsing_and_apply() {
        assert_eq!("+".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("Multiply".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!("x".parse::<Operation>().unwrap(), Operation::Multiply);
        assert!("%".parse::<Operation>().is_err());

        assert_eq!(Operation::Subtract.apply(10, 4).unwrap(), 6);
        assert!(Operation::Divide.apply(1, 0).is_err());
        assert_eq!(Operation::Divide.symbol(), "/");
    }
}
