use crate::interpreter::error::RuntimeError;
use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn token(&self) -> Token {
        match self {
            BinaryOperator::Add => Token::Plus,
            BinaryOperator::Subtract => Token::Minus,
            BinaryOperator::Multiply => Token::Mul,
            BinaryOperator::Divide => Token::Div,
        }
    }

    /// Applies the operator to `a` (left) and `b` (right).
    ///
    /// Division truncates toward zero. A zero divisor is rejected before dividing,
    /// and any result that does not fit in 64 bits is an overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use stackcalc::interpreter::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Divide.evaluate(-7, 3).unwrap(), -2);
    /// assert!(BinaryOperator::Divide.evaluate(1, 0).is_err());
    /// ```
    pub fn evaluate(&self, a: i64, b: i64) -> Result<i64, RuntimeError> {
        let result = match self {
            BinaryOperator::Add => a.checked_add(b),
            BinaryOperator::Subtract => a.checked_sub(b),
            BinaryOperator::Multiply => a.checked_mul(b),
            BinaryOperator::Divide => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                a.checked_div(b)
            }
        };
        result.ok_or(RuntimeError::Overflow(*self))
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
