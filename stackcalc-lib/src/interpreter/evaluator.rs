use crate::interpreter::error::RuntimeError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use log::trace;

/// The operands of a single evaluation, pushed and popped at the top only.
#[derive(Debug)]
struct OperandStack(Vec<i64>);

impl OperandStack {
    fn with_capacity(capacity: usize) -> Self {
        OperandStack(Vec::with_capacity(capacity))
    }

    fn push(&mut self, value: i64) {
        self.0.push(value);
    }

    /// Pops the right operand, then the left one, and pushes `left operator right`.
    fn apply(&mut self, operator: BinaryOperator) -> Result<(), RuntimeError> {
        let right = self.0.pop().ok_or(RuntimeError::StackUnderflow(operator))?;
        let left = self.0.pop().ok_or(RuntimeError::StackUnderflow(operator))?;
        let result = operator.evaluate(left, right)?;
        trace!("{} {} {} = {}", left, operator, right, result);
        self.push(result);
        Ok(())
    }

    fn into_result(self) -> Result<i64, RuntimeError> {
        match self.0.as_slice() {
            [result] => Ok(*result),
            values => Err(RuntimeError::MalformedStack(values.len())),
        }
    }
}

/// Evaluates the given RPN tokens using an operand stack.
///
/// The tokens are expected to have been accepted by
/// [`parse`](crate::interpreter::parser::parse) already; a sequence that
/// leaves anything other than one value behind is still reported as an error.
///
/// # Arguments
///
/// * `tokens`: The tokens to evaluate, in postfix order.
///
/// returns: The single value the expression reduces to.
///
/// # Examples
///
/// ```
/// use stackcalc::interpreter::evaluator::eval;
/// use stackcalc::interpreter::lexer::scan;
///
/// let tokens = scan("5 1 2 + 4 * + 3 -").unwrap();
/// assert_eq!(eval(&tokens).unwrap(), 14);
/// ```
pub fn eval(tokens: &[Token]) -> Result<i64, RuntimeError> {
    let mut stack = OperandStack::with_capacity(tokens.len());
    for token in tokens {
        match *token {
            Token::Number(value) => stack.push(value),
            Token::Plus => stack.apply(BinaryOperator::Add)?,
            Token::Minus => stack.apply(BinaryOperator::Subtract)?,
            Token::Mul => stack.apply(BinaryOperator::Multiply)?,
            Token::Div => stack.apply(BinaryOperator::Divide)?,
        }
    }
    stack.into_result()
}
