pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::{LexicalError, RuntimeError};
use crate::interpreter::lexer::tokens_to_string;
use log::debug;
use std::fmt;
use std::fmt::Formatter;

/// The result of running one line of input through the whole pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ok(i64),
    LexicalFailure(LexicalError),
    SyntaxFailure,
    RuntimeFailure(RuntimeError),
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn result(&self) -> Option<i64> {
        match self {
            Outcome::Ok(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(result) => write!(f, "Sintaxe Válida; Resultado = {}", result),
            Outcome::LexicalFailure(error) => write!(f, "Erro Léxico: {}", error),
            Outcome::SyntaxFailure => write!(f, "Erro de Sintaxe"),
            Outcome::RuntimeFailure(error) => write!(f, "Erro de Execução: {}", error),
        }
    }
}

/// Scans, validates and evaluates the given RPN expression.
///
/// Each stage only runs if the previous one succeeded, so a syntax error is
/// never evaluated and a lexical error is never validated.
///
/// # Arguments
///
/// * `source`: One line of whitespace-separated RPN, e.g. `"3 4 + 2 *"`.
///
/// returns: The result of the expression, or the first stage that rejected it.
///
/// # Examples
///
/// ```
/// use stackcalc::interpreter::{run, Outcome};
///
/// assert_eq!(run("5 1 2 + 4 * + 3 -"), Outcome::Ok(14));
/// assert_eq!(run("1 2"), Outcome::SyntaxFailure);
/// println!("{}", run("5 0 /"));
/// ```
pub fn run(source: &str) -> Outcome {
    let tokens = match lexer::scan(source) {
        Ok(tokens) => tokens,
        Err(error) => {
            debug!("rejected by lexer: {}", error);
            return Outcome::LexicalFailure(error);
        }
    };
    debug!("scanned {} tokens: {}", tokens.len(), tokens_to_string(&tokens));

    if !parser::parse(&tokens) {
        debug!("rejected by grammar validator");
        return Outcome::SyntaxFailure;
    }

    match evaluator::eval(&tokens) {
        Ok(result) => Outcome::Ok(result),
        Err(error) => {
            debug!("evaluation failed: {}", error);
            Outcome::RuntimeFailure(error)
        }
    }
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use crate::interpreter::operator::BinaryOperator;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    #[parameterized(
    source = { "42", "7 3 /", "5 1 2 + 4 * + 3 -", "  1   2 +  " },
    expected = { 42, 2, 14, 3 }
    )]
    fn valid_expression_returns_result(source: &str, expected: i64) {
        self::assert_eq!(run(source), Outcome::Ok(expected));
    }

    #[parameterized(
    source = { "", "+", "1 2", "1 +", "1 2 + +" }
    )]
    fn malformed_expression_is_a_syntax_failure(source: &str) {
        self::assert_eq!(run(source), Outcome::SyntaxFailure);
    }

    #[test]
    fn lexical_failure_takes_precedence_over_syntax() {
        // Would also be a syntax error, but the lexer stops first.
        assert_eq!(
            run("01 +"),
            Outcome::LexicalFailure(LexicalError::InvalidToken("01".to_string()))
        );
    }

    #[test]
    fn negative_literal_is_a_lexical_failure() {
        assert_eq!(
            run("-7 3 /"),
            Outcome::LexicalFailure(LexicalError::InvalidToken("-7".to_string()))
        );
    }

    #[test]
    fn syntax_failure_is_never_evaluated() {
        // Evaluating this would divide by zero.
        assert_eq!(run("1 0 / 2"), Outcome::SyntaxFailure);
    }

    #[test]
    fn division_by_zero_is_a_runtime_failure() {
        assert_eq!(
            run("5 0 /"),
            Outcome::RuntimeFailure(RuntimeError::DivisionByZero)
        );
    }

    #[test]
    fn overflow_is_a_runtime_failure() {
        assert_eq!(
            run("9223372036854775807 1 +"),
            Outcome::RuntimeFailure(RuntimeError::Overflow(BinaryOperator::Add))
        );
    }

    #[test]
    fn running_twice_yields_identical_outcomes() {
        for source in ["5 1 2 + 4 * + 3 -", "5 0 /", "1 2", "x"] {
            assert_eq!(run(source), run(source));
        }
    }

    #[parameterized(
    source = {
    "5 1 2 + 4 * + 3 -",
    "0 7 - 3 /",
    "01 + 2",
    "1 2",
    "5 0 /",
    "99999999999999999999",
    },
    expected_message = {
    "Sintaxe Válida; Resultado = 14",
    "Sintaxe Válida; Resultado = -2",
    "Erro Léxico: token inválido: '01' (esperado número não-negativo ou + - * /)",
    "Erro de Sintaxe",
    "Erro de Execução: Divisão por zero.",
    "Erro Léxico: número fora do intervalo de 64 bits: '99999999999999999999' \
     (esperado número não-negativo ou + - * /)",
    }
    )]
    fn outcome_displays_as_status_line(source: &str, expected_message: &str) {
        self::assert_eq!(run(source).to_string(), expected_message);
    }

    #[test]
    fn result_is_only_present_on_success() {
        assert_eq!(run("2 3 *").result(), Some(6));
        assert!(run("2 3 *").is_ok());
        assert_eq!(run("2 0 /").result(), None);
        assert!(!run("2 0 /").is_ok());
    }
}
