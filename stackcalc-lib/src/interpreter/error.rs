use crate::interpreter::operator::BinaryOperator;
use thiserror::Error;

/// A word in the input that is neither an operator nor a well-formed non-negative integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    #[error("token inválido: '{0}' (esperado número não-negativo ou + - * /)")]
    InvalidToken(String),

    #[error("número fora do intervalo de 64 bits: '{0}' (esperado número não-negativo ou + - * /)")]
    NumberOutOfRange(String),
}

impl LexicalError {
    /// The offending word.
    pub fn word(&self) -> &str {
        match self {
            LexicalError::InvalidToken(word) | LexicalError::NumberOutOfRange(word) => word,
        }
    }
}

/// A failure while evaluating a sequence the grammar validator accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("Divisão por zero.")]
    DivisionByZero,

    #[error("Estouro aritmético em '{0}'.")]
    Overflow(BinaryOperator),

    // Only reachable when eval is handed a sequence parse rejects.
    #[error("Operandos insuficientes para '{0}'.")]
    StackUnderflow(BinaryOperator),

    #[error("Pilha final tem {0} itens, esperado exatamente 1.")]
    MalformedStack(usize),
}
