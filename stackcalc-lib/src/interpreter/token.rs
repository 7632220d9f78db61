use crate::interpreter::error::LexicalError;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Number(i64),
    Plus,
    Minus,
    Mul,
    Div,
}

/// Every operator symbol the lexer recognizes, paired with the token it produces.
pub static OPERATOR_SYMBOLS: [(&str, Token); 4] = [
    ("+", Token::Plus),
    ("-", Token::Minus),
    ("*", Token::Mul),
    ("/", Token::Div),
];

impl Token {
    /// A 'value' is a token that pushes an operand, i.e. a number literal.
    pub fn is_value(&self) -> bool {
        matches!(self, Token::Number(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Mul => write!(f, "*"),
            Token::Div => write!(f, "/"),
        }
    }
}

impl str::FromStr for Token {
    type Err = LexicalError;

    fn from_str(word: &str) -> Result<Token, Self::Err> {
        if let Some((_, token)) = OPERATOR_SYMBOLS
            .iter()
            .find(|(symbol, _)| *symbol == word)
        {
            return Ok(*token);
        }
        if is_decimal_literal(word) {
            return word
                .parse::<i64>()
                .map(Token::Number)
                .map_err(|_| LexicalError::NumberOutOfRange(word.to_string()));
        }
        Err(LexicalError::InvalidToken(word.to_string()))
    }
}

/// Either a single `0`, or a non-zero digit followed by any number of digits.
/// Signs and leading zeros are rejected.
fn is_decimal_literal(word: &str) -> bool {
    match word.as_bytes() {
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}
