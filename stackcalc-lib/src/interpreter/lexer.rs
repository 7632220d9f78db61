use crate::interpreter::error::LexicalError;
use crate::interpreter::token::Token;
use itertools::Itertools;

/// Splits the given text on whitespace and classifies every word as a token.
///
/// # Arguments
///
/// * `text`: One line of RPN source, e.g. `"5 1 2 + 4 * + 3 -"`.
///
/// returns: One token per whitespace-delimited word, in source order,
/// or the first word that is not a valid token.
///
/// # Examples
///
/// ```
/// use stackcalc::interpreter::lexer::scan;
/// use stackcalc::interpreter::token::Token;
///
/// let tokens = scan("7 3 /").unwrap();
/// assert_eq!(tokens, vec![Token::Number(7), Token::Number(3), Token::Div]);
/// assert!(scan("01 + 2").is_err());
/// ```
pub fn scan(text: &str) -> Result<Vec<Token>, LexicalError> {
    text.split_whitespace().map(str::parse::<Token>).collect()
}

/// Renders the given tokens back into canonical source text,
/// with a single space between each token.
///
/// # Examples
///
/// ```
/// use stackcalc::interpreter::lexer::{scan, tokens_to_string};
///
/// let tokens = scan("  1   2\t+ ").unwrap();
/// assert_eq!(tokens_to_string(&tokens), "1 2 +");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}
