use crate::interpreter::token::Token;

/// Decides whether the given tokens form exactly one RPN expression:
///
/// ```text
/// Expr   = Number | Expr Expr Op
/// Op     = "+" | "-" | "*" | "/"
/// Number = "0" | NonZeroDigit { Digit }
/// ```
///
/// Runs in a single pass, tracking how many operands an evaluation stack would hold.
///
/// # Examples
///
/// ```
/// use stackcalc::interpreter::lexer::scan;
/// use stackcalc::interpreter::parser::parse;
///
/// assert!(parse(&scan("1 2 +").unwrap()));
/// assert!(!parse(&scan("1 2").unwrap()));
/// ```
pub fn parse(tokens: &[Token]) -> bool {
    let mut depth: usize = 0;
    for token in tokens {
        if token.is_value() {
            depth += 1;
        } else {
            // An operator needs two operands and leaves one result behind.
            if depth < 2 {
                return false;
            }
            depth -= 1;
        }
    }
    !tokens.is_empty() && depth == 1
}
