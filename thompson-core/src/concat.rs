//! Explicit concatenation insertion
//!
//! Juxtaposition is concatenation: `ab` means `a.b`. This pass rewrites a
//! token sequence so every concatenation is an explicit `.` operator, which
//! lets the postfix converter treat it like any other binary operator.

use crate::error::Result;
use crate::lexer::{self, Token};

/// Whether a concatenation may follow this token
fn ends_operand(token: Token) -> bool {
    !matches!(token, Token::LeftParen | Token::Concat | Token::Union)
}

/// Whether this token may start the right-hand side of a concatenation
fn starts_operand(token: Token) -> bool {
    !matches!(
        token,
        Token::RightParen | Token::Star | Token::Union | Token::Concat
    )
}

/// Insert a `.` between every adjacent pair of tokens where concatenation is implied
pub fn insert_concat(tokens: &[Token]) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len() * 2);
    for (i, &token) in tokens.iter().enumerate() {
        out.push(token);
        if let Some(&next) = tokens.get(i + 1) {
            if ends_operand(token) && starts_operand(next) {
                out.push(Token::Concat);
            }
        }
    }
    out
}

/// Validate `input` and return its explicit-concatenation form as text
pub fn explicit_concat(input: &str) -> Result<String> {
    let tokens = lexer::tokenize(input)?;
    Ok(lexer::render(&insert_concat(&tokens)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_literals() {
        assert_eq!(explicit_concat("ab").unwrap(), "a.b");
    }

    #[test]
    fn test_group_followed_by_literal() {
        assert_eq!(explicit_concat("(a+b)c").unwrap(), "(a+b).c");
    }

    #[test]
    fn test_star_then_literal() {
        assert_eq!(explicit_concat("a*b").unwrap(), "a*.b");
    }

    #[test]
    fn test_literal_then_group() {
        assert_eq!(explicit_concat("a(b)").unwrap(), "a.(b)");
    }

    #[test]
    fn test_adjacent_groups() {
        assert_eq!(explicit_concat("(a)(b)").unwrap(), "(a).(b)");
    }

    #[test]
    fn test_no_insertion_around_operators() {
        assert_eq!(explicit_concat("a+b").unwrap(), "a+b");
        assert_eq!(explicit_concat("a.b").unwrap(), "a.b");
        assert_eq!(explicit_concat("a*").unwrap(), "a*");
    }

    #[test]
    fn test_epsilon_is_an_operand() {
        assert_eq!(explicit_concat("a$b").unwrap(), "a.$.b");
    }

    #[test]
    fn test_empty() {
        assert!(insert_concat(&[]).is_empty());
    }
}
