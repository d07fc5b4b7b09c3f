//! Infix to postfix conversion
//!
//! Operator-precedence (shunting-yard) conversion of an explicit-concatenation
//! token sequence. Precedence from highest to lowest: star, concatenation,
//! union. All operators are left-associative.

use crate::error::{MalformedError, Result};
use crate::lexer::Token;

/// Binding strength of an operator token
pub fn precedence(token: Token) -> Option<u8> {
    match token {
        Token::Star => Some(2),
        Token::Concat => Some(1),
        Token::Union => Some(0),
        _ => None,
    }
}

/// Number of operands an operator consumes
pub fn arity(token: Token) -> usize {
    match token {
        Token::Star => 1,
        Token::Concat | Token::Union => 2,
        _ => 0,
    }
}

/// Convert an infix token sequence into postfix order
///
/// Parentheses are consumed and never appear in the output. Positions in
/// parenthesis errors are indices into `tokens`.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    // Operators waiting for their right operand, with the token index of each `(`
    let mut stack: Vec<(Token, usize)> = Vec::new();

    for (index, &token) in tokens.iter().enumerate() {
        match token {
            Token::Literal(_) | Token::Epsilon => output.push(token),
            Token::LeftParen => stack.push((token, index)),
            Token::RightParen => loop {
                match stack.pop() {
                    Some((Token::LeftParen, _)) => break,
                    Some((op, _)) => output.push(op),
                    None => return Err(MalformedError::UnmatchedClose { position: index }.into()),
                }
            },
            op => {
                let priority = precedence(op).unwrap_or_default();
                while let Some(&(top, _)) = stack.last() {
                    match precedence(top) {
                        Some(top_priority) if priority <= top_priority => {
                            output.push(top);
                            stack.pop();
                        }
                        _ => break,
                    }
                }
                stack.push((op, index));
            }
        }
    }

    while let Some((op, index)) = stack.pop() {
        if op == Token::LeftParen {
            return Err(MalformedError::UnclosedGroup { position: index }.into());
        }
        output.push(op);
    }

    Ok(output)
}

/// Check that every operator in a postfix sequence has its operands
///
/// An empty sequence is well formed and denotes the empty regex. This runs
/// before evaluation so the fragment stack can never underflow.
pub fn check_arity(postfix: &[Token]) -> std::result::Result<(), MalformedError> {
    let mut depth = 0usize;
    for (index, &token) in postfix.iter().enumerate() {
        match token {
            Token::Literal(_) | Token::Epsilon => {
                depth += 1;
                continue;
            }
            Token::LeftParen => return Err(MalformedError::UnclosedGroup { position: index }),
            Token::RightParen => return Err(MalformedError::UnmatchedClose { position: index }),
            _ => {}
        }
        let needed = arity(token);
        if depth < needed {
            return Err(MalformedError::MissingOperand {
                operator: token.as_char(),
                index,
            });
        }
        depth = depth + 1 - needed;
    }
    if depth > 1 {
        return Err(MalformedError::DanglingFragments { count: depth });
    }
    Ok(())
}
