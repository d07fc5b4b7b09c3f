//! Validator and tokenizer for regex input
//!
//! The accepted language is small: ASCII alphanumeric literals, the epsilon
//! marker `$`, and the operators `*`, `.`, `+`, `(` and `)`. Whitespace is
//! insignificant and skipped, so an all-whitespace input is the empty regex.

use crate::error::{ConvertError, MalformedError, Result};
use std::fmt;
use std::str::Chars;

/// The epsilon marker as it appears in regex input and serialized output
pub const EPSILON: char = '$';

/// A token in a regex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// An alphabet symbol
    Literal(char),
    /// The epsilon marker `$`
    Epsilon,
    /// Kleene star `*`
    Star,
    /// Concatenation `.`
    Concat,
    /// Union `+`
    Union,
    /// Left parenthesis `(`
    LeftParen,
    /// Right parenthesis `)`
    RightParen,
}

impl Token {
    /// Map a single input character to its token, if it belongs to the language
    pub fn from_char(c: char) -> Option<Token> {
        match c {
            '*' => Some(Token::Star),
            '.' => Some(Token::Concat),
            '+' => Some(Token::Union),
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            EPSILON => Some(Token::Epsilon),
            c if c.is_ascii_alphanumeric() => Some(Token::Literal(c)),
            _ => None,
        }
    }

    /// The character this token is written as
    pub fn as_char(&self) -> char {
        match self {
            Token::Literal(c) => *c,
            Token::Epsilon => EPSILON,
            Token::Star => '*',
            Token::Concat => '.',
            Token::Union => '+',
            Token::LeftParen => '(',
            Token::RightParen => ')',
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Lexer for regex input
///
/// Besides tokenizing, the lexer tracks open groups so that unbalanced
/// parentheses are reported with their position before any evaluation
/// takes place.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Chars<'a>,
    position: usize,
    open_groups: Vec<usize>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input string
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            chars: input.chars(),
            position: 0,
            open_groups: Vec::new(),
        }
    }

    /// Read the next token, skipping whitespace
    ///
    /// Returns `Ok(None)` at the end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            let Some(c) = self.chars.next() else {
                return match self.open_groups.last() {
                    Some(&position) => Err(MalformedError::UnclosedGroup { position }.into()),
                    None => Ok(None),
                };
            };
            let position = self.position;
            self.position += 1;

            if c.is_whitespace() {
                continue;
            }

            let token = Token::from_char(c).ok_or(ConvertError::InvalidRegex {
                position,
                character: c,
            })?;

            match token {
                Token::LeftParen => self.open_groups.push(position),
                Token::RightParen => {
                    if self.open_groups.pop().is_none() {
                        return Err(MalformedError::UnmatchedClose { position }.into());
                    }
                }
                _ => {}
            }

            return Ok(Some(token));
        }
    }

    /// Tokenize the entire input
    ///
    /// Character validation covers the whole input first, so an invalid
    /// character is reported even when it follows a structural error.
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        validate(self.input)?;
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

/// Check that every character of `input` is allowed
///
/// Empty and all-whitespace inputs are valid.
pub fn validate(input: &str) -> Result<()> {
    for (position, c) in input.chars().enumerate() {
        if !c.is_whitespace() && Token::from_char(c).is_none() {
            return Err(ConvertError::InvalidRegex {
                position,
                character: c,
            });
        }
    }
    Ok(())
}

/// Tokenize a regex string
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}

/// Render a token sequence back into regex text
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(Token::as_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals_and_operators() {
        let tokens = tokenize("a+(b*)").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Literal('a'),
                Token::Union,
                Token::LeftParen,
                Token::Literal('b'),
                Token::Star,
                Token::RightParen,
            ]
        );
    }

    #[test]
    fn test_epsilon_marker() {
        assert_eq!(tokenize("$").unwrap(), vec![Token::Epsilon]);
    }

    #[test]
    fn test_digits_and_uppercase() {
        let tokens = tokenize("0Z").unwrap();
        assert_eq!(tokens, vec![Token::Literal('0'), Token::Literal('Z')]);
    }

    #[test]
    fn test_whitespace_skipped() {
        assert_eq!(tokenize("a b").unwrap(), tokenize("ab").unwrap());
        assert!(tokenize("   ").unwrap().is_empty());
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_character() {
        let err = tokenize("a#").unwrap_err();
        assert_eq!(
            err,
            ConvertError::InvalidRegex {
                position: 1,
                character: '#'
            }
        );
    }

    #[test]
    fn test_invalid_character_reported_before_parens() {
        let err = tokenize(")a|").unwrap_err();
        assert!(matches!(
            err,
            ConvertError::InvalidRegex { character: '|', .. }
        ));
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(matches!(
            validate("aé"),
            Err(ConvertError::InvalidRegex { position: 1, .. })
        ));
    }

    #[test]
    fn test_unmatched_close() {
        let err = tokenize("a)").unwrap_err();
        assert_eq!(
            err,
            ConvertError::Malformed(MalformedError::UnmatchedClose { position: 1 })
        );
    }

    #[test]
    fn test_unclosed_group() {
        let err = tokenize("(a(b)").unwrap_err();
        assert_eq!(
            err,
            ConvertError::Malformed(MalformedError::UnclosedGroup { position: 0 })
        );
    }

    #[test]
    fn test_positions_count_whitespace() {
        let err = tokenize(" a )").unwrap_err();
        assert_eq!(
            err,
            ConvertError::Malformed(MalformedError::UnmatchedClose { position: 3 })
        );
    }

    #[test]
    fn test_render() {
        let tokens = tokenize("(a + b) c").unwrap();
        assert_eq!(render(&tokens), "(a+b)c");
    }
}
