//! Error types for regex to NFA conversion
//!
//! Errors are split by the stage that detects them: the validator rejects
//! characters outside the alphabet, while the remaining stages report a
//! structurally malformed expression.

use thiserror::Error;

/// The main error type for a conversion run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The input contains a character outside the allowed set
    #[error("invalid regex: unexpected character '{character}' at position {position}")]
    InvalidRegex {
        /// Zero-based char index in the raw input
        position: usize,
        /// The offending character
        character: char,
    },

    /// The expression is well-lexed but cannot be evaluated
    #[error("malformed expression: {0}")]
    Malformed(#[from] MalformedError),
}

/// Structural problems found while converting or evaluating an expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedError {
    /// A `)` without a matching `(`
    #[error("unmatched ')' at position {position}")]
    UnmatchedClose {
        /// Position of the closing parenthesis
        position: usize,
    },

    /// A `(` that is never closed
    #[error("unclosed group opened at position {position}")]
    UnclosedGroup {
        /// Position of the opening parenthesis
        position: usize,
    },

    /// An operator applied with fewer operands than it needs
    #[error("operator '{operator}' at postfix index {index} is missing an operand")]
    MissingOperand {
        /// The operator symbol
        operator: char,
        /// Index of the operator in the postfix sequence
        index: usize,
    },

    /// Evaluation finished with more than one fragment on the stack
    #[error("expression left {count} disconnected fragments")]
    DanglingFragments {
        /// Number of fragments left over
        count: usize,
    },

    /// Evaluation finished with no fragment at all
    #[error("expression produced no automaton")]
    NoFragment,
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_regex_display() {
        let err = ConvertError::InvalidRegex {
            position: 1,
            character: '#',
        };
        assert_eq!(
            err.to_string(),
            "invalid regex: unexpected character '#' at position 1"
        );
    }

    #[test]
    fn test_missing_operand_display() {
        let err = MalformedError::MissingOperand {
            operator: '+',
            index: 1,
        };
        assert_eq!(
            err.to_string(),
            "operator '+' at postfix index 1 is missing an operand"
        );
    }

    #[test]
    fn test_convert_error_from_malformed() {
        let err: ConvertError = MalformedError::UnclosedGroup { position: 0 }.into();
        assert_eq!(
            err.to_string(),
            "malformed expression: unclosed group opened at position 0"
        );
    }

    #[test]
    fn test_dangling_fragments_display() {
        let err = MalformedError::DanglingFragments { count: 2 };
        assert_eq!(err.to_string(), "expression left 2 disconnected fragments");
    }
}
