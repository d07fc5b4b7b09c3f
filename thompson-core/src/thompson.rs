//! Thompson's construction over a postfix token sequence
//!
//! Operands push base fragments; operators pop their operands (right
//! operand first) and push the combined fragment. Exactly one fragment must
//! remain at the end.

use crate::config::EmptyRegexPolicy;
use crate::error::{MalformedError, Result};
use crate::lexer::Token;
use crate::nfa::{Builder, Fragment, Nfa};
use crate::postfix::check_arity;

/// Pop one operand for `operator`
fn pop(
    stack: &mut Vec<Fragment>,
    operator: Token,
    index: usize,
) -> std::result::Result<Fragment, MalformedError> {
    stack.pop().ok_or(MalformedError::MissingOperand {
        operator: operator.as_char(),
        index,
    })
}

/// Pop the two operands of a binary operator as `(left, right)`
fn pop_pair(
    stack: &mut Vec<Fragment>,
    operator: Token,
    index: usize,
) -> std::result::Result<(Fragment, Fragment), MalformedError> {
    let right = pop(stack, operator, index)?;
    let left = pop(stack, operator, index)?;
    Ok((left, right))
}

/// Build an NFA from a postfix token sequence
///
/// An empty sequence yields the single-state automaton selected by `policy`.
pub fn build(postfix: &[Token], policy: EmptyRegexPolicy) -> Result<Nfa> {
    check_arity(postfix)?;

    let mut builder = Builder::new();

    if postfix.is_empty() {
        log::debug!("empty postfix, building {:?} automaton", policy);
        let fragment = builder.empty(policy);
        return Ok(builder.finish(fragment));
    }

    let mut stack: Vec<Fragment> = Vec::new();

    for (index, &token) in postfix.iter().enumerate() {
        let fragment = match token {
            Token::Literal(c) => builder.symbol(c),
            Token::Epsilon => builder.epsilon(),
            Token::Union => {
                let (n1, n2) = pop_pair(&mut stack, token, index)?;
                builder.union(n1, n2)
            }
            Token::Concat => {
                let (n1, n2) = pop_pair(&mut stack, token, index)?;
                builder.concat(n1, n2)
            }
            Token::Star => {
                let n = pop(&mut stack, token, index)?;
                builder.star(n)
            }
            // Postfix sequences never carry grouping
            Token::LeftParen => {
                return Err(MalformedError::UnclosedGroup { position: index }.into());
            }
            Token::RightParen => {
                return Err(MalformedError::UnmatchedClose { position: index }.into());
            }
        };
        log::trace!(
            "{} -> fragment with {} states, {} accepts",
            token,
            fragment.len(),
            fragment.accepts.len()
        );
        stack.push(fragment);
    }

    let fragment = match stack.len() {
        0 => return Err(MalformedError::NoFragment.into()),
        1 => stack.pop().ok_or(MalformedError::NoFragment)?,
        count => return Err(MalformedError::DanglingFragments { count }.into()),
    };

    log::debug!(
        "built automaton with {} states from {} postfix tokens",
        fragment.len(),
        postfix.len()
    );
    Ok(builder.finish(fragment))
}
