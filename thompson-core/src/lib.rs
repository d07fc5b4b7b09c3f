//! Thompson Core Library
//!
//! Converts a regular expression over an alphanumeric alphabet, with union
//! (`+`), concatenation (`.` or juxtaposition), Kleene star (`*`), grouping
//! and the epsilon marker (`$`), into an NFA using Thompson's construction.
//!
//! The pipeline is: validate and tokenize, insert explicit concatenation,
//! convert to postfix, evaluate the postfix sequence into fragments, name
//! states breadth-first, and serialize the canonical tuple.
//!
//! ```
//! use thompson_core::convert;
//!
//! let tuple = convert("a").unwrap();
//! assert_eq!(tuple.states, vec!["q0", "q1"]);
//! assert_eq!(tuple.final_states, vec!["q1"]);
//! ```

pub mod concat;
pub mod config;
pub mod dot;
pub mod error;
pub mod lexer;
pub mod naming;
pub mod nfa;
pub mod postfix;
pub mod thompson;
pub mod tuple;

pub use concat::{explicit_concat, insert_concat};
pub use config::{Config, EmptyRegexPolicy, RegexSource, UnreachablePolicy};
pub use error::{ConvertError, MalformedError, Result};
pub use lexer::{EPSILON, Lexer, Token, tokenize, validate};
pub use naming::assign_names;
pub use nfa::{Builder, Fragment, Nfa, State, StateId, Symbol, Transition};
pub use postfix::{check_arity, to_postfix};
pub use tuple::NfaTuple;

/// Build the named automaton for `regex`
///
/// The alphabet is collected and every reachable state is named.
pub fn compile(regex: &str, config: &Config) -> Result<Nfa> {
    let tokens = tokenize(regex)?;
    let explicit = insert_concat(&tokens);
    log::debug!("explicit concatenation: {}", lexer::render(&explicit));

    let postfix = to_postfix(&explicit)?;
    log::debug!("postfix: {}", lexer::render(&postfix));

    let mut nfa = thompson::build(&postfix, config.empty_regex)?;
    nfa.collect_alphabet(regex);
    assign_names(&mut nfa);
    Ok(nfa)
}

/// Convert `regex` to its tuple with the default configuration
pub fn convert(regex: &str) -> Result<NfaTuple> {
    convert_with(regex, &Config::default())
}

/// Convert `regex` to its tuple
pub fn convert_with(regex: &str, config: &Config) -> Result<NfaTuple> {
    let nfa = compile(regex, config)?;
    Ok(NfaTuple::from_nfa(&nfa, config.unreachable))
}

/// Convert with every intermediate stage retained
pub fn convert_debug(regex: &str, config: &Config) -> Result<ConversionReport> {
    let tokens = tokenize(regex)?;
    let explicit = insert_concat(&tokens);
    let postfix = to_postfix(&explicit)?;
    let tuple = convert_with(regex, config)?;

    Ok(ConversionReport {
        input: regex.to_string(),
        explicit: lexer::render(&explicit),
        postfix: lexer::render(&postfix),
        tuple,
    })
}

/// Result of a conversion with debug information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// The regex as given
    pub input: String,
    /// The regex with explicit concatenation
    pub explicit: String,
    /// The postfix sequence
    pub postfix: String,
    /// The serialized automaton
    pub tuple: NfaTuple,
}

impl ConversionReport {
    /// Print a formatted report of the conversion
    pub fn report(&self) {
        println!("Conversion Report");
        println!("=================");
        println!("Input:    {}", self.input);
        println!("Explicit: {}", self.explicit);
        println!("Postfix:  {}", self.postfix);
        println!("States:   {}", self.tuple.states.len());
        println!("Edges:    {}", self.tuple.transition_function.len());
        println!("Final:    {}", self.tuple.final_states.join(", "));
    }
}
