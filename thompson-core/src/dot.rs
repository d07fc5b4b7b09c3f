//! Graphviz DOT rendering of an automaton tuple
//!
//! One node per state (double circle when final), one labelled edge per
//! transition with epsilon drawn as `ε`, and a point-shaped `start`
//! pseudo-node pointing at each start state. Layout runs left to right.

use crate::lexer::EPSILON;
use crate::tuple::NfaTuple;
use std::fmt::{self, Write};

/// Edge label for a serialized symbol
fn label(symbol: &str) -> &str {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(EPSILON), None) => "ε",
        _ => symbol,
    }
}

fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Write the DOT description of `tuple` into `out`
pub fn write_dot<W: Write>(tuple: &NfaTuple, out: &mut W) -> fmt::Result {
    writeln!(out, "digraph nfa {{")?;
    writeln!(out, "    rankdir=LR;")?;

    for state in &tuple.states {
        let shape = if tuple.is_final(state) {
            "doublecircle"
        } else {
            "circle"
        };
        writeln!(out, "    {} [shape={}];", quote(state), shape)?;
    }

    for (source, symbol, target) in &tuple.transition_function {
        writeln!(
            out,
            "    {} -> {} [label={}];",
            quote(source),
            quote(target),
            quote(label(symbol))
        )?;
    }

    writeln!(out, "    start [shape=point];")?;
    for start in &tuple.start_states {
        writeln!(out, "    start -> {};", quote(start))?;
    }

    writeln!(out, "}}")
}

/// Render `tuple` as a DOT document
pub fn render(tuple: &NfaTuple) -> String {
    let mut out = String::new();
    // fmt::Write for String never fails
    let _ = write_dot(tuple, &mut out);
    out
}
