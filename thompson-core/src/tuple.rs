//! Canonical tuple serialization of a named NFA

use crate::config::UnreachablePolicy;
use crate::nfa::{Nfa, StateId};
use serde::ser::Error as _;
use serde::{Deserialize, Serialize};

/// The five-field automaton record
///
/// Transitions are `(source, symbol, destination)` and serialize as
/// three-element arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NfaTuple {
    /// State names in collection order
    pub states: Vec<String>,
    /// Alphabet in first-occurrence order
    pub letters: Vec<String>,
    /// Transitions in collection order, then per-state insertion order
    pub transition_function: Vec<(String, String, String)>,
    /// The start state, as a singleton list
    pub start_states: Vec<String>,
    /// Accepting states in accept-set order
    pub final_states: Vec<String>,
}

impl NfaTuple {
    /// Serialize a named automaton
    ///
    /// Unnamed states are kept with an empty name or dropped, depending on
    /// `policy`.
    pub fn from_nfa(nfa: &Nfa, policy: UnreachablePolicy) -> Self {
        let keep = |id: StateId| policy == UnreachablePolicy::Retain || nfa.name(id).is_some();
        let name = |id: StateId| nfa.name(id).unwrap_or_default().to_string();

        let states = nfa
            .states()
            .filter(|s| keep(s.id))
            .map(|s| name(s.id))
            .collect();

        let transition_function = nfa
            .states()
            .filter(|s| keep(s.id))
            .flat_map(|s| {
                s.transitions
                    .iter()
                    .filter(move |t| keep(t.target))
                    .map(move |t| (name(s.id), t.symbol.to_string(), name(t.target)))
            })
            .collect();

        let final_states = nfa
            .accepts()
            .iter()
            .copied()
            .filter(|&id| keep(id))
            .map(name)
            .collect();

        NfaTuple {
            states,
            letters: nfa.alphabet().iter().map(char::to_string).collect(),
            transition_function,
            start_states: vec![name(nfa.start())],
            final_states,
        }
    }

    /// Whether `state` is listed as final
    pub fn is_final(&self, state: &str) -> bool {
        self.final_states.iter().any(|s| s == state)
    }

    /// JSON text with four-space indentation
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(serde_json::Error::custom)
    }

    /// Parse a tuple back from JSON text
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
