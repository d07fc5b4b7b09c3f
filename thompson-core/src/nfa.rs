//! NFA (Nondeterministic Finite Automaton) model and Thompson fragments
//!
//! States live in a single arena owned by a [`Builder`] for the duration of
//! one conversion run; a [`StateId`] is an index into that arena. Fragments
//! never own states. Merging two fragments only records a new start state,
//! a new accept list, and the combined collection order, plus the epsilon
//! transitions the construction rule calls for.

use crate::config::EmptyRegexPolicy;
use crate::lexer::{EPSILON, Token};
use std::collections::HashSet;
use std::fmt;

/// An NFA state ID
pub type StateId = usize;

/// The label of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Transition on an alphabet symbol
    Char(char),
    /// Epsilon transition (no input consumed)
    Epsilon,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{}", c),
            Symbol::Epsilon => write!(f, "{}", EPSILON),
        }
    }
}

/// An outgoing transition of a state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The symbol consumed
    pub symbol: Symbol,
    /// The destination state
    pub target: StateId,
}

/// An NFA state
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    /// Identity, unique within one conversion run
    pub id: StateId,
    /// Display name, unset until the naming pass runs
    pub name: Option<String>,
    /// Outgoing transitions in insertion order
    pub transitions: Vec<Transition>,
}

impl State {
    fn new(id: StateId) -> Self {
        State {
            id,
            name: None,
            transitions: Vec::new(),
        }
    }
}

/// A partially built automaton: one start state, its accept states, and
/// the states it covers in collection order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// The entry state
    pub start: StateId,
    /// Accepting states, in accept-set order
    pub accepts: Vec<StateId>,
    /// Every state of the fragment, in collection order
    pub states: Vec<StateId>,
}

impl Fragment {
    /// Number of states in the fragment
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the fragment has no states (never true for built fragments)
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// State arena and fragment constructors for one conversion run
#[derive(Debug, Default)]
pub struct Builder {
    states: Vec<State>,
}

impl Builder {
    /// Create a builder with an empty arena
    pub fn new() -> Self {
        Builder { states: Vec::new() }
    }

    /// Allocate a new state and return its ID
    fn new_state(&mut self) -> StateId {
        let id = self.states.len();
        self.states.push(State::new(id));
        id
    }

    /// Add a transition between states
    fn add_transition(&mut self, from: StateId, symbol: Symbol, to: StateId) {
        self.states[from].transitions.push(Transition { symbol, target: to });
    }

    /// Number of states allocated so far
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Look up an allocated state
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id)
    }

    /// Two states joined by a transition on `c`
    pub fn symbol(&mut self, c: char) -> Fragment {
        let start = self.new_state();
        let accept = self.new_state();
        self.add_transition(start, Symbol::Char(c), accept);
        Fragment {
            start,
            accepts: vec![accept],
            states: vec![start, accept],
        }
    }

    /// A single state that is both start and accept
    pub fn epsilon(&mut self) -> Fragment {
        let start = self.new_state();
        Fragment {
            start,
            accepts: vec![start],
            states: vec![start],
        }
    }

    /// A single state for the empty regex, accepting according to `policy`
    pub fn empty(&mut self, policy: EmptyRegexPolicy) -> Fragment {
        let start = self.new_state();
        let accepts = match policy {
            EmptyRegexPolicy::AcceptsEmptyString => vec![start],
            EmptyRegexPolicy::AcceptsNothing => Vec::new(),
        };
        Fragment {
            start,
            accepts,
            states: vec![start],
        }
    }

    /// `n1 + n2`: a new start with epsilon transitions to both operands
    pub fn union(&mut self, n1: Fragment, n2: Fragment) -> Fragment {
        let start = self.new_state();
        self.add_transition(start, Symbol::Epsilon, n1.start);
        self.add_transition(start, Symbol::Epsilon, n2.start);

        let mut states = Vec::with_capacity(n1.len() + n2.len() + 1);
        states.push(start);
        states.extend(n1.states);
        states.extend(n2.states);

        let mut accepts = n1.accepts;
        accepts.extend(n2.accepts);

        Fragment {
            start,
            accepts,
            states,
        }
    }

    /// `n1 . n2`: every accept of `n1` gets an epsilon transition to the start of `n2`
    pub fn concat(&mut self, n1: Fragment, n2: Fragment) -> Fragment {
        for &accept in &n1.accepts {
            self.add_transition(accept, Symbol::Epsilon, n2.start);
        }

        let mut states = n1.states;
        states.extend(n2.states);

        Fragment {
            start: n1.start,
            accepts: n2.accepts,
            states,
        }
    }

    /// `n*`: a new accepting start that loops through `n`
    ///
    /// The accepts of `n` keep their transitions but are no longer final.
    pub fn star(&mut self, n: Fragment) -> Fragment {
        let start = self.new_state();
        self.add_transition(start, Symbol::Epsilon, n.start);
        for &accept in &n.accepts {
            self.add_transition(accept, Symbol::Epsilon, n.start);
            self.add_transition(accept, Symbol::Epsilon, start);
        }

        let mut states = Vec::with_capacity(n.len() + 1);
        states.push(start);
        states.extend(n.states);

        Fragment {
            start,
            accepts: vec![start],
            states,
        }
    }

    /// Turn the final fragment into an automaton, consuming the arena
    pub fn finish(self, fragment: Fragment) -> Nfa {
        Nfa {
            states: self.states,
            order: fragment.states,
            start: fragment.start,
            accepts: fragment.accepts,
            alphabet: Vec::new(),
        }
    }
}

/// An NFA (Nondeterministic Finite Automaton)
///
/// Structure is fixed once built; only the alphabet and the state names
/// are filled in afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Nfa {
    /// The arena, indexed by state ID
    states: Vec<State>,
    /// State IDs in collection order
    order: Vec<StateId>,
    start: StateId,
    accepts: Vec<StateId>,
    alphabet: Vec<char>,
}

impl Nfa {
    /// The start state
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Accepting states in accept-set order
    pub fn accepts(&self) -> &[StateId] {
        &self.accepts
    }

    /// Whether `id` is an accepting state
    pub fn is_accepting(&self, id: StateId) -> bool {
        self.accepts.contains(&id)
    }

    /// State IDs in collection order
    pub fn state_ids(&self) -> &[StateId] {
        &self.order
    }

    /// States in collection order
    pub fn states(&self) -> impl Iterator<Item = &State> + '_ {
        self.order.iter().filter_map(|&id| self.states.get(id))
    }

    /// Look up a state by ID
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id)
    }

    pub(crate) fn state_mut(&mut self, id: StateId) -> Option<&mut State> {
        self.states.get_mut(id)
    }

    /// The display name of a state, once named
    pub fn name(&self, id: StateId) -> Option<&str> {
        self.states.get(id).and_then(|s| s.name.as_deref())
    }

    /// Number of states in the collection
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the collection is empty (never true for built automata)
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of transitions
    pub fn transition_count(&self) -> usize {
        self.states().map(|s| s.transitions.len()).sum()
    }

    /// The collected alphabet
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Collect the alphabet from the regex text, in first-occurrence order
    ///
    /// Operators, the epsilon marker and whitespace are not letters.
    pub fn collect_alphabet(&mut self, regex: &str) {
        self.alphabet.clear();
        for c in regex.chars() {
            if let Some(Token::Literal(c)) = Token::from_char(c) {
                if !self.alphabet.contains(&c) {
                    self.alphabet.push(c);
                }
            }
        }
    }

    /// Compute epsilon closure of a set of states
    pub fn epsilon_closure(&self, states: &HashSet<StateId>) -> HashSet<StateId> {
        let mut closure = states.clone();
        let mut stack: Vec<_> = states.iter().copied().collect();

        while let Some(state) = stack.pop() {
            let Some(state) = self.states.get(state) else {
                continue;
            };
            for transition in &state.transitions {
                if transition.symbol == Symbol::Epsilon && closure.insert(transition.target) {
                    stack.push(transition.target);
                }
            }
        }

        closure
    }
}
